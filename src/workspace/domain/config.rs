//! Environment key layout used by workspace discovery.

use serde::{Deserialize, Serialize};

/// Names of the environment keys consulted during discovery.
///
/// Defaults follow the n8n convention: `N8N_URL_<NAME>` / `N8N_TOKEN_<NAME>`
/// pairs, the `N8N_API_URL` / `N8N_API_KEY` single-instance fallback and the
/// `N8N_DEFAULT_WORKSPACE` selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    url_prefix: String,
    credential_prefix: String,
    fallback_url_key: String,
    fallback_credential_key: String,
    default_selector_key: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            url_prefix: "N8N_URL_".to_owned(),
            credential_prefix: "N8N_TOKEN_".to_owned(),
            fallback_url_key: "N8N_API_URL".to_owned(),
            fallback_credential_key: "N8N_API_KEY".to_owned(),
            default_selector_key: "N8N_DEFAULT_WORKSPACE".to_owned(),
        }
    }
}

impl DiscoveryConfig {
    /// Creates the default key layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix of per-workspace URL keys.
    #[must_use]
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Sets the prefix of per-workspace credential keys.
    #[must_use]
    pub fn with_credential_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.credential_prefix = prefix.into();
        self
    }

    /// Sets the single-instance fallback keys.
    #[must_use]
    pub fn with_fallback_keys(
        mut self,
        url_key: impl Into<String>,
        credential_key: impl Into<String>,
    ) -> Self {
        self.fallback_url_key = url_key.into();
        self.fallback_credential_key = credential_key.into();
        self
    }

    /// Sets the key naming the default workspace.
    #[must_use]
    pub fn with_default_selector_key(mut self, key: impl Into<String>) -> Self {
        self.default_selector_key = key.into();
        self
    }

    /// Returns the per-workspace URL key prefix.
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Returns the per-workspace credential key prefix.
    #[must_use]
    pub fn credential_prefix(&self) -> &str {
        &self.credential_prefix
    }

    /// Returns the fallback URL key.
    #[must_use]
    pub fn fallback_url_key(&self) -> &str {
        &self.fallback_url_key
    }

    /// Returns the fallback credential key.
    #[must_use]
    pub fn fallback_credential_key(&self) -> &str {
        &self.fallback_credential_key
    }

    /// Returns the default-selector key.
    #[must_use]
    pub fn default_selector_key(&self) -> &str {
        &self.default_selector_key
    }

    /// Returns the credential key paired with a URL key suffix.
    #[must_use]
    pub fn credential_key_for(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.credential_prefix)
    }

    /// Instructional text for a process with no workspace configured.
    #[must_use]
    pub fn setup_hint(&self) -> String {
        format!(
            "set {url}<NAME> and {token}<NAME> for each workspace, or {fallback_url} and {fallback_key} for a single instance",
            url = self.url_prefix,
            token = self.credential_prefix,
            fallback_url = self.fallback_url_key,
            fallback_key = self.fallback_credential_key,
        )
    }
}
