//! Workspace definition value object.

use super::{WorkspaceDomainError, WorkspaceName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque API credential forwarded to the workspace client.
///
/// The secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a credential string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Environment keys that produced a workspace definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceKeys {
    /// Key holding the endpoint URL.
    pub url_key: String,
    /// Key holding the credential.
    pub credential_key: String,
}

impl SourceKeys {
    /// Creates a source key pair.
    #[must_use]
    pub fn new(url_key: impl Into<String>, credential_key: impl Into<String>) -> Self {
        Self {
            url_key: url_key.into(),
            credential_key: credential_key.into(),
        }
    }
}

/// A named workspace with both an endpoint and a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDefinition {
    name: WorkspaceName,
    endpoint: String,
    credential: Credential,
    source_keys: SourceKeys,
}

impl WorkspaceDefinition {
    /// Creates a workspace definition.
    ///
    /// The endpoint is trimmed; the credential is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyEndpoint`] or
    /// [`WorkspaceDomainError::EmptyCredential`] when either value is blank.
    pub fn new(
        name: WorkspaceName,
        endpoint: impl AsRef<str>,
        credential: Credential,
        source_keys: SourceKeys,
    ) -> Result<Self, WorkspaceDomainError> {
        let trimmed_endpoint = endpoint.as_ref().trim();
        if trimmed_endpoint.is_empty() {
            return Err(WorkspaceDomainError::EmptyEndpoint(name.as_str().to_owned()));
        }
        if credential.expose().trim().is_empty() {
            return Err(WorkspaceDomainError::EmptyCredential(
                name.as_str().to_owned(),
            ));
        }

        Ok(Self {
            name,
            endpoint: trimmed_endpoint.to_owned(),
            credential,
            source_keys,
        })
    }

    /// Returns the workspace name.
    #[must_use]
    pub const fn name(&self) -> &WorkspaceName {
        &self.name
    }

    /// Returns the endpoint base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the environment keys that produced this definition.
    #[must_use]
    pub const fn source_keys(&self) -> &SourceKeys {
        &self.source_keys
    }
}
