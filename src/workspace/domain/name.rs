//! Normalised workspace name type.

use super::WorkspaceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the workspace synthesised from the single-instance fallback keys.
pub const FALLBACK_WORKSPACE_NAME: &str = "default";

/// Trimmed, lower-case workspace identifier.
///
/// Names derived from environment keys (`N8N_URL_PERSONAL`) and names
/// supplied by callers (`"Personal"`) normalise to the same value, so lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceName(String);

impl WorkspaceName {
    /// Creates a normalised workspace name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyWorkspaceName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, WorkspaceDomainError> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(WorkspaceDomainError::EmptyWorkspaceName);
        }
        Ok(Self(normalized))
    }

    /// Returns the fallback workspace name, `"default"`.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_WORKSPACE_NAME.to_owned())
    }

    /// Returns the workspace name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkspaceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
