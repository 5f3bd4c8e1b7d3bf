//! Error types for workspace domain validation.

use thiserror::Error;

/// Errors returned while constructing workspace domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// The workspace name is empty after trimming.
    #[error("workspace name must not be empty")]
    EmptyWorkspaceName,

    /// The workspace endpoint is empty after trimming.
    #[error("workspace '{0}' has an empty endpoint")]
    EmptyEndpoint(String),

    /// The workspace credential is empty after trimming.
    #[error("workspace '{0}' has an empty credential")]
    EmptyCredential(String),
}
