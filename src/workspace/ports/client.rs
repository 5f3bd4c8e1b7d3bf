//! Client construction port for workspace API handles.

use crate::workspace::domain::{WorkspaceDefinition, WorkspaceName};
use std::sync::Arc;
use thiserror::Error;

/// Builds one API client handle for a workspace.
///
/// Implementations must not perform network I/O; the pool calls `build`
/// while holding its lock.
pub trait ClientFactory: Send + Sync {
    /// Client handle type shared between callers.
    type Client: Send + Sync;

    /// Constructs a client bound to the workspace endpoint and credential.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the definition cannot be turned into
    /// a usable client.
    fn build(&self, definition: &WorkspaceDefinition) -> Result<Self::Client, ClientBuildError>;
}

/// Errors returned by client factories.
#[derive(Debug, Clone, Error)]
pub enum ClientBuildError {
    /// The workspace endpoint is not a valid base URL.
    #[error("workspace '{workspace}' has an invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Workspace name.
        workspace: WorkspaceName,
        /// Rejected endpoint.
        endpoint: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The credential cannot be sent as a header value.
    #[error("workspace '{0}' has a credential that is not a valid header value")]
    InvalidCredential(WorkspaceName),

    /// The underlying transport could not be initialised.
    #[error("client transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClientBuildError {
    /// Wraps a transport initialisation error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
