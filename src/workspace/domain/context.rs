//! Execution context handed to workspace-bound operations.

use super::{Credential, WorkspaceDefinition, WorkspaceName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Tenant identifier of the form `workspace-<name>`.
///
/// Downstream state keyed per tenant (caches, rate limits) uses this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Derives the tenant identifier for a workspace.
    #[must_use]
    pub fn for_workspace(name: &WorkspaceName) -> Self {
        Self(format!("workspace-{name}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved workspace bound to its pooled client.
#[derive(Debug)]
pub struct ExecutionContext<C> {
    workspace: WorkspaceName,
    endpoint: String,
    credential: Credential,
    tenant_id: TenantId,
    client: Arc<C>,
}

impl<C> ExecutionContext<C> {
    /// Derives a context from a definition and its client handle.
    #[must_use]
    pub fn new(definition: &WorkspaceDefinition, client: Arc<C>) -> Self {
        Self {
            workspace: definition.name().clone(),
            endpoint: definition.endpoint().to_owned(),
            credential: definition.credential().clone(),
            tenant_id: TenantId::for_workspace(definition.name()),
            client,
        }
    }

    /// Returns the workspace name.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceName {
        &self.workspace
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

    /// Returns the tenant identifier.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the shared client handle.
    #[must_use]
    pub const fn client(&self) -> &Arc<C> {
        &self.client
    }
}

impl<C> Clone for ExecutionContext<C> {
    fn clone(&self) -> Self {
        Self {
            workspace: self.workspace.clone(),
            endpoint: self.endpoint.clone(),
            credential: self.credential.clone(),
            tenant_id: self.tenant_id.clone(),
            client: Arc::clone(&self.client),
        }
    }
}
