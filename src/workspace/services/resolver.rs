//! Workspace resolution facade.

use super::{ClientPool, RegistryCell};
use crate::workspace::{
    adapters::{HttpClientFactory, ProcessEnvironment},
    domain::{
        DiscoveryConfig, ExecutionContext, WorkspaceDefinition, WorkspaceName, WorkspaceRegistry,
        WorkspaceSelector, WorkspaceSummary,
    },
    ports::{ClientBuildError, ClientFactory, EnvironmentSource},
};
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// Reasons a workspace could not be resolved.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// No name was requested and no workspace is configured.
    #[error("no n8n workspace configured: {hint}")]
    NoWorkspaceConfigured {
        /// How to configure one.
        hint: String,
    },

    /// The requested or default name is not in the registry.
    #[error(
        "workspace '{requested}' not found; available workspaces: {}",
        list_names(.available)
    )]
    WorkspaceNotFound {
        /// Normalised requested name.
        requested: WorkspaceName,
        /// Names currently configured, in discovery order.
        available: Vec<WorkspaceName>,
    },

    /// The workspace exists but its client could not be built.
    #[error("client for workspace '{workspace}' could not be built: {source}")]
    ClientUnavailable {
        /// Workspace name.
        workspace: WorkspaceName,
        /// Factory error.
        #[source]
        source: ClientBuildError,
    },
}

fn list_names(names: &[WorkspaceName]) -> String {
    if names.is_empty() {
        return "none".to_owned();
    }
    names
        .iter()
        .map(WorkspaceName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves optional workspace names to execution contexts.
pub struct WorkspaceResolver<E, F, K>
where
    E: EnvironmentSource,
    F: ClientFactory,
    K: Clock + Send + Sync,
{
    registry: RegistryCell<E, K>,
    pool: ClientPool<F>,
    reset_guard: RwLock<()>,
}

/// Resolver over the process environment with HTTP clients.
pub type ProcessResolver = WorkspaceResolver<ProcessEnvironment, HttpClientFactory, DefaultClock>;

/// Builds a resolver reading the process environment.
#[must_use]
pub fn process_resolver(config: DiscoveryConfig, factory: HttpClientFactory) -> ProcessResolver {
    WorkspaceResolver::new(
        RegistryCell::new(Arc::new(ProcessEnvironment::new()), config, Arc::new(DefaultClock)),
        ClientPool::new(Arc::new(factory)),
    )
}

impl<E, F, K> WorkspaceResolver<E, F, K>
where
    E: EnvironmentSource,
    F: ClientFactory,
    K: Clock + Send + Sync,
{
    /// Creates a resolver over a registry cell and client pool.
    #[must_use]
    pub const fn new(registry: RegistryCell<E, K>, pool: ClientPool<F>) -> Self {
        Self {
            registry,
            pool,
            reset_guard: RwLock::new(()),
        }
    }

    /// Resolves a workspace and binds it to its pooled client.
    ///
    /// `None` or a blank name selects the default workspace. Names are
    /// matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoWorkspaceConfigured`] when there is nothing
    /// to default to, [`ResolveError::WorkspaceNotFound`] for unknown names
    /// and [`ResolveError::ClientUnavailable`] when the client cannot be built.
    pub fn resolve(
        &self,
        requested: Option<&str>,
    ) -> Result<ExecutionContext<F::Client>, ResolveError> {
        let _in_flight = self
            .reset_guard
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let registry = self.registry.get();
        let definition = self.select(&registry, requested)?;
        let client =
            self.pool
                .get_or_create(definition)
                .map_err(|source| ResolveError::ClientUnavailable {
                    workspace: definition.name().clone(),
                    source,
                })?;
        Ok(ExecutionContext::new(definition, client))
    }

    /// Resolves the effective workspace definition without building a client.
    ///
    /// # Errors
    ///
    /// Returns the same lookup errors as [`WorkspaceResolver::resolve`].
    pub fn definition(&self, requested: Option<&str>) -> Result<WorkspaceDefinition, ResolveError> {
        let registry = self.registry.get();
        self.select(&registry, requested).cloned()
    }

    /// Returns `true` when more than one workspace is configured.
    #[must_use]
    pub fn is_multi_tenant(&self) -> bool {
        self.registry.get().is_multi_tenant()
    }

    /// Returns configured workspace names in discovery order.
    #[must_use]
    pub fn available_names(&self) -> Vec<WorkspaceName> {
        self.registry.get().names()
    }

    /// Returns the default workspace name, if any.
    #[must_use]
    pub fn default_name(&self) -> Option<WorkspaceName> {
        self.registry.get().default_name().cloned()
    }

    /// Returns the selector fragment for request schemas.
    #[must_use]
    pub fn selector(&self) -> WorkspaceSelector {
        WorkspaceSelector::from_registry(&self.registry.get())
    }

    /// Returns credential-free summaries of configured workspaces.
    #[must_use]
    pub fn summaries(&self) -> Vec<WorkspaceSummary> {
        self.registry.get().summaries()
    }

    /// Returns the discovered registry.
    #[must_use]
    pub fn registry(&self) -> Arc<WorkspaceRegistry> {
        self.registry.get()
    }

    /// Returns the client pool.
    #[must_use]
    pub const fn pool(&self) -> &ClientPool<F> {
        &self.pool
    }

    /// Clears the registry and every pooled client.
    ///
    /// The next call rediscovers workspaces from a fresh environment snapshot.
    /// Waits for in-flight resolutions so none of them caches a client built
    /// from the discarded registry.
    pub fn reset(&self) {
        let _exclusive = self
            .reset_guard
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        self.registry.reset();
        self.pool.reset();
    }

    fn select<'r>(
        &self,
        registry: &'r WorkspaceRegistry,
        requested: Option<&str>,
    ) -> Result<&'r WorkspaceDefinition, ResolveError> {
        let name = match requested.and_then(|raw| WorkspaceName::new(raw).ok()) {
            Some(name) => name,
            None => registry.default_name().cloned().ok_or_else(|| {
                debug!("no workspace requested and none configured");
                ResolveError::NoWorkspaceConfigured {
                    hint: self.registry.config().setup_hint(),
                }
            })?,
        };

        registry.get(&name).ok_or_else(|| {
            debug!(workspace = %name, "requested workspace is not configured");
            ResolveError::WorkspaceNotFound {
                requested: name.clone(),
                available: registry.names(),
            }
        })
    }
}
