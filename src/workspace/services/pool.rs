//! Lazy per-workspace client cache.

use crate::workspace::{
    domain::{WorkspaceDefinition, WorkspaceName},
    ports::{ClientBuildError, ClientFactory},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Caches one client handle per workspace name.
///
/// A handle is built on the first lookup of its workspace and returned
/// unchanged afterwards, even if the definition's endpoint or credential
/// differ; call [`ClientPool::reset`] to rebuild. Construction happens under
/// the pool lock, so racing first lookups of one name build a single handle.
pub struct ClientPool<F>
where
    F: ClientFactory,
{
    factory: Arc<F>,
    clients: Mutex<HashMap<WorkspaceName, Arc<F::Client>>>,
}

impl<F> ClientPool<F>
where
    F: ClientFactory,
{
    /// Creates an empty pool.
    #[must_use]
    pub fn new(factory: Arc<F>) -> Self {
        Self {
            factory,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached handle for the workspace, building it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the factory rejects the definition.
    /// Nothing is cached in that case.
    pub fn get_or_create(
        &self,
        definition: &WorkspaceDefinition,
    ) -> Result<Arc<F::Client>, ClientBuildError> {
        let mut clients = self.lock();
        if let Some(existing) = clients.get(definition.name()) {
            return Ok(Arc::clone(existing));
        }

        let client = Arc::new(self.factory.build(definition)?);
        debug!(workspace = %definition.name(), "constructed workspace client");
        clients.insert(definition.name().clone(), Arc::clone(&client));
        Ok(client)
    }

    /// Returns the cached handle without building one.
    #[must_use]
    pub fn get(&self, name: &WorkspaceName) -> Option<Arc<F::Client>> {
        self.lock().get(name).map(Arc::clone)
    }

    /// Returns `true` when a handle exists for the workspace.
    #[must_use]
    pub fn contains(&self, name: &WorkspaceName) -> bool {
        self.lock().contains_key(name)
    }

    /// Returns the number of cached handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no handle has been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every cached handle.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<WorkspaceName, Arc<F::Client>>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
