//! Environment scanning and lazy registry initialisation.
//!
//! [`discover`] is a pure function over an [`EnvSnapshot`]. [`RegistryCell`]
//! runs it at most once per lifetime of the cell, until [`RegistryCell::reset`]
//! is called.

use crate::workspace::{
    domain::{
        Credential, DiscoveryConfig, EnvSnapshot, IncompleteWorkspace, MissingKey, SourceKeys,
        WorkspaceDefinition, WorkspaceDomainError, WorkspaceName, WorkspaceRegistry,
    },
    ports::EnvironmentSource,
};
use indexmap::IndexMap;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Builds a workspace registry from an environment snapshot.
///
/// Every `<url_prefix><NAME>` key with a non-blank value declares a candidate
/// named `<name>`; it becomes a workspace only if `<credential_prefix><NAME>`
/// is also set. When no pair is found, the fallback keys produce a single
/// workspace named `"default"`. Candidates that normalise to the same name
/// overwrite each other in enumeration order.
#[must_use]
pub fn discover(
    env: &EnvSnapshot,
    config: &DiscoveryConfig,
    clock: &impl Clock,
) -> WorkspaceRegistry {
    let mut definitions: IndexMap<WorkspaceName, WorkspaceDefinition> = IndexMap::new();
    let mut incomplete = Vec::new();

    for (key, url) in env.iter() {
        let Some(suffix) = key.strip_prefix(config.url_prefix()) else {
            continue;
        };
        if url.trim().is_empty() {
            continue;
        }

        match paired_definition(env, config, key, suffix, url) {
            Ok(definition) => {
                debug!(workspace = %definition.name(), url_key = key, "discovered workspace");
                if let Some(previous) = definitions.insert(definition.name().clone(), definition) {
                    warn!(
                        workspace = %previous.name(),
                        replaced_key = previous.source_keys().url_key.as_str(),
                        url_key = key,
                        "workspace declared more than once; keeping the later declaration"
                    );
                }
            }
            Err(missing) => {
                warn!(url_key = key, ?missing, "ignoring workspace URL without a usable pair");
                incomplete.push(IncompleteWorkspace {
                    url_key: key.to_owned(),
                    missing,
                });
            }
        }
    }

    if definitions.is_empty()
        && let Some(definition) = fallback_definition(env, config)
    {
        debug!(
            url_key = config.fallback_url_key(),
            "using single-instance fallback workspace"
        );
        definitions.insert(definition.name().clone(), definition);
    }

    let requested_default = env.non_empty(config.default_selector_key());
    let registry = WorkspaceRegistry::new(definitions, requested_default, incomplete, clock);

    if let Some(requested) = requested_default {
        let honoured = registry
            .default_name()
            .is_some_and(|name| Some(name) == WorkspaceName::new(requested).ok().as_ref());
        if !honoured {
            warn!(
                requested,
                key = config.default_selector_key(),
                "default workspace does not name a discovered workspace; ignoring"
            );
        }
    }

    info!(
        workspaces = registry.len(),
        default = registry.default_name().map(WorkspaceName::as_str),
        incomplete = registry.incomplete().len(),
        "workspace discovery complete"
    );
    registry
}

fn paired_definition(
    env: &EnvSnapshot,
    config: &DiscoveryConfig,
    url_key: &str,
    suffix: &str,
    url: &str,
) -> Result<WorkspaceDefinition, MissingKey> {
    let name = WorkspaceName::new(suffix).map_err(|_| MissingKey::Name)?;
    let credential_key = config.credential_key_for(suffix);
    let missing_credential = || MissingKey::Credential {
        key: credential_key.clone(),
    };

    let credential = env
        .non_empty(&credential_key)
        .ok_or_else(missing_credential)?;

    WorkspaceDefinition::new(
        name,
        url,
        Credential::new(credential),
        SourceKeys::new(url_key, credential_key.as_str()),
    )
    .map_err(|err| match err {
        WorkspaceDomainError::EmptyWorkspaceName => MissingKey::Name,
        WorkspaceDomainError::EmptyEndpoint(_) | WorkspaceDomainError::EmptyCredential(_) => {
            missing_credential()
        }
    })
}

fn fallback_definition(env: &EnvSnapshot, config: &DiscoveryConfig) -> Option<WorkspaceDefinition> {
    let url = env.non_empty(config.fallback_url_key())?;
    let credential = env.non_empty(config.fallback_credential_key())?;
    WorkspaceDefinition::new(
        WorkspaceName::fallback(),
        url,
        Credential::new(credential),
        SourceKeys::new(config.fallback_url_key(), config.fallback_credential_key()),
    )
    .ok()
}

/// Lazily discovered, resettable workspace registry.
///
/// The first [`RegistryCell::get`] snapshots the environment and runs
/// [`discover`]; concurrent first callers wait on the write lock and share the
/// single result.
pub struct RegistryCell<E, K>
where
    E: EnvironmentSource,
    K: Clock + Send + Sync,
{
    source: Arc<E>,
    config: DiscoveryConfig,
    clock: Arc<K>,
    state: RwLock<Option<Arc<WorkspaceRegistry>>>,
}

impl<E, K> RegistryCell<E, K>
where
    E: EnvironmentSource,
    K: Clock + Send + Sync,
{
    /// Creates an uninitialised cell.
    #[must_use]
    pub const fn new(source: Arc<E>, config: DiscoveryConfig, clock: Arc<K>) -> Self {
        Self {
            source,
            config,
            clock,
            state: RwLock::new(None),
        }
    }

    /// Returns the registry, running discovery on first access.
    #[must_use]
    pub fn get(&self) -> Arc<WorkspaceRegistry> {
        let cached = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(registry) = cached {
            return registry;
        }

        let mut slot = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(registry) = slot.as_ref() {
            return Arc::clone(registry);
        }
        let registry = Arc::new(discover(
            &self.source.snapshot(),
            &self.config,
            &*self.clock,
        ));
        *slot = Some(Arc::clone(&registry));
        registry
    }

    /// Returns `true` once discovery has run since creation or the last reset.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drops the discovered registry so the next access rediscovers.
    pub fn reset(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns the key layout used for discovery.
    #[must_use]
    pub const fn config(&self) -> &DiscoveryConfig {
        &self.config
    }
}
