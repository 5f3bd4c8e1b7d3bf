//! Shared fixtures for workspace unit tests.

use crate::workspace::{
    adapters::StaticEnvironment,
    domain::{
        Credential, DiscoveryConfig, EnvSnapshot, SourceKeys, WorkspaceDefinition, WorkspaceName,
    },
    ports::{ClientBuildError, ClientFactory},
    services::{ClientPool, RegistryCell, WorkspaceResolver},
};
use mockable::DefaultClock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Client handle recording what it was built from.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeClient {
    pub workspace: String,
    pub endpoint: String,
}

/// Factory counting how many handles it has built.
#[derive(Debug, Default)]
pub struct CountingFactory {
    built: AtomicUsize,
}

impl CountingFactory {
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl ClientFactory for CountingFactory {
    type Client = FakeClient;

    fn build(&self, definition: &WorkspaceDefinition) -> Result<FakeClient, ClientBuildError> {
        self.built.fetch_add(1, Ordering::SeqCst);
        Ok(FakeClient {
            workspace: definition.name().as_str().to_owned(),
            endpoint: definition.endpoint().to_owned(),
        })
    }
}

pub type TestResolver = WorkspaceResolver<StaticEnvironment, CountingFactory, DefaultClock>;

pub fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

pub fn resolver_for(pairs: &[(&str, &str)]) -> (TestResolver, Arc<CountingFactory>) {
    let factory = Arc::new(CountingFactory::default());
    let resolver = WorkspaceResolver::new(
        RegistryCell::new(
            Arc::new(StaticEnvironment::new(snapshot(pairs))),
            DiscoveryConfig::default(),
            Arc::new(DefaultClock),
        ),
        ClientPool::new(Arc::clone(&factory)),
    );
    (resolver, factory)
}

pub fn definition(name: &str, endpoint: &str) -> WorkspaceDefinition {
    WorkspaceDefinition::new(
        WorkspaceName::new(name).expect("valid name"),
        endpoint,
        Credential::new("tok"),
        SourceKeys::new(
            format!("N8N_URL_{}", name.to_uppercase()),
            format!("N8N_TOKEN_{}", name.to_uppercase()),
        ),
    )
    .expect("valid definition")
}
