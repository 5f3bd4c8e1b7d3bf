//! Environment sources backed by the process or by fixed values.

use crate::workspace::{domain::EnvSnapshot, ports::EnvironmentSource};

/// Reads the live process environment.
///
/// Variables whose key or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a process environment source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn snapshot(&self) -> EnvSnapshot {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// Environment source returning a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    snapshot: EnvSnapshot,
}

impl StaticEnvironment {
    /// Creates a source from an existing snapshot.
    #[must_use]
    pub const fn new(snapshot: EnvSnapshot) -> Self {
        Self { snapshot }
    }

    /// Creates a source from key/value pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(pairs.into_iter().collect())
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn snapshot(&self) -> EnvSnapshot {
        self.snapshot.clone()
    }
}
