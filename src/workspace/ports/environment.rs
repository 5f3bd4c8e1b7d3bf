//! Environment port read once per discovery.

use crate::workspace::domain::EnvSnapshot;

/// Source of environment variables for workspace discovery.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentSource: Send + Sync {
    /// Captures the current environment.
    fn snapshot(&self) -> EnvSnapshot;
}
