//! Process environment isolation for integration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Prefixes of every variable workspace discovery reads.
const WORKSPACE_KEY_PREFIXES: &[&str] = &["N8N_URL_", "N8N_TOKEN_"];
const WORKSPACE_KEYS: &[&str] = &["N8N_API_URL", "N8N_API_KEY", "N8N_DEFAULT_WORKSPACE"];

/// Guard that replaces all workspace variables for its lifetime.
///
/// Existing workspace variables are removed, the requested ones set, and the
/// original values restored on drop.
pub struct WorkspaceEnvGuard {
    previous: Vec<(String, String)>,
    applied: Vec<String>,
    _lock: MutexGuard<'static, ()>,
}

impl WorkspaceEnvGuard {
    /// Installs exactly `vars` as the workspace environment.
    pub fn install(vars: &[(&str, &str)]) -> Self {
        let lock = env_lock();
        let previous: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| is_workspace_key(key))
            .collect();

        for (key, _) in &previous {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                env::remove_var(key);
            }
        }
        for (key, value) in vars {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                env::set_var(key, value);
            }
        }

        Self {
            previous,
            applied: vars.iter().map(|(key, _)| (*key).to_owned()).collect(),
            _lock: lock,
        }
    }

    /// Sets one more variable while the guard is held.
    pub fn set(&mut self, key: &str, value: &str) {
        unsafe {
            // SAFETY: the guard holds the global environment mutex.
            env::set_var(key, value);
        }
        self.applied.push(key.to_owned());
    }
}

impl Drop for WorkspaceEnvGuard {
    fn drop(&mut self) {
        for key in self.applied.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                env::remove_var(&key);
            }
        }
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                env::set_var(&key, &value);
            }
        }
    }
}

fn is_workspace_key(key: &str) -> bool {
    WORKSPACE_KEYS.contains(&key)
        || WORKSPACE_KEY_PREFIXES
            .iter()
            .any(|prefix| key.starts_with(prefix))
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
