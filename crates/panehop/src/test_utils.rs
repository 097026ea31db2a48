//! Shared test fixtures.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Sets an environment variable for the guard's lifetime and restores the
/// previous value on drop. Holds a process-wide lock for as long as it
/// lives, so tests touching the environment never interleave.
pub struct ScopedEnv {
    key: &'static str,
    previous: Option<String>,
    _serialized: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub fn set(key: &'static str, value: impl Into<String>) -> Self {
        let serialized = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = env::var(key).ok();
        env::set_var(key, value.into());
        Self {
            key,
            previous,
            _serialized: serialized,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}
