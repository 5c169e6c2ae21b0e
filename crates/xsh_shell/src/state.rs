//! Shell session state
//!
//! Owns the environment variable store and the search path list for one
//! shell session. Passed by reference to the components that need lookup or
//! mutation; the session's control flow is single-threaded, so no locking is
//! involved.

use std::path::PathBuf;

use crate::environment::EnvironmentStore;
use crate::which;

/// State shared across all pipelines of one shell session.
#[derive(Debug, Default)]
pub struct ShellState {
    env: EnvironmentStore,
    /// Captured once at startup, immutable for the session's lifetime.
    search_paths: Vec<PathBuf>,
}

impl ShellState {
    /// Create a session with an explicit search path list and an empty
    /// environment store.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            env: EnvironmentStore::new(),
            search_paths,
        }
    }

    /// Create a session whose search paths come from the host `PATH`.
    pub fn from_system() -> Self {
        Self::new(which::system_search_paths())
    }

    /// The session's environment store.
    pub fn env(&self) -> &EnvironmentStore {
        &self.env
    }

    /// Mutable access for the `set`/`unset` builtins.
    pub fn env_mut(&mut self) -> &mut EnvironmentStore {
        &mut self.env
    }

    /// The session's executable search path list.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}
