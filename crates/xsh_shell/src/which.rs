//! Executable path resolution
//!
//! Locates a stage's program given either a bare command name or an explicit
//! path. Resolution is a pure function of its inputs and checks existence
//! only; execute permission is not verified beyond the attribute lookup.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve a command name to a full path.
///
/// A name containing a directory separator is treated as an explicit path
/// and resolves iff it names an existing file. A bare name is tried against
/// each search-path directory in order as `<dir>/<name>`, and - only when
/// the name carries no extension - as `<dir>/<name><EXE_SUFFIX>` on hosts
/// with an executable suffix. Returns `None` if no candidate exists.
pub fn resolve_command_path(name: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    if name.chars().any(std::path::is_separator) {
        let path = PathBuf::from(name);
        if file_exists(&path) {
            return Some(path);
        }
        return None;
    }

    let has_extension = name.contains('.');

    for dir in search_paths {
        let candidate = dir.join(name);
        if file_exists(&candidate) {
            return Some(candidate);
        }
        if !has_extension && !env::consts::EXE_SUFFIX.is_empty() {
            let candidate = dir.join(format!("{name}{}", env::consts::EXE_SUFFIX));
            if file_exists(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

/// Capture the search path list from the host `PATH` at startup.
///
/// Falls back to a single `"."` entry when `PATH` is unset.
pub fn system_search_paths() -> Vec<PathBuf> {
    match env::var_os("PATH") {
        Some(path) => env::split_paths(&path).collect(),
        None => vec![PathBuf::from(".")],
    }
}

fn file_exists(path: &Path) -> bool {
    path.is_file()
}

// ============================================================================
// Tests
// ============================================================================
