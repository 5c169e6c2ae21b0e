//! Shell environment variable store
//!
//! Name/value registry consulted by variable expansion and mutated by the
//! `set`/`unset` builtins. Names compare case-insensitively and are unique;
//! setting an existing name replaces its value.

use std::collections::HashMap;

/// Session-wide registry of `NAME=value` pairs.
///
/// Owned by the shell session and passed by reference to the components that
/// need lookup or mutation. Absence of a name is a normal result, not a
/// fault.
#[derive(Debug, Default)]
pub struct EnvironmentStore {
    // Keyed by the ASCII-uppercased name so lookups are case-insensitive.
    entries: HashMap<String, String>,
}

impl EnvironmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any existing entry whose name matches
    /// case-insensitively.
    pub fn set(&mut self, name: &str, value: &str) {
        self.entries
            .insert(name.to_ascii_uppercase(), value.to_string());
    }

    /// Remove a variable. No-op if the name is not present.
    pub fn unset(&mut self, name: &str) {
        self.entries.remove(&name.to_ascii_uppercase());
    }

    /// Look up a variable's value, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_then_get() {
        let mut env = EnvironmentStore::new();
        env.set("FOO", "bar");
        assert_eq!(env.get("FOO"), Some("bar"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut env = EnvironmentStore::new();
        env.set("Path", "/usr/bin");
        assert_eq!(env.get("PATH"), Some("/usr/bin"));
        assert_eq!(env.get("path"), Some("/usr/bin"));
    }

    #[test]
    fn set_replaces_existing_entry() {
        let mut env = EnvironmentStore::new();
        env.set("FOO", "one");
        env.set("foo", "two");
        assert_eq!(env.get("FOO"), Some("two"));
    }

    #[test]
    fn unset_removes_entry() {
        let mut env = EnvironmentStore::new();
        env.set("FOO", "bar");
        env.unset("foo");
        assert_eq!(env.get("FOO"), None);
    }

    #[test]
    fn unset_missing_is_noop() {
        let mut env = EnvironmentStore::new();
        env.unset("NEVER_SET");
        assert_eq!(env.get("NEVER_SET"), None);
    }
}
