//! Built-in shell commands
//!
//! This module provides:
//! - `BuiltinCommand` trait for implementing commands
//! - `BuiltinContext` for command execution context
//! - Built-in commands: cd, pwd, set, unset, echo
//! - `find_builtin()` for case-insensitive dispatch
//!
//! Builtins run in-process instead of spawning an OS program, and only when
//! the pipeline consists of exactly one stage; a builtin name elsewhere in a
//! pipeline goes through path resolution like any external program. Usage
//! errors are reported to standard error but never fail the pipeline, so
//! every builtin returns exit code 0.

mod cd;
mod echo;
mod pwd;
mod set;
mod unset;

use std::io::Write;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use pwd::PwdCommand;
pub use set::SetCommand;
pub use unset::UnsetCommand;

use crate::environment::EnvironmentStore;

/// Context provided to a builtin during execution.
pub struct BuiltinContext<'a> {
    /// Argument words, including the builtin name as `args[0]`.
    pub args: &'a [String],
    /// The session's environment store, mutated by `set`/`unset`.
    pub env: &'a mut EnvironmentStore,
    /// The shell's standard output.
    pub stdout: &'a mut dyn Write,
    /// The shell's standard error.
    pub stderr: &'a mut dyn Write,
}

/// Trait for implementing in-process commands.
pub trait BuiltinCommand {
    /// Execute the command, returning its exit code.
    fn execute(&self, context: BuiltinContext<'_>) -> i32;
}

/// Look up a builtin by name, case-insensitively.
pub fn find_builtin(name: &str) -> Option<&'static dyn BuiltinCommand> {
    if name.eq_ignore_ascii_case("cd") {
        Some(&CdCommand)
    } else if name.eq_ignore_ascii_case("pwd") {
        Some(&PwdCommand)
    } else if name.eq_ignore_ascii_case("set") {
        Some(&SetCommand)
    } else if name.eq_ignore_ascii_case("unset") {
        Some(&UnsetCommand)
    } else if name.eq_ignore_ascii_case("echo") {
        Some(&EchoCommand)
    } else {
        None
    }
}
