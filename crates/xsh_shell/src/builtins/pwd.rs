//! Pwd command implementation
//!
//! Prints the current working directory.

use super::{BuiltinCommand, BuiltinContext};

/// The `pwd` command - prints the current working directory.
pub struct PwdCommand;

impl BuiltinCommand for PwdCommand {
    fn execute(&self, context: BuiltinContext<'_>) -> i32 {
        match std::env::current_dir() {
            Ok(cwd) => {
                let _ = writeln!(context.stdout, "{}", cwd.display());
            }
            Err(_) => {
                let _ = writeln!(context.stderr, "pwd: error getting current directory");
            }
        }
        0
    }
}
