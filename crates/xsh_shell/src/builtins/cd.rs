//! Cd command implementation
//!
//! Changes the shell process's working directory.

use tracing::debug;

use super::{BuiltinCommand, BuiltinContext};

/// The `cd` command - changes the current working directory.
///
/// Failure to change directory is reported and leaves the working directory
/// unchanged; the shell session continues.
pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn execute(&self, context: BuiltinContext<'_>) -> i32 {
        match context.args.get(1) {
            Some(dir) => {
                if let Err(err) = std::env::set_current_dir(dir) {
                    debug!(%err, dir, "cd failed");
                    let _ = writeln!(context.stderr, "cd: cannot change directory to {dir}");
                }
            }
            None => {
                let _ = writeln!(context.stderr, "cd: missing argument");
            }
        }
        0
    }
}
