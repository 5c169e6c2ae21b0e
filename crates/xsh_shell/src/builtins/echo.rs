//! Echo command implementation
//!
//! Prints its arguments space-joined with a trailing newline.

use super::{BuiltinCommand, BuiltinContext};

/// The `echo` command - prints arguments to stdout.
pub struct EchoCommand;

impl BuiltinCommand for EchoCommand {
    fn execute(&self, context: BuiltinContext<'_>) -> i32 {
        let output = context.args[1..].join(" ");
        let _ = writeln!(context.stdout, "{output}");
        0
    }
}
