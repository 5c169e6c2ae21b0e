//! Set command implementation
//!
//! Stores a variable in the session's environment store.

use super::{BuiltinCommand, BuiltinContext};

/// The `set` command - `set NAME VALUE` stores a variable.
///
/// Arguments past the first two are ignored.
pub struct SetCommand;

impl BuiltinCommand for SetCommand {
    fn execute(&self, context: BuiltinContext<'_>) -> i32 {
        match (context.args.get(1), context.args.get(2)) {
            (Some(name), Some(value)) => {
                context.env.set(name, value);
            }
            _ => {
                let _ = writeln!(context.stderr, "set: usage: set NAME VALUE");
            }
        }
        0
    }
}
