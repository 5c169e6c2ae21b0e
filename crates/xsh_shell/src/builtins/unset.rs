//! Unset command implementation
//!
//! Removes a variable from the session's environment store.

use super::{BuiltinCommand, BuiltinContext};

/// The `unset` command - `unset NAME` removes a variable.
pub struct UnsetCommand;

impl BuiltinCommand for UnsetCommand {
    fn execute(&self, context: BuiltinContext<'_>) -> i32 {
        match context.args.get(1) {
            Some(name) => {
                context.env.unset(name);
            }
            None => {
                let _ = writeln!(context.stderr, "unset: usage: unset NAME");
            }
        }
        0
    }
}
