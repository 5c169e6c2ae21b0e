//! Execution core for the xsh command shell
//!
//! Takes one already-read input line and runs it:
//! - `tokenizer` - splits the line into whitespace-delimited words
//! - `pipeline` - partitions words into pipeline stages on `|`
//! - `redirect` - extracts `< file`, `> file` and `&` from the final stage
//! - `expand` - substitutes `$NAME` references from the environment store
//! - `which` - locates each stage's executable on the search path
//! - `builtins` - in-process commands: cd, pwd, set, unset, echo
//! - `execute` - launches, wires, and supervises the process chain
//!
//! Session-wide state (environment variables and the search path list) lives
//! in [`ShellState`]; the single entry point is [`execute_line`].

pub mod builtins;
pub mod environment;
pub mod errors;
pub mod execute;
pub mod expand;
pub mod pipeline;
pub mod redirect;
pub mod state;
pub mod tokenizer;
pub mod which;

pub use environment::EnvironmentStore;
pub use errors::ShellError;
pub use execute::execute_line;
pub use redirect::ExecutionOptions;
pub use state::ShellState;
