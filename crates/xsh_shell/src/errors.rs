//! Error taxonomy for pipeline execution
//!
//! Every variant aborts the pipeline being processed and is reported to
//! standard error; none is fatal to the shell session. The `Display`
//! rendering of each variant is the exact message presented to the user.

use std::io;

use thiserror::Error;

/// A failure scoped to one submitted pipeline.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Program not found on any search path. An empty stage surfaces here
    /// with an empty program name.
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    /// Input redirection target could not be opened for reading.
    #[error("Failed to open input file: {path}")]
    InputFileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Output redirection target could not be created for writing.
    #[error("Failed to open output file: {path}")]
    OutputFileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// OS process creation failed for a resolved program.
    #[error("Failed to run command: {command_line}")]
    Launch {
        command_line: String,
        #[source]
        source: io::Error,
    },

    /// An inter-stage pipe could not be allocated.
    #[error("Failed to create pipe")]
    PipeCreation(#[source] io::Error),

    /// More stages than the executor supports.
    #[error("Pipeline has too many stages ({count})")]
    TooManyStages { count: usize },
}
