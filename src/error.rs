//! Error types for the checkstyle CLI.
//!
//! Uses thiserror for derive macros. Every variant aborts the current run;
//! `main` prints the message and exits with [`exit_codes::FAILURE`].
//!
//! [`exit_codes::FAILURE`]: crate::exit_codes::FAILURE

use thiserror::Error;

/// Main error type for checkstyle operations.
#[derive(Error, Debug)]
pub enum CheckstyleError {
    /// A line starting with `@@` does not match the hunk header grammar.
    #[error("Malformed diff hunk header '{0}'")]
    MalformedHunkHeader(String),

    /// A hunk body does not contain the number of lines its header declares.
    #[error(
        "diff hunk '{header}' declares {declared_old} old and {declared_new} new lines, \
         but its body has {actual_old} old and {actual_new} new lines"
    )]
    HunkLengthMismatch {
        header: String,
        declared_old: usize,
        declared_new: usize,
        actual_old: usize,
        actual_new: usize,
    },

    /// A required executable is not on PATH.
    #[error("Executable {0} not found")]
    ToolNotFound(String),

    /// The formatter could not be run or exited with an error.
    #[error("Formatter failed: {0}")]
    ExternalToolFailure(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for checkstyle operations.
pub type Result<T> = std::result::Result<T, CheckstyleError>;
