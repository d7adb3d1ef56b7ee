//! Exit code constants for the checkstyle CLI.
//!
//! - 0: The range was checked (style issues are reported, not failures)
//! - 1: Any error (missing tool, git failure, malformed diff, bad config)

/// Successful execution.
pub const SUCCESS: u8 = 0;

/// The run was aborted by an error.
pub const FAILURE: u8 = 1;
