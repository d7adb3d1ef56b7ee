//! Command implementations for checkstyle.
//!
//! The CLI has a single action, checking a revision range, implemented in
//! the `check` module.

mod check;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    check::cmd_check(cli)
}
