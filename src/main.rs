//! Checkstyle: report formatter changes to the lines a commit added.
//!
//! This is the main entry point for the `checkstyle` CLI. It parses
//! arguments, sets up logging on stderr, runs the check and maps errors to
//! exit codes.

mod cli;
mod commands;
pub mod check;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod formatter;
pub mod git;
pub mod report;
pub mod tools;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level());

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

/// Log to stderr so reports on stdout stay clean. `RUST_LOG` wins over `-v`.
fn init_tracing(level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
