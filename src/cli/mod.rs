//! CLI argument parsing for checkstyle.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::report::{ColorChoice, OutputFormat};

/// Checkstyle: report formatter changes to the lines a commit added.
///
/// Each commit in the range is checked on its own:
/// - Files without a source extension are ignored
/// - Each remaining file is run through astyle as of that commit
/// - Only reformatting hunks that touch lines the commit added are reported
#[derive(Parser, Debug)]
#[command(name = "checkstyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Revision or revision range to check (e.g. `HEAD`, `main..topic`).
    #[arg(default_value = "HEAD")]
    pub revision_range: String,

    /// When to colour the report.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (defaults to `.checkstyle.yaml` at the repository root).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log more on stderr (`-v` for info, `-vv` for debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log level for the verbosity flags.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
