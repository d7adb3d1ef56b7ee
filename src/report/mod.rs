//! Report rendering for checkstyle.
//!
//! Two formats are supported:
//! - `text`: per-commit sections with the offending hunks, coloured when
//!   the palette allows it
//! - `json`: the same data as a single JSON document

mod json;
mod palette;
mod text;


use clap::ValueEnum;

pub use json::write_json;
pub use palette::{ColorChoice, Colour, Palette};
pub use text::{write_commit, write_summary};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections per commit.
    #[default]
    Text,
    /// One JSON document for the whole run.
    Json,
}
