//! Config struct definition and default implementation.

use serde::Deserialize;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".checkstyle.yaml";

/// Configuration for a checkstyle run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions to check (no leading dots).
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Lines of unchanged context around each reported formatter hunk.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            context_lines: default_context_lines(),
        }
    }
}

pub(crate) fn default_source_extensions() -> Vec<String> {
    ["c", "cpp", "h"].into_iter().map(String::from).collect()
}

pub(crate) fn default_context_lines() -> usize {
    3
}
