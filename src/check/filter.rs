//! Source file selection by extension.

use crate::config::Config;

/// Normalized extension list deciding which touched files get checked.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    /// Lowercase, no leading dots.
    extensions: Vec<String>,
}

impl SourceFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.source_extensions)
    }

    /// Check if a file's extension is one of the checked extensions.
    ///
    /// Only the final path component is considered, so directories with dots
    /// in their names do not count as extensions.
    pub fn matches(&self, path: &str) -> bool {
        let name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
            }
            _ => false,
        }
    }
}
