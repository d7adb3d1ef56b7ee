//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{CheckstyleError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckstyleError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckstyleError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Load `.checkstyle.yaml` from the repository root, or defaults if it is absent.
    pub fn load_from_repo<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            CheckstyleError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `source_extensions` must not be empty
    /// - `source_extensions` entries must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        if self.source_extensions.is_empty() {
            return Err(CheckstyleError::UserError(
                "config validation failed: source_extensions must list at least one extension"
                    .to_string(),
            ));
        }

        for ext in &self.source_extensions {
            if ext.is_empty() {
                return Err(CheckstyleError::UserError(
                    "config validation failed: source_extensions entries must be non-empty"
                        .to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(CheckstyleError::UserError(format!(
                    "config validation failed: source_extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }
}
