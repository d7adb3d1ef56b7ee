//! Configuration model for checkstyle.
//!
//! This module defines the Config struct that represents the optional
//! `.checkstyle.yaml` at the repository root. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values.
//!
//! The formatter and its style options are fixed and cannot be configured.

mod model;
mod operations;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
