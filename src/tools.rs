//! Required executable lookup.

use crate::error::{CheckstyleError, Result};
use std::path::PathBuf;

/// Executables that must be installed before any commit is checked.
pub const REQUIRED_TOOLS: &[&str] = &["astyle", "git"];

/// Find `binary` in the directories listed in `PATH`.
pub fn find_executable(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    find_executable_in(binary, &path_var)
}

fn find_executable_in(binary: &str, path_var: &std::ffi::OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Fail with the first tool from `tools` that is not installed.
pub fn require_executables(tools: &[&str]) -> Result<()> {
    for tool in tools {
        if find_executable(tool).is_none() {
            return Err(CheckstyleError::ToolNotFound(tool.to_string()));
        }
    }
    Ok(())
}
