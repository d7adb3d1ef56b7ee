//! Line-level diff between two in-memory texts.

use similar::{Algorithm, TextDiff};

/// Produce a unified diff from `before` to `after`.
///
/// The output has `---`/`+++` file lines followed by hunks, and is empty
/// when the texts are identical.
pub fn unified_diff(before: &str, after: &str, context_lines: usize) -> String {
    if before == after {
        return String::new();
    }

    TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(before, after)
        .unified_diff()
        .context_radius(context_lines)
        .header("before", "after")
        .to_string()
}
