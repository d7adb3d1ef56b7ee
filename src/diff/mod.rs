//! Unified diff engine for checkstyle.
//!
//! This module turns unified diff text into hunks with exact line-number
//! bookkeeping for both sides, and answers whether a hunk overlaps a set of
//! line numbers. It is used twice per checked file:
//! - on the commit diff, to collect the new-side lines the commit added
//! - on the formatter diff, to find reformatting hunks touching those lines
//!
//! The parsing is strict:
//! - Hunk headers must match `@@ -a[,b] +c[,d] @@` (count defaults to 1)
//! - Declared hunk lengths must match the body, or parsing fails
//! - Lines before the first header (file names, index lines) are ignored

mod header;
mod hunk;
mod parser;
mod text;


// Re-export public API
pub use header::HunkHeader;
pub use hunk::{AppendOutcome, DiffHunk, DiffHunkSide, LineKind, RawLine, Side};
pub use parser::{parse_diff, parse_diff_text, touched_lines};
pub use text::unified_diff;

/// A 1-based line number within one side of one file version.
pub type LineNumber = usize;
