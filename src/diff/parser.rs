//! Core diff parsing logic.

use crate::error::Result;
use std::collections::BTreeSet;

use super::LineNumber;
use super::hunk::{AppendOutcome, DiffHunk, Side};

/// Split unified diff lines into hunks, in input order.
///
/// Lines before the first `@@` header are preamble and ignored. After a hunk
/// sees a line that is not part of its body, following lines are ignored
/// until the next header (this skips `diff --git`/`---`/`+++` lines between
/// files of a multi-file diff).
///
/// # Returns
///
/// * `Ok(Vec<DiffHunk>)` - Every hunk, each with verified lengths
/// * `Err(CheckstyleError::MalformedHunkHeader)` - A `@@` line does not parse
/// * `Err(CheckstyleError::HunkLengthMismatch)` - A body disagrees with its header
pub fn parse_diff<'a, I>(lines: I) -> Result<Vec<DiffHunk>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hunks = Vec::new();
    let mut current: Option<DiffHunk> = None;
    let mut open = false;

    for line in lines {
        if line.starts_with("@@") {
            if let Some(hunk) = current.take() {
                hunk.verify_lengths()?;
                hunks.push(hunk);
            }
            current = Some(DiffHunk::from_header(line)?);
            open = true;
            continue;
        }

        if !open {
            continue;
        }

        if let Some(hunk) = current.as_mut()
            && hunk.append(line) == AppendOutcome::EndOfHunk
        {
            open = false;
        }
    }

    if let Some(hunk) = current {
        hunk.verify_lengths()?;
        hunks.push(hunk);
    }

    Ok(hunks)
}

/// Parse a whole diff held in memory.
pub fn parse_diff_text(text: &str) -> Result<Vec<DiffHunk>> {
    parse_diff(text.lines())
}

/// Union of the touched line numbers of one side across hunks.
///
/// With [`Side::New`] on a commit diff this is the set of lines the commit
/// added to the file.
pub fn touched_lines(hunks: &[DiffHunk], side: Side) -> BTreeSet<LineNumber> {
    hunks
        .iter()
        .flat_map(|hunk| hunk.side(side).touched().iter().copied())
        .collect()
}
