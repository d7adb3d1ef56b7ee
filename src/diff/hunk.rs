//! Hunk model: per-side line bookkeeping and body line classification.

use crate::error::{CheckstyleError, Result};
use serde::Serialize;
use std::collections::BTreeSet;

use super::LineNumber;
use super::header::HunkHeader;

/// Which file version of a diff a side describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The `-` side (file before the change).
    Old,
    /// The `+` side (file after the change).
    New,
}

/// Classification of a hunk body line by its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Leading space: present on both sides.
    Context,
    /// Leading `-`: present only on the old side.
    Removed,
    /// Leading `+`: present only on the new side.
    Added,
    /// Leading `\`: the `No newline at end of file` annotation. Kept for
    /// rendering only; it belongs to neither side.
    #[serde(rename = "no_newline")]
    NoNewline,
}

impl LineKind {
    /// Classify a body line, or `None` if its marker is not a body marker.
    pub fn classify(line: &str) -> Option<Self> {
        match line.as_bytes().first() {
            Some(b' ') => Some(Self::Context),
            Some(b'-') => Some(Self::Removed),
            Some(b'+') => Some(Self::Added),
            Some(b'\\') => Some(Self::NoNewline),
            _ => None,
        }
    }

    /// The diff marker character for this kind.
    pub fn marker(self) -> char {
        match self {
            Self::Context => ' ',
            Self::Removed => '-',
            Self::Added => '+',
            Self::NoNewline => '\\',
        }
    }
}

/// A body line as it appeared in the diff, kept for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub kind: LineKind,
    /// Line text without the leading marker.
    pub text: String,
}

/// What [`DiffHunk::append`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The line was classified and recorded.
    Appended,
    /// `\ No newline at end of file`: kept as a raw line, no side advanced,
    /// the hunk stays open.
    NoNewlineMarker,
    /// The line is not a body line; the hunk is complete and the line was not recorded.
    EndOfHunk,
}

/// Line numbers covered by one side of a hunk.
///
/// `touched` and `untouched` together always form the contiguous run
/// `start..start + len()`; entries are only ever appended in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunkSide {
    start: LineNumber,
    touched: Vec<LineNumber>,
    untouched: Vec<LineNumber>,
}

impl DiffHunkSide {
    pub fn new(start: LineNumber) -> Self {
        Self {
            start,
            touched: Vec::new(),
            untouched: Vec::new(),
        }
    }

    pub fn start(&self) -> LineNumber {
        self.start
    }

    /// Lines removed (old side) or added (new side), ascending.
    pub fn touched(&self) -> &[LineNumber] {
        &self.touched
    }

    /// Context lines, ascending.
    pub fn untouched(&self) -> &[LineNumber] {
        &self.untouched
    }

    pub fn len(&self) -> usize {
        self.touched.len() + self.untouched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The line number the next appended entry must carry.
    fn next_line(&self) -> LineNumber {
        self.start.saturating_add(self.len())
    }

    fn append_touched(&mut self, line: LineNumber) {
        debug_assert_eq!(line, self.next_line(), "touched line out of sequence");
        self.touched.push(line);
    }

    fn append_untouched(&mut self, line: LineNumber) {
        debug_assert_eq!(line, self.next_line(), "untouched line out of sequence");
        self.untouched.push(line);
    }
}

/// One `@@` block of a unified diff.
#[derive(Debug, Clone)]
pub struct DiffHunk {
    header: HunkHeader,
    old: DiffHunkSide,
    new: DiffHunkSide,
    old_line: LineNumber,
    new_line: LineNumber,
    lines: Vec<RawLine>,
}

impl DiffHunk {
    /// Start a hunk from its header line.
    ///
    /// # Returns
    ///
    /// * `Ok(DiffHunk)` - An empty hunk anchored at the declared starts
    /// * `Err(CheckstyleError::MalformedHunkHeader)` - The header does not parse
    pub fn from_header(line: &str) -> Result<Self> {
        let header = HunkHeader::parse(line)?;
        Ok(Self {
            header,
            old: DiffHunkSide::new(header.old_start),
            new: DiffHunkSide::new(header.new_start),
            old_line: header.old_start,
            new_line: header.new_start,
            lines: Vec::new(),
        })
    }

    /// Classify one body line and advance the side counters.
    ///
    /// - ` ` context: both sides record the line as untouched
    /// - `-` removed: the old side records it as touched
    /// - `+` added: the new side records it as touched
    /// - `\` no-newline annotation: recorded for rendering, no side advances
    /// - anything else (including an empty line): end of this hunk
    ///
    /// Counters saturate instead of overflowing. The header guarantees the
    /// declared range fits, so saturation only happens on a body longer than
    /// declared, which [`verify_lengths`](Self::verify_lengths) rejects.
    pub fn append(&mut self, line: &str) -> AppendOutcome {
        let Some(kind) = LineKind::classify(line) else {
            return AppendOutcome::EndOfHunk;
        };

        self.lines.push(RawLine {
            kind,
            text: line[1..].to_string(),
        });

        match kind {
            LineKind::Context => {
                self.old.append_untouched(self.old_line);
                self.old_line = self.old_line.saturating_add(1);
                self.new.append_untouched(self.new_line);
                self.new_line = self.new_line.saturating_add(1);
            }
            LineKind::Removed => {
                self.old.append_touched(self.old_line);
                self.old_line = self.old_line.saturating_add(1);
            }
            LineKind::Added => {
                self.new.append_touched(self.new_line);
                self.new_line = self.new_line.saturating_add(1);
            }
            LineKind::NoNewline => return AppendOutcome::NoNewlineMarker,
        }

        AppendOutcome::Appended
    }

    /// Whether any old-side touched line is in `targets`.
    ///
    /// Comparing the old side is what makes a formatter diff comparable with
    /// a commit's added lines: the formatter diff's old text is the commit's
    /// new text.
    pub fn intersects(&self, targets: &BTreeSet<LineNumber>) -> bool {
        self.old.touched.iter().any(|line| targets.contains(line))
    }

    pub fn side(&self, side: Side) -> &DiffHunkSide {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }

    /// Coordinates as declared by the header line.
    #[cfg(test)]
    pub(crate) fn declared(&self) -> HunkHeader {
        self.header
    }

    /// Body lines in diff order.
    pub fn lines(&self) -> &[RawLine] {
        &self.lines
    }

    /// Header reconstructed from what the body actually covers.
    pub fn header_line(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old.start,
            self.old.len(),
            self.new.start,
            self.new.len()
        )
    }

    /// Check that the body covered exactly the declared lengths.
    pub(super) fn verify_lengths(&self) -> Result<()> {
        if self.old.len() == self.header.old_count && self.new.len() == self.header.new_count {
            return Ok(());
        }

        Err(CheckstyleError::HunkLengthMismatch {
            header: self.header.to_string(),
            declared_old: self.header.old_count,
            declared_new: self.header.new_count,
            actual_old: self.old.len(),
            actual_new: self.new.len(),
        })
    }
}
