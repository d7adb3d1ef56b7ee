//! Style checking of the lines a commit adds.
//!
//! For each source file touched by a commit:
//! 1. Parse the commit's diff for that file and collect the new-side lines it added
//! 2. Skip the file if the commit added nothing to it
//! 3. Run the file as of the commit through the formatter and diff the two texts
//! 4. Keep only formatter hunks whose removed lines are among the added lines
//!
//! Version control and the formatter are reached through the [`RevisionSource`]
//! and [`Formatter`] traits so the checker itself only deals with text.

mod filter;
mod types;


use tracing::debug;

use crate::diff::{Side, parse_diff_text, touched_lines, unified_diff};
use crate::error::Result;

pub use filter::SourceFilter;
pub use types::{CommitReport, CommitSummary, FileReport, RunReport};

/// Access to file contents and per-file diffs at a given commit.
pub trait RevisionSource {
    /// Unified diff of `path` between the commit's parent and the commit.
    fn commit_diff(&self, commit: &str, path: &str) -> Result<String>;

    /// Contents of `path` as of the commit.
    fn file_contents(&self, commit: &str, path: &str) -> Result<String>;
}

/// Reformats source text into the canonical style.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String>;
}

/// Checks commits against a formatter.
pub struct StyleChecker<'a, R: ?Sized, F: ?Sized> {
    source: &'a R,
    formatter: &'a F,
    context_lines: usize,
}

impl<'a, R, F> StyleChecker<'a, R, F>
where
    R: RevisionSource + ?Sized,
    F: Formatter + ?Sized,
{
    pub fn new(source: &'a R, formatter: &'a F, context_lines: usize) -> Self {
        Self {
            source,
            formatter,
            context_lines,
        }
    }

    /// Check one file of one commit.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(FileReport))` - Formatter hunks that touch lines the commit added
    /// * `Ok(None)` - The commit added no lines, or none of them needs reformatting
    /// * `Err(_)` - A collaborator failed or a diff was malformed
    pub fn check_file(&self, commit: &str, path: &str) -> Result<Option<FileReport>> {
        let commit_diff = self.source.commit_diff(commit, path)?;
        let added = touched_lines(&parse_diff_text(&commit_diff)?, Side::New);

        if added.is_empty() {
            debug!(commit, path, "commit adds no lines, skipping file");
            return Ok(None);
        }

        let contents = self.source.file_contents(commit, path)?;
        let formatted = self.formatter.format(&contents)?;
        let formatting = parse_diff_text(&unified_diff(&contents, &formatted, self.context_lines))?;
        let total = formatting.len();

        let hunks: Vec<_> = formatting
            .into_iter()
            .filter(|hunk| hunk.intersects(&added))
            .collect();

        debug!(
            commit,
            path,
            added = added.len(),
            formatter_hunks = total,
            reported = hunks.len(),
            "checked file"
        );

        if hunks.is_empty() {
            return Ok(None);
        }

        Ok(Some(FileReport {
            path: path.to_string(),
            hunks,
        }))
    }

    /// Check every source file touched by a commit.
    ///
    /// Files rejected by `filter` are not looked at. If none remain the
    /// report is marked as skipped.
    pub fn check_commit(
        &self,
        summary: &CommitSummary,
        filter: &SourceFilter,
    ) -> Result<CommitReport> {
        let sources: Vec<&String> = summary
            .files
            .iter()
            .filter(|path| filter.matches(path))
            .collect();

        let mut report = CommitReport {
            commit: summary.commit.clone(),
            title: summary.title.clone(),
            skipped: sources.is_empty(),
            files: Vec::new(),
        };

        if report.skipped {
            debug!(commit = %summary.commit, "commit touches no source files");
            return Ok(report);
        }

        for path in sources {
            if let Some(file) = self.check_file(&summary.commit, path)? {
                report.files.push(file);
            }
        }

        Ok(report)
    }
}
