//! Result types produced by a style check run.

use crate::diff::DiffHunk;

/// Title line and touched files of one commit, as listed by git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Commit id.
    pub commit: String,
    /// `<sha> <subject>` line.
    pub title: String,
    /// Repository-relative paths touched by the commit.
    pub files: Vec<String>,
}

/// Formatter hunks that touch lines added to one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Repository-relative file path.
    pub path: String,
    /// Surviving hunks, in diff order. Never empty.
    pub hunks: Vec<DiffHunk>,
}

/// Outcome of checking one commit.
#[derive(Debug, Clone)]
pub struct CommitReport {
    pub commit: String,
    pub title: String,
    /// True when no touched file has a checked extension.
    pub skipped: bool,
    /// Files with at least one reported hunk.
    pub files: Vec<FileReport>,
}

impl CommitReport {
    /// Number of reported hunks across all files.
    pub fn issue_count(&self) -> usize {
        self.files.iter().map(|f| f.hunks.len()).sum()
    }
}

/// Outcome of checking a revision range.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Commit reports, oldest first.
    pub commits: Vec<CommitReport>,
}

impl RunReport {
    pub fn issue_count(&self) -> usize {
        self.commits.iter().map(CommitReport::issue_count).sum()
    }
}
