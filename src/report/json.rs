//! Machine-readable report.

use crate::check::{CommitReport, FileReport, RunReport};
use crate::diff::{DiffHunk, LineKind, Side};
use crate::error::{CheckstyleError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonRun<'a> {
    issues: usize,
    commits: Vec<JsonCommit<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCommit<'a> {
    commit: &'a str,
    title: &'a str,
    skipped: bool,
    issues: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    hunks: Vec<JsonHunk<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonHunk<'a> {
    old_start: usize,
    old_length: usize,
    new_start: usize,
    new_length: usize,
    lines: Vec<JsonLine<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    kind: LineKind,
    text: &'a str,
}

impl<'a> From<&'a DiffHunk> for JsonHunk<'a> {
    fn from(hunk: &'a DiffHunk) -> Self {
        let old = hunk.side(Side::Old);
        let new = hunk.side(Side::New);
        Self {
            old_start: old.start(),
            old_length: old.len(),
            new_start: new.start(),
            new_length: new.len(),
            lines: hunk
                .lines()
                .iter()
                .map(|line| JsonLine {
                    kind: line.kind,
                    text: &line.text,
                })
                .collect(),
        }
    }
}

impl<'a> From<&'a FileReport> for JsonFile<'a> {
    fn from(file: &'a FileReport) -> Self {
        Self {
            path: &file.path,
            hunks: file.hunks.iter().map(JsonHunk::from).collect(),
        }
    }
}

impl<'a> From<&'a CommitReport> for JsonCommit<'a> {
    fn from(report: &'a CommitReport) -> Self {
        Self {
            commit: &report.commit,
            title: &report.title,
            skipped: report.skipped,
            issues: report.issue_count(),
            files: report.files.iter().map(JsonFile::from).collect(),
        }
    }
}

/// Write the whole run as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, run: &RunReport) -> Result<()> {
    let view = JsonRun {
        issues: run.issue_count(),
        commits: run.commits.iter().map(JsonCommit::from).collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &view)
        .map_err(|e| CheckstyleError::Io(e.into()))?;
    writeln!(out)?;
    Ok(())
}
