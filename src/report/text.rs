//! Plain-text report, optionally coloured.

use crate::check::{CommitReport, FileReport, RunReport};
use crate::diff::{DiffHunk, LineKind};
use crate::error::Result;
use std::io::Write;

use super::palette::{Colour, Palette};

fn issues_word(count: usize) -> &'static str {
    if count == 1 { "issue" } else { "issues" }
}

/// Render a hunk: coloured header, then each body line coloured by kind.
///
/// The result ends with a colour reset on its own line, which leaves a blank
/// line between consecutive hunks.
pub fn render_hunk(hunk: &DiffHunk, palette: &Palette) -> String {
    let mut out = format!("{}{}\n", palette.paint(Colour::Cyan), hunk.header_line());

    for line in hunk.lines() {
        let colour = match line.kind {
            LineKind::Removed => Colour::Red,
            LineKind::Added => Colour::Green,
            LineKind::Context | LineKind::NoNewline => Colour::Default,
        };
        out.push_str(palette.paint(colour));
        out.push(line.kind.marker());
        out.push_str(&line.text);
        out.push('\n');
    }

    out.push_str(palette.paint(Colour::Default));
    out.push('\n');
    out
}

/// Write a file header followed by its hunks.
pub fn write_file<W: Write>(out: &mut W, file: &FileReport, palette: &Palette) -> Result<()> {
    writeln!(out, "{}--- {}", palette.paint(Colour::Red), file.path)?;
    writeln!(out, "{}+++ {}", palette.paint(Colour::Green), file.path)?;
    for hunk in &file.hunks {
        write!(out, "{}", render_hunk(hunk, palette))?;
    }
    Ok(())
}

/// Write the section for one commit, ending with a blank line.
///
/// ```text
/// ----------------------------
/// 3f2a... libcamera: Add thing
/// ----------------------------
/// --- src/thing.cpp
/// +++ src/thing.cpp
/// @@ -10,7 +10,7 @@
/// ...
/// ---
/// 1 potential style issue detected, please review
/// ```
pub fn write_commit<W: Write>(
    out: &mut W,
    report: &CommitReport,
    palette: &Palette,
) -> Result<()> {
    let separator = "-".repeat(report.title.chars().count());
    writeln!(out, "{}", separator)?;
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", separator)?;

    if report.skipped {
        writeln!(out, "Commit doesn't touch source files, skipping")?;
        writeln!(out)?;
        return Ok(());
    }

    for file in &report.files {
        write_file(out, file, palette)?;
    }

    let issues = report.issue_count();
    if issues == 0 {
        writeln!(out, "No style issue detected")?;
    } else {
        writeln!(out, "---")?;
        writeln!(
            out,
            "{} potential style {} detected, please review",
            issues,
            issues_word(issues)
        )?;
    }
    writeln!(out)?;

    Ok(())
}

/// Write the closing line for a run.
///
/// Nothing is written for a single commit, whose own section already
/// carries the count.
pub fn write_summary<W: Write>(out: &mut W, run: &RunReport) -> Result<()> {
    match run.commits.len() {
        0 => writeln!(out, "No commits to check")?,
        1 => {}
        commits => {
            let issues = run.issue_count();
            writeln!(
                out,
                "{} potential style {} detected in {} commits",
                issues,
                issues_word(issues),
                commits
            )?;
        }
    }
    Ok(())
}
