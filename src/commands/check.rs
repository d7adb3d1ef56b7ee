//! Implementation of the `checkstyle [revision-range]` command.
//!
//! Resolves the repository, loads the configuration, then checks each
//! commit of the range oldest first and writes the report to stdout.

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::check::{Formatter, RunReport, SourceFilter, StyleChecker};
use crate::cli::Cli;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::Result;
use crate::formatter::CommandFormatter;
use crate::git::{self, GitRepository};
use crate::report::{self, OutputFormat, Palette};
use crate::tools::{REQUIRED_TOOLS, require_executables};

/// Execute the check command against the current directory.
pub fn cmd_check(args: &Cli) -> Result<()> {
    require_executables(REQUIRED_TOOLS)?;

    let cwd = std::env::current_dir()?;
    let palette = Palette::detect(args.color);
    let formatter = CommandFormatter::astyle();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_check(&cwd, args, &formatter, &palette, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load `--config` if given, otherwise the repository's own config file.
fn load_config(repo_root: &Path, cwd: &Path, args: &Cli) -> Result<Config> {
    let Some(explicit) = &args.config else {
        return Config::load_from_repo(repo_root);
    };

    let repo_config = repo_root.join(CONFIG_FILE_NAME);
    if repo_config.is_file() {
        warn!(
            ignored = %repo_config.display(),
            "using --config instead of the repository config file"
        );
    }

    Config::load(cwd.join(explicit))
}

/// Check the requested range and write the report to `out`.
///
/// Text reports are written commit by commit as they are checked; the JSON
/// report is written once the whole range is done.
pub(crate) fn run_check<F, W>(
    cwd: &Path,
    args: &Cli,
    formatter: &F,
    palette: &Palette,
    out: &mut W,
) -> Result<RunReport>
where
    F: Formatter + ?Sized,
    W: Write,
{
    let root = git::repo_root(cwd)?;
    let config = load_config(&root, cwd, args)?;
    let filter = SourceFilter::from_config(&config);

    let commits = git::revision_list(&root, &args.revision_range)?;
    info!(
        range = %args.revision_range,
        commits = commits.len(),
        "checking revision range"
    );

    let source = GitRepository::new(&root);
    let checker = StyleChecker::new(&source, formatter, config.context_lines);
    let mut run = RunReport::default();

    for commit in &commits {
        let summary = git::commit_summary(&root, commit)?;
        let report = checker.check_commit(&summary, &filter)?;
        info!(commit = %commit, issues = report.issue_count(), "checked commit");

        if args.format == OutputFormat::Text {
            report::write_commit(out, &report, palette)?;
        }
        run.commits.push(report);
    }

    match args.format {
        OutputFormat::Text => report::write_summary(out, &run)?,
        OutputFormat::Json => report::write_json(out, &run)?,
    }

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckstyleError;
    use crate::test_support::{commit_file, create_test_repo, git};
    use clap::Parser;
    use tempfile::TempDir;

    /// Collapses runs of spaces, standing in for astyle.
    fn space_squeezer() -> CommandFormatter {
        CommandFormatter::new("sed", ["-e", "s/  */ /g"])
    }

    fn run(cwd: &Path, argv: &[&str]) -> Result<(RunReport, String)> {
        let mut full = vec!["checkstyle"];
        full.extend_from_slice(argv);
        let args = Cli::try_parse_from(full).unwrap();

        let mut out = Vec::new();
        let report = run_check(cwd, &args, &space_squeezer(), &Palette::plain(), &mut out)?;
        Ok((report, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn commit_without_sources_is_skipped() {
        let temp_dir = create_test_repo();

        let (report, text) = run(temp_dir.path(), &[]).unwrap();
        assert_eq!(report.commits.len(), 1);
        assert!(report.commits[0].skipped);
        assert!(text.contains("Initial commit\n"));
        assert!(text.contains("Commit doesn't touch source files, skipping\n"));
    }

    #[test]
    fn reports_issue_in_added_lines() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "src/main.c", "int  x;\n", "Add main");

        let (report, text) = run(temp_dir.path(), &["HEAD"]).unwrap();
        assert_eq!(report.issue_count(), 1);
        assert!(text.contains("--- src/main.c\n+++ src/main.c\n"));
        assert!(text.contains("-int  x;\n+int x;\n"));
        assert!(text.ends_with("---\n1 potential style issue detected, please review\n\n"));
    }

    #[test]
    fn user_colour_config_does_not_hide_issues() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["config", "color.ui", "always"]);
        commit_file(temp_dir.path(), "src/main.c", "int  x;\n", "Add main");

        let (report, text) = run(temp_dir.path(), &[]).unwrap();
        assert_eq!(report.issue_count(), 1);
        assert!(!text.contains('\x1b'), "{text:?}");
    }

    #[test]
    fn non_ascii_source_path_is_checked() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "src/café.c", "int  x;\n", "Add café");

        let (report, text) = run(temp_dir.path(), &[]).unwrap();
        assert!(!report.commits[0].skipped);
        assert_eq!(report.issue_count(), 1);
        assert!(text.contains("--- src/café.c\n+++ src/café.c\n"));
    }

    #[test]
    fn range_is_checked_oldest_first_with_summary() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        commit_file(repo, "a.c", "int a;\n", "Add a");
        commit_file(repo, "b.h", "int  b;\n", "Add b");
        commit_file(repo, "notes.txt", "text  here\n", "Add notes");

        let (report, text) = run(repo, &["HEAD~3..HEAD"]).unwrap();
        let titles: Vec<&str> = report
            .commits
            .iter()
            .map(|c| c.title.split_once(' ').map(|(_, t)| t).unwrap_or_default())
            .collect();
        assert_eq!(titles, vec!["Add a", "Add b", "Add notes"]);
        assert!(!report.commits[0].skipped);
        assert!(report.commits[2].skipped);
        assert!(text.contains("No style issue detected\n"));
        assert!(text.ends_with("1 potential style issue detected in 3 commits\n"));
    }

    #[test]
    fn empty_range_is_not_an_error() {
        let temp_dir = create_test_repo();

        let (report, text) = run(temp_dir.path(), &["HEAD..HEAD"]).unwrap();
        assert!(report.commits.is_empty());
        assert_eq!(text, "No commits to check\n");
    }

    #[test]
    fn invalid_range_is_a_user_error() {
        let temp_dir = create_test_repo();

        let err = run(temp_dir.path(), &["no-such-branch"]).unwrap_err();
        assert!(matches!(err, CheckstyleError::UserError(_)));
        assert!(err.to_string().contains("no-such-branch"));
    }

    #[test]
    fn outside_repository_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = run(temp_dir.path(), &[]).unwrap_err();
        assert!(matches!(err, CheckstyleError::UserError(_)));
    }

    #[test]
    fn repository_config_selects_extensions() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        std::fs::write(repo.join(CONFIG_FILE_NAME), "source_extensions: [txt]\n").unwrap();
        commit_file(repo, "notes.txt", "text  here\n", "Add notes");

        let (report, _) = run(repo, &[]).unwrap();
        assert!(!report.commits[0].skipped);
        assert_eq!(report.issue_count(), 1);
    }

    #[test]
    fn explicit_config_overrides_repository_config() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        std::fs::write(repo.join(CONFIG_FILE_NAME), "source_extensions: [txt]\n").unwrap();
        std::fs::write(repo.join("only-c.yaml"), "source_extensions: [c]\n").unwrap();
        commit_file(repo, "notes.txt", "text  here\n", "Add notes");

        let (report, _) = run(repo, &["--config", "only-c.yaml"]).unwrap();
        assert!(report.commits[0].skipped);
    }

    #[test]
    fn invalid_config_is_a_user_error() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        std::fs::write(repo.join(CONFIG_FILE_NAME), "source_extensions: ['.c']\n").unwrap();

        let err = run(repo, &[]).unwrap_err();
        assert!(matches!(err, CheckstyleError::UserError(_)));
    }

    #[test]
    fn json_output_is_written_once() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "README.md", "# Checked\n", "Update README");
        commit_file(temp_dir.path(), "main.cpp", "int  x;\n", "Add main");

        let (_, text) = run(temp_dir.path(), &["--format", "json", "HEAD~2..HEAD"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["issues"], 1);
        assert_eq!(value["commits"].as_array().unwrap().len(), 2);
        assert_eq!(value["commits"][1]["files"][0]["path"], "main.cpp");
    }
}
