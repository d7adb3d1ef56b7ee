//! Git command runner for checkstyle.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus the queries the checker needs: revision
//! range expansion, commit summaries, per-file commit diffs and file
//! contents at a commit.

use crate::check::{CommitSummary, RevisionSource};
use crate::error::{CheckstyleError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Object id of the empty tree, used as the parent of root commits.
const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

fn execute(cwd: &Path, args: &[&str]) -> Result<Output> {
    debug!(cwd = %cwd.display(), args = ?args, "running git");

    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| CheckstyleError::GitError(format!("cannot run git {}: {}", subcommand(args), e)))
}

/// First argument that is not a `-c key=value` override.
fn subcommand<'a>(args: &[&'a str]) -> &'a str {
    let mut rest = args;
    while let ["-c", _, tail @ ..] = rest {
        rest = tail;
    }
    rest.first().copied().unwrap_or("")
}

/// Map a non-zero exit to `GitError`, quoting stderr (or stdout if stderr is empty).
fn check_status(args: &[&str], output: Output) -> Result<Vec<u8>> {
    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = match stderr.trim() {
        "" => stdout.trim(),
        stderr => stderr,
    };
    let code = output
        .status
        .code()
        .map_or_else(|| "signal".to_string(), |c| c.to_string());

    Err(CheckstyleError::GitError(format!(
        "git {} exited with {}: {}",
        subcommand(args),
        code,
        detail
    )))
}

/// Run a metadata git command and return its stdout, trimmed.
///
/// # Returns
///
/// * `Ok(String)` - Trimmed stdout of a zero exit
/// * `Err(CheckstyleError::GitError)` - git could not be spawned or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let stdout = check_status(args, execute(cwd.as_ref(), args)?)?;
    Ok(String::from_utf8_lossy(&stdout).trim().to_string())
}

/// Run a git command and return its stdout untouched (lossy UTF-8).
///
/// Used for file contents and diffs, where leading or trailing whitespace
/// is significant.
pub fn run_git_verbatim<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let stdout = check_status(args, execute(cwd.as_ref(), args)?)?;
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

/// Top-level directory of the work tree containing `cwd`.
///
/// Anything that prevents git from answering, including `cwd` lying outside
/// a repository, is reported as a user error.
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    run_git(cwd, &["rev-parse", "--show-toplevel"])
        .map(PathBuf::from)
        .map_err(|e| CheckstyleError::UserError(format!("not inside a git work tree ({})", e)))
}

/// Expand a revision or revision range into commits, oldest first.
///
/// A single revision (`HEAD`, `abc123`) yields that commit. A range
/// (`main..topic`, `HEAD~3..`) is passed to `git rev-list` and reversed.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Full commit ids, possibly empty
/// * `Err(CheckstyleError::UserError)` - git does not understand the revision
pub fn revision_list<P: AsRef<Path>>(cwd: P, revisions: &str) -> Result<Vec<String>> {
    let cwd = cwd.as_ref();
    let output = execute(cwd, &["rev-parse", revisions])?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.lines().next().unwrap_or("unknown revision");
        return Err(CheckstyleError::UserError(format!(
            "invalid revision range '{}': {}",
            revisions, reason
        )));
    }

    let parsed = String::from_utf8_lossy(&output.stdout);
    let revs: Vec<&str> = parsed.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    if revs.len() <= 1 {
        return Ok(revs.into_iter().map(String::from).collect());
    }

    let mut args = vec!["rev-list"];
    args.extend(revs);
    let listed = run_git(cwd, &args)?;

    let mut commits: Vec<String> = listed.lines().map(String::from).collect();
    commits.reverse();
    Ok(commits)
}

/// Get the one-line title and touched files of a commit.
///
/// Uses `git show --pretty=oneline --name-only`, with colour off and
/// `core.quotePath` off so non-ASCII paths come back as written.
pub fn commit_summary<P: AsRef<Path>>(cwd: P, commit: &str) -> Result<CommitSummary> {
    let output = run_git(
        cwd,
        &[
            "-c",
            "core.quotePath=false",
            "show",
            "--no-color",
            "--pretty=oneline",
            "--name-only",
            commit,
        ],
    )?;
    let mut lines = output.lines();

    let title = lines.next().unwrap_or(commit).to_string();
    let files = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(CommitSummary {
        commit: commit.to_string(),
        title,
        files,
    })
}

/// Check whether a commit has a first parent.
pub fn has_parent<P: AsRef<Path>>(cwd: P, commit: &str) -> Result<bool> {
    let parent = format!("{}^", commit);
    let output = execute(cwd.as_ref(), &["rev-parse", "--verify", "--quiet", &parent])?;
    Ok(output.status.success())
}

/// A repository on disk, read through the git CLI.
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
}

impl GitRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RevisionSource for GitRepository {
    fn commit_diff(&self, commit: &str, path: &str) -> Result<String> {
        let range = if has_parent(&self.root, commit)? {
            format!("{}~..{}", commit, commit)
        } else {
            format!("{}..{}", EMPTY_TREE, commit)
        };

        // User config (colour, external diff drivers) must not change the format.
        run_git_verbatim(
            &self.root,
            &["diff", "--no-color", "--no-ext-diff", &range, "--", path],
        )
    }

    fn file_contents(&self, commit: &str, path: &str) -> Result<String> {
        let object = format!("{}:{}", commit, path);
        run_git_verbatim(&self.root, &["cat-file", "blob", &object])
    }
}
