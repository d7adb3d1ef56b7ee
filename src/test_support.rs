//! Scratch git repositories for tests.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Identity and signing settings so commits work on any machine.
const REPO_CONFIG: &[(&str, &str)] = &[
    ("user.email", "checkstyle@example.com"),
    ("user.name", "Checkstyle Tests"),
    ("commit.gpgsign", "false"),
    ("core.autocrlf", "false"),
];

/// A repository on branch `main` whose only commit adds `README.md` (`# Test`).
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path();

    git(repo, &["init", "--quiet"]);
    git(repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    for (key, value) in REPO_CONFIG {
        git(repo, &["config", key, value]);
    }

    commit_file(repo, "README.md", "# Test\n", "Initial commit");
    temp_dir
}

/// Write `contents` to `file` (creating parent directories) and commit only that file.
pub(crate) fn commit_file(repo: &Path, file: &str, contents: &str, message: &str) {
    let target = repo.join(file);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&target, contents).unwrap();

    git(repo, &["add", "--", file]);
    git(repo, &["commit", "--quiet", "-m", message]);
}

/// Run git in `repo` and return trimmed stdout. Panics with git's output on failure.
pub(crate) fn git(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("cannot run git {:?}: {}", args, e));

    assert!(
        output.status.success(),
        "git {:?} exited with {:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
