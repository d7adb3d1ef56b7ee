//! External formatter invocation.
//!
//! The source text is piped through a child process and its standard output
//! is taken as the formatted text.

use crate::check::Formatter;
use crate::error::{CheckstyleError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Program name of the supported formatter.
pub const ASTYLE: &str = "astyle";

/// The canonical style, expressed as astyle options.
pub const ASTYLE_OPTIONS: &[&str] = &[
    "-n",
    "--style=linux",
    "--indent=force-tab=8",
    "--attach-namespaces",
    "--attach-extern-c",
    "--pad-oper",
    "--align-pointer=name",
    "--align-reference=name",
    "--max-code-length=120",
];

/// A formatter run as `program args...`, reading stdin and writing stdout.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// astyle with the project style options.
    pub fn astyle() -> Self {
        Self::new(ASTYLE, ASTYLE_OPTIONS.iter().copied())
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, source: &str) -> Result<String> {
        debug!(program = %self.program, bytes = source.len(), "running formatter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CheckstyleError::ExternalToolFailure(format!(
                    "failed to execute {}: {}\nFix: ensure the command is installed and in PATH.",
                    self.program, e
                ))
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            CheckstyleError::ExternalToolFailure(format!("{}: stdin unavailable", self.program))
        })?;

        // The child may fill its stdout pipe before draining stdin.
        let input = source.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output().map_err(|e| {
            CheckstyleError::ExternalToolFailure(format!(
                "failed to wait for {}: {}",
                self.program, e
            ))
        })?;

        let write_result = writer.join().map_err(|_| {
            CheckstyleError::ExternalToolFailure(format!(
                "{}: stdin writer panicked",
                self.program
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckstyleError::ExternalToolFailure(format!(
                "{} failed (exit code {}): {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        write_result.map_err(|e| {
            CheckstyleError::ExternalToolFailure(format!(
                "failed to write to {}: {}",
                self.program, e
            ))
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astyle_uses_project_style() {
        let formatter = CommandFormatter::astyle();
        assert_eq!(formatter.program, "astyle");
        assert_eq!(formatter.args.len(), ASTYLE_OPTIONS.len());
        assert!(formatter.args.iter().any(|a| a == "--style=linux"));
        assert!(formatter.args.iter().any(|a| a == "--max-code-length=120"));
    }

    #[test]
    fn identity_formatter_returns_input() {
        let formatter = CommandFormatter::new("cat", Vec::<String>::new());
        let source = "int main(void)\n{\n\treturn 0;\n}\n";
        assert_eq!(formatter.format(source).unwrap(), source);
    }

    #[test]
    fn large_input_does_not_deadlock() {
        let formatter = CommandFormatter::new("cat", Vec::<String>::new());
        let source = "int x = 0;\n".repeat(100_000);
        assert_eq!(formatter.format(&source).unwrap().len(), source.len());
    }

    #[test]
    fn arguments_are_passed_through() {
        let formatter = CommandFormatter::new("sed", ["s/  */ /g"]);
        assert_eq!(formatter.format("int  a  =  1;\n").unwrap(), "int a = 1;\n");
    }

    #[test]
    fn non_zero_exit_is_tool_failure() {
        let formatter = CommandFormatter::new("sh", ["-c", "cat >/dev/null; echo broken >&2; exit 3"]);
        let err = formatter.format("x\n").unwrap_err();
        assert!(matches!(err, CheckstyleError::ExternalToolFailure(_)));
        let msg = err.to_string();
        assert!(msg.contains("exit code 3"), "{msg}");
        assert!(msg.contains("broken"), "{msg}");
    }

    #[test]
    fn missing_program_is_tool_failure() {
        let formatter = CommandFormatter::new("checkstyle-no-such-formatter", Vec::<String>::new());
        let err = formatter.format("x\n").unwrap_err();
        assert!(matches!(err, CheckstyleError::ExternalToolFailure(_)));
    }
}
