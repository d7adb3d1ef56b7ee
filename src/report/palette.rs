//! Terminal colours.
//!
//! Colour use is decided once at startup and captured in an immutable
//! [`Palette`] that rendering code borrows.

use clap::ValueEnum;
use std::io::IsTerminal;

/// Colours used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Default = 0,
    Red = 1,
    Green = 2,
    Cyan = 3,
}

/// SGR escape for each [`Colour`], indexed by discriminant.
const ESCAPES: [&str; 4] = ["\x1b[0;0m", "\x1b[0;31m", "\x1b[0;32m", "\x1b[0;36m"];

impl Colour {
    pub fn escape(self) -> &'static str {
        ESCAPES[self as usize]
    }
}

/// When to colour output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolved colour setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(choice: ColorChoice, interactive: bool) -> Self {
        let enabled = match choice {
            ColorChoice::Auto => interactive,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { enabled }
    }

    /// Resolve `choice` against the process's stdout.
    pub fn detect(choice: ColorChoice) -> Self {
        Self::new(choice, std::io::stdout().is_terminal())
    }

    /// A palette that never emits escapes.
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { enabled: false }
    }

    /// Escape sequence for `colour`, or an empty string when colours are off.
    pub fn paint(&self, colour: Colour) -> &'static str {
        if self.enabled { colour.escape() } else { "" }
    }
}
