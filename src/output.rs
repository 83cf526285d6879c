//! Console formatting
//!
//! All styling goes through `console`, which drops ANSI codes when the stream
//! is not a terminal.

use console::style;
use std::fmt::Display;

/// A successful result line
pub fn success(message: impl Display) -> String {
    style(message).green().to_string()
}

/// An error line, prefixed with `Error:`, styled for stderr
pub fn failure(message: impl Display) -> String {
    style(format!("Error: {message}"))
        .for_stderr()
        .red()
        .to_string()
}

/// Secondary, low-emphasis text
pub fn dim(message: impl Display) -> String {
    style(message).dim().to_string()
}

/// `<name> version <version>` with the name in bold and the version in cyan
pub fn version_banner(name: &str, version: &str) -> String {
    format!("{} version {}", style(name).bold(), style(version).cyan())
}
