//! Formatting of user-facing status messages on stderr.
//!
//! Messages carry a colored label when the target supports color and a plain
//! label otherwise.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use is_terminal::IsTerminal;
use log::LevelFilter;

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Prints a warning to stderr, unless the logger filters out warnings
/// (`--quiet` or a stricter `RUST_LOG`).
pub fn warn_msg(msg: impl AsRef<str>) {
    if !warnings_enabled(log::max_level()) {
        return;
    }
    let supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

fn warnings_enabled(level: LevelFilter) -> bool {
    level >= LevelFilter::Warn
}

/// Prints an error to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}
