//! Centralized notices and prompts for CLI output.
//!
//! Passwords go to stdout; everything else goes to stderr.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Informational notice - suppressed in quiet mode
pub fn notice(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

/// Warning in yellow - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error in red - always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Ask whether to print the password when the clipboard failed.
/// Non-interactive or quiet runs fall back to printing.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}
