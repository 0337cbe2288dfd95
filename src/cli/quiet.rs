//! `-q` state shared by the CLI output helpers.

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Notices and warnings stay silent; errors and the password still print.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts take their default answer under `-q` or when nobody can type one.
pub fn skip_prompt() -> bool {
    enabled() || !io::stdin().is_terminal()
}
