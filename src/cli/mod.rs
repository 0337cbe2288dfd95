//! Non-interactive command line mode.

mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

use std::process::ExitCode;

use context::Context;
use flags::CliFlags;
use parse::{ParseError, parse};

/// Run with the given arguments (program name first).
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'pwsmith --help'.");
            return ExitCode::from(2);
        }
    };

    // Done is an early, successful exit
    let _ = ctx.run();

    if ctx.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
