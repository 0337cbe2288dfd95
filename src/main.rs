use std::env;
use std::process::ExitCode;

mod app;
mod cli;
mod clipboard;
mod error;
mod exits;
mod history;
mod pass;
mod random;
mod settings;
mod store;
mod terminal;
mod tui;

use settings::Settings;

fn main() -> ExitCode {
    init_logging();
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            exits::reset_terminal();
            tui::run(&Settings::resolve(None));
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
