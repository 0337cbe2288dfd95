//! CLI context - bundles settings, flags, and the application.

use std::path::PathBuf;

use log::info;
use thiserror::Error;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::app::{Action, App, CopyTarget, Notice};
use crate::clipboard::SystemClipboard;
use crate::error::GenerationError;
use crate::pass::{self, CharacterClass, MAX_LENGTH, MIN_LENGTH, StrengthLevel};
use crate::random::RngIndex;
use crate::settings::Settings;
use crate::store::FileStore;
use crate::tui::print_help;

type CliApp = App<FileStore, SystemClipboard, RngIndex<rand::rngs::ThreadRng>>;

/// Early exit - not an error, just done.
pub struct Done;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    app: CliApp,
    failed: bool,
}

impl Context {
    /// Parse arguments and restore persisted state.
    pub fn new(args: Vec<String>) -> Result<Self, CliError> {
        let flags = super::parse(&args)?;
        let settings = settings_from_flags(&flags)?;

        let app = App::new(
            &settings,
            settings.store(),
            SystemClipboard::new(),
            RngIndex::thread(),
        );

        Ok(Self {
            settings,
            flags,
            app,
            failed: false,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_score()?;
        if self.flags.wants_generate() {
            self.generate_output();
        }
        self.handle_delete();
        self.handle_history();
        self.handle_export();
        Ok(())
    }

    /// True if any step reported an error.
    pub fn failed(&self) -> bool {
        self.failed
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("pwsmith {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_score(&self) -> Result<(), Done> {
        if let Some(ref password) = self.flags.score {
            println!("{}", strength_line(pass::score(password)));
            return Err(Done);
        }
        Ok(())
    }

    fn generate_output(&mut self) {
        // Settle the clipboard question first so an abort leaves no trace
        let mut to_clipboard = self.flags.clipboard;
        if to_clipboard && let Err(e) = self.app.clipboard_ready() {
            prompts::warn(&e.to_string());
            if !prompts::clipboard_fallback_prompt() {
                self.failed = true;
                return;
            }
            to_clipboard = false;
        }

        let notice = self.app.update(Action::Generate);
        if !self.report(notice) {
            return;
        }
        let Some(password) = self.app.state().current.clone() else {
            return;
        };
        info!("generated a {} character password", password.char_len());

        let mut print = true;
        if to_clipboard {
            match self.app.update(Action::Copy(CopyTarget::Current)) {
                // Already saved to history, so show it rather than lose it
                Some(n) if n.is_error() => prompts::warn(&n.message),
                Some(n) => {
                    prompts::notice(&n.message);
                    print = false;
                }
                None => {}
            }
        }

        if print {
            println!("{password}");
        }
        if let Some(level) = self.app.strength() {
            prompts::notice(&strength_line(level));
        }
    }

    fn handle_delete(&mut self) {
        if let Some(n) = self.flags.delete {
            let notice = match n.checked_sub(1) {
                Some(index) => self.app.update(Action::Delete(index)),
                None => Some(Notice::error("History entries are numbered from 1")),
            };
            self.report(notice);
        }
    }

    fn handle_history(&self) {
        if !self.flags.history {
            return;
        }
        let history = self.app.history();
        if history.is_empty() {
            println!("(no history)");
        }
        for (i, pw) in history.iter().enumerate() {
            println!("{}. {}", i + 1, pw);
        }
    }

    fn handle_export(&mut self) {
        if self.flags.output.is_some() {
            let dir = self.settings.export_dir.clone();
            self.app.set_export_dir(dir);
            let notice = self.app.update(Action::Export);
            self.report(notice);
        }
    }

    /// Print a notice; returns false for errors.
    fn report(&mut self, notice: Option<Notice>) -> bool {
        match notice {
            Some(n) if n.is_error() => {
                prompts::error(&n.message);
                self.failed = true;
                false
            }
            Some(n) => {
                prompts::notice(&n.message);
                true
            }
            None => true,
        }
    }
}

fn strength_line(level: StrengthLevel) -> String {
    format!(
        "Strength: {} ({}/{})",
        level.label(),
        level.value(),
        StrengthLevel::MAX
    )
}

/// Apply CLI flags over the defaults.
fn settings_from_flags(flags: &CliFlags) -> Result<Settings, GenerationError> {
    let mut settings = Settings::resolve(flags.store.as_ref().map(PathBuf::from));

    if let Some(length) = flags.length {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GenerationError::LengthOutOfRange { length });
        }
        settings.length = length;
    }

    settings.classes.set(CharacterClass::Upper, !flags.no_upper);
    settings.classes.set(CharacterClass::Lower, !flags.no_lower);
    settings.classes.set(CharacterClass::Digit, !flags.no_digits);
    settings.classes.set(CharacterClass::Symbol, flags.symbols);

    if let Some(ref dir) = flags.output {
        settings.export_dir = PathBuf::from(dir);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    fn flags(list: &[&str]) -> CliFlags {
        let args: Vec<String> = std::iter::once("pwsmith")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        super::super::parse(&args).unwrap()
    }

    #[test]
    fn test_settings_defaults() {
        let s = settings_from_flags(&flags(&["--store", "/tmp/x.json"])).unwrap();
        assert_eq!(s.length, 12);
        assert_eq!(s.classes, ClassSet::default());
        assert_eq!(s.store_path, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn test_settings_classes_and_length() {
        let s = settings_from_flags(&flags(&["-l", "30", "-s", "--no-upper", "--no-lower"]))
            .unwrap();
        assert_eq!(s.length, 30);
        let expected: ClassSet = [CharacterClass::Digit, CharacterClass::Symbol]
            .into_iter()
            .collect();
        assert_eq!(s.classes, expected);
    }

    #[test]
    fn test_settings_length_out_of_range() {
        assert_eq!(
            settings_from_flags(&flags(&["-l", "5"])),
            Err(GenerationError::LengthOutOfRange { length: 5 })
        );
        assert!(settings_from_flags(&flags(&["-l", "51"])).is_err());
    }

    #[test]
    fn test_settings_export_dir() {
        let s = settings_from_flags(&flags(&["-o", "exports"])).unwrap();
        assert_eq!(s.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_strength_line() {
        assert_eq!(strength_line(pass::score("Aa1!aaaa")), "Strength: Very Strong (5/5)");
        assert_eq!(strength_line(pass::score("")), "Strength: Too Short (0/5)");
    }
}
