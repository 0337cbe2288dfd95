//! Application state and the single update function driven by user actions.
//!
//! Front ends (TUI and CLI) translate input into [`Action`]s and render the
//! returned [`Notice`]. Generation, scoring and history stay independent of
//! how they are presented.

mod state;

use std::path::PathBuf;

use log::{debug, info, warn};

pub use state::{Action, AppState, CopyTarget, Notice, ThemeMode};

use crate::clipboard::Clipboard;
use crate::error::ClipboardError;
use crate::history::{HistoryList, HistoryStore};
use crate::pass::{self, GenerationConfig, MAX_LENGTH, MIN_LENGTH, Password, StrengthLevel, export};
use crate::random::IndexSource;
use crate::settings::Settings;
use crate::store::{KEY_LAST_PASSWORD, KEY_THEME, KeyValueStore};

pub struct App<S, C, R> {
    state: AppState,
    history: HistoryStore<S>,
    clipboard: C,
    rng: R,
    export_dir: PathBuf,
}

impl<S, C, R> App<S, C, R>
where
    S: KeyValueStore,
    C: Clipboard,
    R: IndexSource,
{
    /// Build the app and restore history, last password and theme.
    pub fn new(settings: &Settings, store: S, clipboard: C, rng: R) -> Self {
        let history = HistoryStore::open(store);
        let mut state = AppState::from_settings(settings);
        state.length = state.length.clamp(MIN_LENGTH, MAX_LENGTH);

        match history.store().get(KEY_LAST_PASSWORD) {
            Ok(Some(last)) if !last.is_empty() => state.current = Some(Password::from(last)),
            Ok(_) => {}
            Err(e) => warn!("failed to read last password: {}", e),
        }
        match history.store().get(KEY_THEME) {
            Ok(Some(theme)) => state.theme = ThemeMode::parse(&theme),
            Ok(None) => {}
            Err(e) => warn!("failed to read theme: {}", e),
        }

        Self {
            state,
            history,
            clipboard,
            rng,
            export_dir: settings.export_dir.clone(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn history(&self) -> &HistoryList {
        self.history.entries()
    }

    /// Strength of the current password, if any.
    pub fn strength(&self) -> Option<StrengthLevel> {
        self.state
            .current
            .as_ref()
            .map(|pw| pass::score(pw.as_str()))
    }

    pub fn set_export_dir(&mut self, dir: impl Into<PathBuf>) {
        self.export_dir = dir.into();
    }

    /// Connect to the clipboard without copying anything.
    pub fn clipboard_ready(&mut self) -> Result<(), ClipboardError> {
        self.clipboard.connect()
    }

    /// Apply one action. Returns a notice for the user when there is one.
    pub fn update(&mut self, action: Action) -> Option<Notice> {
        debug!("action {:?}", action);
        match action {
            Action::SetLength(length) => {
                self.state.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
                (self.state.length != length).then(|| {
                    Notice::error(format!(
                        "Length set to {} (allowed {}-{})",
                        self.state.length, MIN_LENGTH, MAX_LENGTH
                    ))
                })
            }
            Action::ToggleClass(class) => {
                self.state.classes.toggle(class);
                None
            }
            Action::Generate => Some(self.generate()),
            Action::Copy(target) => self.copy(target),
            Action::Delete(index) => Some(self.delete(index)),
            Action::Export => Some(self.export()),
            Action::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                if let Err(e) = self
                    .history
                    .store_mut()
                    .set(KEY_THEME, self.state.theme.as_str())
                {
                    warn!("failed to persist theme: {}", e);
                }
                None
            }
        }
    }

    fn generate(&mut self) -> Notice {
        let generated = GenerationConfig::new(self.state.length, self.state.classes)
            .and_then(|config| pass::generate(&config, &mut self.rng));

        let password = match generated {
            Ok(password) => password,
            Err(e) => return Notice::error(e.to_string()),
        };

        if let Err(e) = self
            .history
            .store_mut()
            .set(KEY_LAST_PASSWORD, password.as_str())
        {
            warn!("failed to persist last password: {}", e);
        }
        self.history.add(password.clone());
        self.state.current = Some(password);
        Notice::info("Password generated!")
    }

    fn copy(&mut self, target: CopyTarget) -> Option<Notice> {
        let text = match target {
            CopyTarget::Current => match &self.state.current {
                Some(pw) if !pw.is_empty() => pw,
                _ => return None,
            },
            CopyTarget::History(index) => match self.history.get(index) {
                Some(pw) => pw,
                None => return Some(Notice::error(format!("No history entry {}", index + 1))),
            },
        };

        match self.clipboard.copy(text.as_str()) {
            Ok(()) => Some(Notice::info("Password copied!")),
            Err(e) => {
                warn!("copy failed: {}", e);
                Some(Notice::error("Failed to copy password"))
            }
        }
    }

    fn delete(&mut self, index: usize) -> Notice {
        match self.history.remove_at(index) {
            Ok(_) => Notice::info("Password deleted."),
            Err(e) => Notice::error(e.to_string()),
        }
    }

    fn export(&mut self) -> Notice {
        match export::write(&self.export_dir, self.history.entries().as_slice()) {
            Ok(path) => {
                info!("history exported to {}", path.display());
                Notice::info(format!("History downloaded! ({})", path.display()))
            }
            Err(e) => Notice::error(e.to_string()),
        }
    }
}
