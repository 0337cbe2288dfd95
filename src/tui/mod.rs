//! Interactive TUI menus.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use log::info;

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::random::RngIndex;
use crate::settings::Settings;

/// Run TUI interactive mode.
pub fn run(settings: &Settings) {
    info!("interactive mode, store {}", settings.store_path.display());
    let mut app = App::new(
        settings,
        settings.store(),
        SystemClipboard::new(),
        RngIndex::thread(),
    );
    gen_main_menu(&mut app);
}
