//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

pub trait Clipboard {
    /// Check the clipboard can be reached before anything depends on it.
    fn connect(&mut self) -> Result<(), ClipboardError>;

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard, connected on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard context".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn connect(&mut self) -> Result<(), ClipboardError> {
        self.context().map(|_| ())
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Read back so the provider has taken ownership, then wipe our copy
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
