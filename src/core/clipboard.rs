//! OS clipboard adapter
//!
//! The store only needs to push text onto the native clipboard, so the
//! capability is a single-method trait with an `arboard` implementation.

use crate::error::{ClipError, Result};
use tracing::{debug, instrument};

/// Something that can place text on a clipboard
pub trait ClipboardWriter {
    /// Write `text` to the clipboard, failing when no clipboard is reachable
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The operating system's native clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    #[instrument(skip(self, text), fields(len = text.len()))]
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipError::system_clipboard("clipboard is not available", e))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipError::system_clipboard("could not set clipboard text", e))?;

        debug!("Text placed on system clipboard");
        Ok(())
    }
}
