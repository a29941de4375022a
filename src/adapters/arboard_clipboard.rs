//! System clipboard adapter using `arboard`.

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard provider backed by the OS clipboard (NSPasteboard on macOS,
/// X11/Wayland on Linux).
///
/// The handle is opened lazily on first copy so that headless sessions
/// without a display only fail when the user actually copies something.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboard {
    /// Create a new, not yet opened, clipboard handle.
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardAccess(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::ClipboardAccess("clipboard unavailable".to_string()))
    }
}

impl ClipboardProvider for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::ClipboardAccess(e.to_string()))
    }
}
