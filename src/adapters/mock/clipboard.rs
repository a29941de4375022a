//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard that remembers the last copied text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Last copied text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::ClipboardAccess("no display".to_string()));
        }
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
