//! Clipboard trait abstraction.

/// Error type for clipboard operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to access the clipboard
    #[error("Clipboard error: {0}")]
    ClipboardAccess(String),
    /// Nothing to copy
    #[error("Nothing to copy")]
    Empty,
}

/// Write access to the system clipboard.
///
/// Only text is ever copied (code block contents), so the trait stays
/// synchronous and minimal.
pub trait ClipboardProvider: Send {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
