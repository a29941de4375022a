//! Type definitions for the application state.

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Sign-in / sign-up modal (or the verify-email prompt)
    #[default]
    Auth,
    /// The conversation
    Chat,
}
