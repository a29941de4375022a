//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`SessionStore`] - Session persistence
//! - [`ClipboardProvider`] - System clipboard writes

pub mod clipboard;
pub mod http;
pub mod session;

pub use clipboard::{ClipboardError, ClipboardProvider};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use session::{SessionError, SessionStore};
