//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStore`] - JSON file session storage
//! - [`ArboardClipboard`] - System clipboard via arboard
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`mock::InMemorySessionStore`] - In-memory session storage
//! - [`mock::MemoryClipboard`] - Clipboard that keeps the last copied text

pub mod arboard_clipboard;
pub mod file_session;
pub mod mock;
pub mod reqwest_http;

pub use arboard_clipboard::ArboardClipboard;
pub use file_session::FileSessionStore;
pub use mock::{InMemorySessionStore, MemoryClipboard, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
