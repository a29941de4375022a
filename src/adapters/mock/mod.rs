//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySessionStore`] - In-memory session storage
//! - [`MemoryClipboard`] - Clipboard that records copied text

pub mod clipboard;
pub mod http;
pub mod session;

pub use clipboard::MemoryClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session::InMemorySessionStore;
