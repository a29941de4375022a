//! Session store trait abstraction.
//!
//! The auth form hands a freshly established [`Session`] to a store and
//! never reads tokens back itself. Keeping the store behind a trait lets the
//! binary persist to disk while tests keep everything in memory.

use async_trait::async_trait;

use crate::auth::Session;

/// Session storage errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The storage location could not be determined
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
    /// IO error reading or writing the session
    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored session could not be (de)serialized
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for session persistence.
///
/// # Example
///
/// ```ignore
/// use cerina::traits::SessionStore;
///
/// async fn is_signed_in<S: SessionStore>(store: &S) -> bool {
///     matches!(store.load().await, Ok(Some(_)))
/// }
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Persist a session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), SessionError>;
}
