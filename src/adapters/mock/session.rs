//! In-memory session store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::Session;
use crate::traits::{SessionError, SessionStore};

/// In-memory session store.
///
/// Clones share the same storage, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<Mutex<Option<Session>>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        *store.session.lock().unwrap() = Some(session);
        store
    }

    /// Make subsequent saves fail.
    pub fn set_save_should_fail(&self, fail: bool) {
        *self.save_should_fail.lock().unwrap() = fail;
    }

    /// Snapshot of the stored session.
    pub fn current(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.current())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(SessionError::Unavailable("save disabled".to_string()));
        }
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
