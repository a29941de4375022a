//! Startup orchestration: data directory, stored session and transcript.

use std::path::Path;

use color_eyre::Result;

use super::config::ClientConfig;
use crate::auth::Session;
use crate::models::MessageList;
use crate::storage;
use crate::traits::SessionStore;

/// Everything the TUI needs to start.
#[derive(Debug)]
pub struct StartupResult {
    pub config: ClientConfig,
    /// Stored session, if any; decides the first screen
    pub session: Option<Session>,
    pub messages: MessageList,
}

/// Prepare startup state.
///
/// An unreadable session file is logged and treated as signed out; a bad
/// transcript is a startup error.
pub async fn run_preflight(
    config: ClientConfig,
    store: &dyn SessionStore,
    transcript: Option<&Path>,
) -> Result<StartupResult> {
    storage::ensure_data_dir(config.data_dir())?;

    let session = match store.load().await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Ignoring unreadable session: {}", e);
            None
        }
    };
    tracing::info!("Starting {} session", if session.is_some() { "signed-in" } else { "signed-out" });

    let messages = storage::initial_messages(transcript)?;
    Ok(StartupResult {
        config,
        session,
        messages,
    })
}
