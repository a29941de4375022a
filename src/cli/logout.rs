//! `--logout`: forget the stored session without starting the TUI.

use color_eyre::{eyre::WrapErr, Result};

use crate::traits::SessionStore;

/// Clear the stored session. Returns whether one existed.
pub async fn handle_logout_command(store: &dyn SessionStore) -> Result<bool> {
    let existed = store
        .load()
        .await
        .map(|s| s.is_some())
        .unwrap_or(true);
    store.clear().await.wrap_err("Failed to clear session")?;
    tracing::info!("Session cleared from the command line");
    Ok(existed)
}
