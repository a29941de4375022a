//! Log file setup.
//!
//! The TUI owns stdout, so logs go to `cerina.log` in the data directory.
//! The filter comes from `CERINA_LOG` (EnvFilter syntax), default `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "CERINA_LOG";
const DEFAULT_FILTER: &str = "info";

/// Filter from `CERINA_LOG`, falling back to `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, appending to `log_path`.
pub fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err(format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {}", e))?;

    tracing::info!("cerina {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
