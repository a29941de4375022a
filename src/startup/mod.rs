//! Startup: configuration and pre-flight loading.
//!
//! - [`config`] - `ClientConfig` with defaults, builder and env overrides
//! - [`preflight`] - Loads the stored session and the initial conversation

pub mod config;
pub mod preflight;

pub use config::ClientConfig;
pub use preflight::{run_preflight, StartupResult};
