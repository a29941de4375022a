//! Client configuration.
//!
//! Defaults, builder methods and environment overrides:
//!
//! | variable             | field          | default                     |
//! |----------------------|----------------|-----------------------------|
//! | `CERINA_API_URL`     | `api_base_url` | `http://localhost:8000/api` |
//! | `CERINA_MAILBOX_URL` | `mailbox_url`  | `https://mail.google.com`   |
//! | `CERINA_HOME`        | `data_dir`     | `~/.cerina`                 |

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::view_state::MessageViewConfig;

pub const ENV_API_URL: &str = "CERINA_API_URL";
pub const ENV_MAILBOX_URL: &str = "CERINA_MAILBOX_URL";
pub const ENV_HOME: &str = "CERINA_HOME";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_MAILBOX_URL: &str = "https://mail.google.com";

const SESSION_FILE: &str = "session.json";
const LOG_FILE: &str = "cerina.log";

/// Runtime configuration for the client.
///
/// # Example
///
/// ```
/// use cerina::startup::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_base_url("https://api.example.com")
///     .with_typing_tick_ms(20);
/// assert_eq!(config.typing_tick_ms, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the auth API (no trailing slash)
    pub api_base_url: String,
    /// Opened by "Open Email" in the verify prompt
    pub mailbox_url: String,
    /// Holds session.json and cerina.log
    pub data_dir: PathBuf,
    pub typing_tick_ms: u64,
    pub copy_feedback_ms: u64,
    pub tab_redirect_ms: u64,
    pub collapse_threshold_lines: usize,
    pub toast_ms: u64,
    pub request_timeout_secs: u64,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".cerina"))
        .unwrap_or_else(|| PathBuf::from(".cerina"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            mailbox_url: DEFAULT_MAILBOX_URL.to_string(),
            data_dir: default_data_dir(),
            typing_tick_ms: 10,
            copy_feedback_ms: 2000,
            tab_redirect_ms: 1500,
            collapse_threshold_lines: 15,
            toast_ms: 3000,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `CERINA_*` overrides applied. Empty values are ignored.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = var(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(url) = var(ENV_MAILBOX_URL) {
            config = config.with_mailbox_url(url);
        }
        if let Some(home) = var(ENV_HOME) {
            config = config.with_data_dir(home);
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_mailbox_url(mut self, url: impl Into<String>) -> Self {
        self.mailbox_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_typing_tick_ms(mut self, ms: u64) -> Self {
        self.typing_tick_ms = ms;
        self
    }

    pub fn with_copy_feedback_ms(mut self, ms: u64) -> Self {
        self.copy_feedback_ms = ms;
        self
    }

    pub fn with_tab_redirect_ms(mut self, ms: u64) -> Self {
        self.tab_redirect_ms = ms;
        self
    }

    pub fn with_collapse_threshold_lines(mut self, lines: usize) -> Self {
        self.collapse_threshold_lines = lines;
        self
    }

    pub fn with_toast_ms(mut self, ms: u64) -> Self {
        self.toast_ms = ms;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn tab_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.tab_redirect_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn message_view_config(&self) -> MessageViewConfig {
        MessageViewConfig {
            typing_interval: Duration::from_millis(self.typing_tick_ms),
            copy_feedback: Duration::from_millis(self.copy_feedback_ms),
            collapse_threshold: self.collapse_threshold_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.mailbox_url, DEFAULT_MAILBOX_URL);
        assert_eq!(config.typing_tick_ms, 10);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.tab_redirect_ms, 1500);
        assert_eq!(config.collapse_threshold_lines, 15);
        assert_eq!(config.toast_ms, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.data_dir.ends_with(".cerina"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_api_base_url("https://api.example.com/")
            .with_data_dir("/tmp/cerina-test")
            .with_collapse_threshold_lines(5);

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.session_path(), PathBuf::from("/tmp/cerina-test/session.json"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/cerina-test/cerina.log"));
        assert_eq!(config.message_view_config().collapse_threshold, 5);
    }

    #[test]
    fn test_durations() {
        let config = ClientConfig::default();
        assert_eq!(config.tab_redirect_delay(), Duration::from_millis(1500));
        assert_eq!(config.toast_duration(), Duration::from_secs(3));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.message_view_config().copy_feedback,
            Duration::from_millis(2000)
        );
    }
}
