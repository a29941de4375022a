//! Error category classification.

use std::fmt;

/// Coarse grouping of failures, written into log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No response from the server (connect, DNS, timeout)
    Network,
    /// Credentials rejected or session missing
    Auth,
    /// Backend errors (HTTP 5xx) and unparseable responses
    Server,
    /// User action required (invalid input, rate limits)
    User,
    /// Filesystem, clipboard and other local resources
    System,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
