//! Unified error type for the client.

use super::category::ErrorCategory;
use crate::auth::ApiError;
use crate::traits::{ClipboardError, HttpError, SessionError};

/// Every failure the client can surface, in one enum.
#[derive(Debug, thiserror::Error)]
pub enum CerinaError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Api(ApiError),

    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for CerinaError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(http) => CerinaError::Http(http),
            other => CerinaError::Api(other),
        }
    }
}

impl CerinaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CerinaError::Http(_) => ErrorCategory::Network,
            CerinaError::Api(ApiError::Status { status, .. }) => match status {
                401 | 403 => ErrorCategory::Auth,
                400..=499 => ErrorCategory::User,
                _ => ErrorCategory::Server,
            },
            CerinaError::Api(_) => ErrorCategory::Server,
            CerinaError::Session(_) | CerinaError::Clipboard(_) | CerinaError::Io(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Short message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            CerinaError::Http(HttpError::Timeout(_)) => "The request timed out".to_string(),
            CerinaError::Http(_) => "Could not reach the server".to_string(),
            CerinaError::Api(ApiError::Status { status, .. }) => {
                format!("Server returned an error ({})", status)
            }
            CerinaError::Api(_) => "The server sent an unexpected response".to_string(),
            CerinaError::Session(_) => "Could not save your session".to_string(),
            CerinaError::Clipboard(ClipboardError::Empty) => "Nothing to copy".to_string(),
            CerinaError::Clipboard(_) => "Could not access the clipboard".to_string(),
            CerinaError::Io(e) => format!("File error: {}", e),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CerinaError::Http(_) => "HTTP",
            CerinaError::Api(_) => "API",
            CerinaError::Session(_) => "SESSION",
            CerinaError::Clipboard(_) => "CLIPBOARD",
            CerinaError::Io(_) => "IO",
        }
    }
}
