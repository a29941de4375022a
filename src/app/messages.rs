//! AppMessage enum for async communication within the application.

use crate::auth::{ApiError, SubmitRequest, SubmitResponse};

/// Results of background tasks, delivered back to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A login or register request completed
    SubmitFinished {
        request: SubmitRequest,
        result: Result<SubmitResponse, ApiError>,
    },
    /// A reverify-email request completed
    ResendFinished(Result<(), ApiError>),
}
