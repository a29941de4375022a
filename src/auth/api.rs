//! Auth API client: login, register and reverify-email.
//!
//! Every non-2xx response is surfaced as [`ApiError::Status`] with the
//! parsed JSON body so the form can classify it; requests that never got a
//! response become [`ApiError::Network`].

use std::sync::Arc;

use serde::Serialize;

use super::credentials::Credentials;
use super::session::LoginResponse;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Error type for auth API operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// No response was received
    #[error("Network error: {0}")]
    Network(#[from] HttpError),
    /// The server answered with a non-success status
    #[error("Server error ({status}): {body}")]
    Status {
        status: u16,
        /// Parsed JSON body, or `Null` when the body was not JSON
        body: serde_json::Value,
    },
    /// A success response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the account endpoints of the backend.
#[derive(Clone)]
pub struct AuthApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for AuthApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AuthApiClient {
    /// Create a client for `base_url` (no trailing slash required).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode request: {}", e)))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.post(&url, &body, &headers).await?;

        if !response.is_success() {
            let body = response.json().unwrap_or(serde_json::Value::Null);
            tracing::debug!("POST {} failed with status {}", path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }

    /// Sign in.
    ///
    /// POST /auth/login/
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .post_json("/auth/login/", &credentials.login_request())
            .await?;
        response.json().map_err(|e| {
            let raw: String = response.text().unwrap_or_default().chars().take(200).collect();
            ApiError::InvalidResponse(format!("{}. Response: {}", e, raw))
        })
    }

    /// Create an account. The backend sends a verification email.
    ///
    /// POST /auth/register/
    pub async fn register(&self, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
        let response = self
            .post_json("/auth/register/", &credentials.register_request())
            .await?;
        Ok(response.json().unwrap_or(serde_json::Value::Null))
    }

    /// Ask the backend to send another verification email.
    ///
    /// POST /auth/reverify-email/
    pub async fn reverify_email(&self, email: &str) -> Result<(), ApiError> {
        self.post_json("/auth/reverify-email/", &serde_json::json!({ "email": email }))
            .await?;
        Ok(())
    }
}
