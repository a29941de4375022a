//! Reqwest-based [`HttpClient`] used by the binary.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use cerina::adapters::ReqwestHttpClient;
/// use cerina::auth::AuthApiClient;
/// use std::{sync::Arc, time::Duration};
///
/// let http = ReqwestHttpClient::with_timeout(Duration::from_secs(30));
/// let api = AuthApiClient::new("http://localhost:8000/api", Arc::new(http));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client whose requests give up after `timeout`.
    ///
    /// Falls back to the default client if the builder rejects the
    /// configuration.
    pub fn with_timeout(timeout: Duration) -> Self {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => Self { client },
            Err(e) => {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Self::new()
            }
        }
    }

    fn transport_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    fn request(&self, url: &str, body: &str, headers: &Headers) -> reqwest::RequestBuilder {
        headers.iter().fold(
            self.client.post(url).body(body.to_string()),
            |builder, (key, value)| builder.header(key, value),
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let response = self
            .request(url, body, headers)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status().as_u16();
        let response_headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        let bytes = response.bytes().await.map_err(Self::transport_error)?;

        Ok(Response::with_headers(status, response_headers, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_headers_and_body() {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = ReqwestHttpClient::new();
        let request = client
            .request("http://localhost/api/auth/login/", r#"{"email":"a@b.co"}"#, &headers)
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(br#"{"email":"a@b.co"}"#.as_slice())
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(2));
        // Port 9 (discard) on localhost is closed in test environments.
        let result = client
            .post("http://127.0.0.1:9/auth/login/", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_bad_url_is_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client.post("not a url", "{}", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }
}
