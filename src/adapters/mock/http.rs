//! Recording HTTP client for unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A POST the mock received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status code
    Success(Response),
    /// Fail without a response
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

/// Answers by exact URL, then with the default response. Unmatched URLs
/// fail with [`HttpError::Other`].
///
/// # Example
///
/// ```ignore
/// use cerina::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://api.test/auth/login/",
///     MockResponse::json(401, serde_json::json!({"detail": "bad credentials"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn response_for(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });

        match self.response_for(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_records_body() {
        let client = MockHttpClient::new();
        client.set_response("http://api.test/x", MockResponse::json(200, serde_json::json!({})));

        let response = client
            .post("http://api.test/x", r#"{"email":"a@b.co"}"#, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/x");
        assert_eq!(requests[0].json_body().unwrap()["email"], "a@b.co");
    }

    #[tokio::test]
    async fn test_exact_match_beats_default() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        client.set_response("http://api.test/ok", MockResponse::json(201, serde_json::json!({})));

        let ok = client.post("http://api.test/ok", "{}", &Headers::new()).await;
        assert_eq!(ok.unwrap().status, 201);
        let other = client.post("http://api.test/other", "{}", &Headers::new()).await;
        assert!(matches!(other, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_response_is_an_error() {
        let client = MockHttpClient::new();
        let result = client.post("http://api.test/unset", "{}", &Headers::new()).await;
        assert!(result.is_err());
        assert_eq!(client.request_count(), 1);
    }
}
