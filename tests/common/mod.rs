//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let api = api_for(&server);
//! let form = filled_form(AuthMode::Login, &valid_login());
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use cerina::adapters::ReqwestHttpClient;
use cerina::auth::{AuthApiClient, AuthForm, AuthMode, Credentials};
use wiremock::MockServer;

/// Auth client pointed at a wiremock server.
pub fn api_for(server: &MockServer) -> AuthApiClient {
    AuthApiClient::new(server.uri(), Arc::new(ReqwestHttpClient::new()))
}

pub fn valid_login() -> Credentials {
    Credentials::new("ada@example.com", "secret1")
}

pub fn valid_signup() -> Credentials {
    valid_login().with_full_name("Ada Lovelace")
}

/// An open form on `mode` with `credentials` typed in.
pub fn filled_form(mode: AuthMode, credentials: &Credentials) -> AuthForm {
    let mut form = AuthForm::default();
    form.open();
    form.set_mode(mode);
    for field in mode.fields() {
        form.set_field(*field, credentials.value(*field));
    }
    form
}

pub fn login_response_json() -> serde_json::Value {
    serde_json::json!({
        "access": "access-token",
        "refresh": "refresh-token",
        "user": {"email": "ada@example.com", "full_name": "Ada Lovelace", "id": 7}
    })
}
