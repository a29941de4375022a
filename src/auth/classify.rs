//! Turning auth API failures into messages for the form.
//!
//! Rules are applied in order: transport failure, then the `email` field
//! of the error body (which wins regardless of status code), then the
//! status code.

use std::fmt;

use super::api::ApiError;
use super::credentials::AuthMode;

pub const MSG_NETWORK: &str = "Network error. Please check your connection and try again.";
pub const MSG_DUPLICATE_VERIFIED: &str = "This email is already registered. Please login instead.";
pub const MSG_DUPLICATE_UNVERIFIED: &str =
    "This email is registered but not verified. Click below to resend verification email.";
pub const MSG_EMAIL_NOT_REGISTERED: &str = "Email not registered. Please sign up first.";
pub const MSG_CHECK_INPUT: &str = "Please check your input and try again.";
pub const MSG_BAD_CREDENTIALS: &str = "Incorrect email or password. Please try again.";
pub const MSG_UNPROCESSABLE: &str = "Invalid input format. Please check your details.";
pub const MSG_RATE_LIMITED: &str = "Too many attempts. Please try again later.";
pub const MSG_UNKNOWN: &str = "An unexpected error occurred. Please try again later.";

const VERIFIED_MARKER: &str = "already exists and is verified";
const UNVERIFIED_MARKER: &str = "already registered but not verified";

/// Failure categories the form distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormErrorKind {
    Network,
    DuplicateVerifiedEmail,
    DuplicateUnverifiedEmail,
    FieldValidation,
    EmailNotRegistered,
    BadCredentials,
    UnprocessableInput,
    RateLimited,
    Unknown,
}

/// What the form does after showing the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    /// Switch to the given tab after the redirect delay
    SwitchTab(AuthMode),
    /// Remember the submitted email and offer "Resend Verification Email"
    OfferResend,
}

/// A classified, displayable form error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub kind: FormErrorKind,
    pub message: String,
}

impl FormError {
    fn new(kind: FormErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn follow_up(&self) -> FollowUp {
        match self.kind {
            FormErrorKind::DuplicateVerifiedEmail => FollowUp::SwitchTab(AuthMode::Login),
            FormErrorKind::EmailNotRegistered => FollowUp::SwitchTab(AuthMode::Signup),
            FormErrorKind::DuplicateUnverifiedEmail => FollowUp::OfferResend,
            _ => FollowUp::None,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// First message of the body's `email` field, if any.
///
/// Accepts both the list form (`{"email": ["..."]}`) and a bare string.
fn email_error(body: &serde_json::Value) -> Option<&str> {
    let first = match body.get("email")? {
        serde_json::Value::Array(items) => items.first()?.as_str(),
        serde_json::Value::String(s) => Some(s.as_str()),
        _ => None,
    };
    first.filter(|s| !s.is_empty())
}

fn string_field<'a>(body: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    body.get(key)?.as_str().filter(|s| !s.is_empty())
}

/// Classify a failed submit for the given tab.
pub fn classify_api_error(mode: AuthMode, error: &ApiError) -> FormError {
    let (status, body) = match error {
        ApiError::Network(_) => return FormError::new(FormErrorKind::Network, MSG_NETWORK),
        ApiError::InvalidResponse(_) => return FormError::new(FormErrorKind::Unknown, MSG_UNKNOWN),
        ApiError::Status { status, body } => (*status, body),
    };

    if let Some(email_error) = email_error(body) {
        return if email_error.contains(VERIFIED_MARKER) {
            FormError::new(FormErrorKind::DuplicateVerifiedEmail, MSG_DUPLICATE_VERIFIED)
        } else if email_error.contains(UNVERIFIED_MARKER) {
            FormError::new(FormErrorKind::DuplicateUnverifiedEmail, MSG_DUPLICATE_UNVERIFIED)
        } else {
            FormError::new(FormErrorKind::FieldValidation, email_error)
        };
    }

    match status {
        400 => {
            let not_found = string_field(body, "detail").is_some_and(|d| d.contains("not found"));
            if mode == AuthMode::Login && not_found {
                FormError::new(FormErrorKind::EmailNotRegistered, MSG_EMAIL_NOT_REGISTERED)
            } else {
                let message = string_field(body, "message").unwrap_or(MSG_CHECK_INPUT);
                FormError::new(FormErrorKind::FieldValidation, message)
            }
        }
        401 => FormError::new(FormErrorKind::BadCredentials, MSG_BAD_CREDENTIALS),
        422 => FormError::new(FormErrorKind::UnprocessableInput, MSG_UNPROCESSABLE),
        429 => FormError::new(FormErrorKind::RateLimited, MSG_RATE_LIMITED),
        _ => FormError::new(FormErrorKind::Unknown, MSG_UNKNOWN),
    }
}
