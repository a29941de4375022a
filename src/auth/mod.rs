//! Authentication: the sign-in / sign-up form and the account API it talks to.
//!
//! - [`AuthForm`] - form controller (tabs, fields, submit, resend)
//! - [`AuthApiClient`] - login / register / reverify-email endpoints
//! - [`classify_api_error`] - maps failures to [`FormError`]s
//! - [`Session`] - tokens plus user, persisted through a
//!   [`SessionStore`](crate::traits::SessionStore)

pub mod api;
pub mod classify;
pub mod credentials;
pub mod form;
pub mod session;
pub mod validation;

pub use api::{ApiError, AuthApiClient};
pub use classify::{classify_api_error, FollowUp, FormError, FormErrorKind};
pub use credentials::{AuthMode, Credentials, Field};
pub use form::{AuthForm, Notice, SubmitOutcome, SubmitRequest, SubmitResponse};
pub use session::{LoginResponse, Session, User};
pub use validation::{validate, ValidationErrors};
