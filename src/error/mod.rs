//! Unified error handling.
//!
//! Each layer defines its own `thiserror` enum next to the code that
//! produces it ([`HttpError`](crate::traits::HttpError),
//! [`ApiError`](crate::auth::ApiError),
//! [`SessionError`](crate::traits::SessionError),
//! [`ClipboardError`](crate::traits::ClipboardError)). [`CerinaError`]
//! unifies them for the app shell, which turns them into toasts and log
//! lines via [`CerinaError::category`] and [`CerinaError::user_message`].
//!
//! Auth form failures do not go through here: they are classified into
//! [`FormError`](crate::auth::FormError)s with their own exact messages.

mod category;
mod cerina_error;

pub use category::ErrorCategory;
pub use cerina_error::CerinaError;
