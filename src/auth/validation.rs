//! Client-side credential validation.
//!
//! Validation is a pure precondition: a form that fails it never reaches
//! the network.

use once_cell::sync::Lazy;
use regex::Regex;

use super::credentials::{AuthMode, Credentials, Field};

/// Minimum length (in characters) for passwords and full names.
pub const MIN_LENGTH: usize = 3;

/// Dot-atom local part, hostname labels and an alphabetic TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    ))
    .expect("Invalid email regex pattern")
});

/// Per-field validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, &'static str)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push((field, message));
    }
}

/// Check a single field. Returns the first failing rule's message.
pub fn validate_field(mode: AuthMode, field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Email => {
            if value.is_empty() {
                Some("Email is required")
            } else if !EMAIL_REGEX.is_match(value) {
                Some("Invalid email format")
            } else {
                None
            }
        }
        Field::Password => {
            if value.is_empty() {
                Some("Password is required")
            } else if value.chars().count() < MIN_LENGTH {
                Some("Password must be at least 3 characters long")
            } else {
                None
            }
        }
        Field::FullName => {
            if mode != AuthMode::Signup {
                None
            } else if value.is_empty() {
                Some("Full name is required")
            } else if value.chars().count() < MIN_LENGTH {
                Some("Full name must be at least 3 characters long")
            } else {
                None
            }
        }
    }
}

/// Validate every field the mode shows.
pub fn validate(mode: AuthMode, credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for &field in mode.fields() {
        if let Some(message) = validate_field(mode, field, credentials.value(field)) {
            errors.push(field, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
