//! Form modes, fields and the credential values the auth form collects.

use serde::Serialize;

/// Which tab of the auth modal is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    /// Sign in with email and password
    #[default]
    Login,
    /// Create an account
    Signup,
}

impl AuthMode {
    /// Fields shown for this mode, in focus order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            AuthMode::Login => &[Field::Email, Field::Password],
            AuthMode::Signup => &[Field::FullName, Field::Email, Field::Password],
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Let's Go",
            AuthMode::Signup => "Join Now",
        }
    }

    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// A single input of the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    Password,
}

impl Field {
    /// Placeholder shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password)
    }
}

/// Values typed into the auth form.
///
/// `full_name` is only meaningful in [`AuthMode::Signup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: String::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Body for `POST /auth/login/`.
    pub fn login_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            email: &self.email,
            password: &self.password,
        }
    }

    /// Body for `POST /auth/register/`.
    pub fn register_request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            full_name: &self.full_name,
            email: &self.email,
            password: &self.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Registration request body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
