//! Auth form controller.
//!
//! [`AuthForm`] owns everything the sign-in / sign-up modal shows: the
//! active tab, field values, touched flags, the loading and resending
//! flags, the classified error and the pending tab switch. It performs no
//! I/O itself except through the [`AuthApiClient`] and [`SessionStore`]
//! handed to it, so the event loop can run requests in background tasks and
//! feed the results back through [`AuthForm::finish_submit`] and
//! [`AuthForm::finish_resend`].
//!
//! Time is passed in explicitly (`now: Instant`). Delayed tab switches are
//! deadlines checked by [`AuthForm::poll`], so closing the form cancels
//! them.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::api::{ApiError, AuthApiClient};
use super::classify::{classify_api_error, FollowUp, FormError};
use super::credentials::{AuthMode, Credentials, Field};
use super::session::{LoginResponse, Session};
use super::validation::{validate, validate_field, ValidationErrors};
use crate::traits::SessionStore;

/// Delay before an error-driven tab switch happens.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_SIGNUP_SUCCESS: &str = "Registration successful! Please verify your email.";
pub const MSG_RESEND_SUCCESS: &str = "Verification email has been resent. Please check your inbox.";
pub const MSG_RESEND_FAILED: &str = "Failed to resend verification email. Please try again.";

/// Transient notification raised by the form for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// A validated submission, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: AuthMode,
    pub credentials: Credentials,
}

/// Successful API result of a submission.
#[derive(Debug, Clone)]
pub enum SubmitResponse {
    LoggedIn(LoginResponse),
    Registered,
}

impl SubmitRequest {
    /// Call `login` or `register` depending on the mode.
    pub async fn send(&self, api: &AuthApiClient) -> Result<SubmitResponse, ApiError> {
        match self.mode {
            AuthMode::Login => api.login(&self.credentials).await.map(SubmitResponse::LoggedIn),
            AuthMode::Signup => api
                .register(&self.credentials)
                .await
                .map(|_| SubmitResponse::Registered),
        }
    }
}

/// Result of a submit attempt as seen by the host.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent
    Blocked(ValidationErrors),
    /// A submission is already in flight
    Busy,
    /// Login succeeded and the session was handed to the store
    LoggedIn(Session),
    /// Signup succeeded; the verify-email prompt is showing
    Registered,
    /// The API rejected the submission
    Failed(FormError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwitch {
    pub mode: AuthMode,
    pub at: Instant,
}

/// State of the sign-in / sign-up modal.
#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    values: Credentials,
    focus: usize,
    touched: HashSet<Field>,
    loading: bool,
    error: Option<FormError>,
    unverified_email: Option<String>,
    resending: bool,
    pending_switch: Option<PendingSwitch>,
    redirect_delay: Duration,
    is_open: bool,
    verify_prompt: bool,
    notices: Vec<Notice>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_DELAY)
    }
}

impl AuthForm {
    /// Create a closed form on the Login tab.
    pub fn new(redirect_delay: Duration) -> Self {
        Self {
            mode: AuthMode::Login,
            values: Credentials::default(),
            focus: 0,
            touched: HashSet::new(),
            loading: false,
            error: None,
            unverified_email: None,
            resending: false,
            pending_switch: None,
            redirect_delay,
            is_open: false,
            verify_prompt: false,
            notices: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the modal and reset it.
    ///
    /// Clears values, touched flags, the error, the loading flag, the
    /// unverified email and any pending tab switch.
    pub fn close(&mut self) {
        self.values = Credentials::default();
        self.touched.clear();
        self.focus = 0;
        self.loading = false;
        self.error = None;
        self.unverified_email = None;
        self.pending_switch = None;
        self.is_open = false;
    }

    pub fn verify_prompt_visible(&self) -> bool {
        self.verify_prompt
    }

    pub fn dismiss_verify_prompt(&mut self) {
        self.verify_prompt = false;
    }

    // ------------------------------------------------------------------
    // Tabs and fields
    // ------------------------------------------------------------------

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch tabs. Field values and touched flags are re-initialised; the
    /// current error message stays visible.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!("Auth form switched to {:?}", mode);
        self.mode = mode;
        self.values = Credentials::default();
        self.touched.clear();
        self.focus = 0;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn values(&self) -> &Credentials {
        &self.values
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Move focus forward; the field being left counts as touched.
    pub fn focus_next(&mut self) {
        self.touched.insert(self.focused_field());
        self.focus = (self.focus + 1) % self.mode.fields().len();
    }

    /// Move focus backward; the field being left counts as touched.
    pub fn focus_prev(&mut self) {
        self.touched.insert(self.focused_field());
        let len = self.mode.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.values.value_mut(field) = value.into();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_field();
        self.values.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        self.values.value_mut(field).pop();
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Validation message for a field, shown only once it was touched.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        validate_field(self.mode, field, self.values.value(field))
    }

    // ------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn unverified_email(&self) -> Option<&str> {
        self.unverified_email.as_deref()
    }

    /// Whether the "Resend Verification Email" action is offered.
    pub fn can_resend(&self) -> bool {
        self.unverified_email.is_some()
    }

    pub fn is_resending(&self) -> bool {
        self.resending
    }

    pub fn pending_switch(&self) -> Option<PendingSwitch> {
        self.pending_switch
    }

    /// Drain notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Apply a due tab switch. Returns `true` if the tab changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_switch {
            Some(pending) if now >= pending.at => {
                self.pending_switch = None;
                let changed = self.mode != pending.mode;
                self.set_mode(pending.mode);
                changed
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Validate and mark the form as loading.
    ///
    /// On validation failure every field is marked touched so its message
    /// shows, and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitOutcome> {
        if self.loading {
            return Err(SubmitOutcome::Busy);
        }
        if let Err(errors) = validate(self.mode, &self.values) {
            self.touched.extend(self.mode.fields().iter().copied());
            tracing::debug!("Submit blocked by {} validation error(s)", errors.len());
            return Err(SubmitOutcome::Blocked(errors));
        }

        self.loading = true;
        self.error = None;

        let mut credentials = self.values.clone();
        if self.mode == AuthMode::Login {
            credentials.full_name.clear();
        }
        tracing::info!("Submitting {:?} form", self.mode);
        Ok(SubmitRequest {
            mode: self.mode,
            credentials,
        })
    }

    /// Apply the API result of `request`.
    pub async fn finish_submit(
        &mut self,
        request: &SubmitRequest,
        result: Result<SubmitResponse, ApiError>,
        store: &dyn SessionStore,
        now: Instant,
    ) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(SubmitResponse::LoggedIn(response)) => {
                let session = Session::from_login(response);
                if let Err(e) = store.save(&session).await {
                    tracing::warn!("Failed to persist session: {}", e);
                }
                tracing::info!("Login succeeded");
                self.notices.push(Notice::Success(MSG_LOGIN_SUCCESS.to_string()));
                self.is_open = false;
                SubmitOutcome::LoggedIn(session)
            }
            Ok(SubmitResponse::Registered) => {
                tracing::info!("Registration succeeded, awaiting email verification");
                self.verify_prompt = true;
                self.notices.push(Notice::Success(MSG_SIGNUP_SUCCESS.to_string()));
                self.is_open = false;
                SubmitOutcome::Registered
            }
            Err(err) => {
                let form_error = classify_api_error(request.mode, &err);
                tracing::warn!("{:?} failed: {} -> {:?}", request.mode, err, form_error.kind);

                match form_error.follow_up() {
                    FollowUp::SwitchTab(mode) => {
                        self.pending_switch = Some(PendingSwitch {
                            mode,
                            at: now + self.redirect_delay,
                        });
                    }
                    FollowUp::OfferResend => {
                        self.unverified_email = Some(request.credentials.email.clone());
                    }
                    FollowUp::None => {}
                }

                self.error = Some(form_error.clone());
                SubmitOutcome::Failed(form_error)
            }
        }
    }

    /// Validate, send and apply in one step.
    pub async fn submit(
        &mut self,
        api: &AuthApiClient,
        store: &dyn SessionStore,
        now: Instant,
    ) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = request.send(api).await;
        self.finish_submit(&request, result, store, now).await
    }

    // ------------------------------------------------------------------
    // Resend verification
    // ------------------------------------------------------------------

    /// Start a resend. Returns the email to send to, or `None` when there is
    /// no unverified email or a resend is already running.
    pub fn begin_resend(&mut self) -> Option<String> {
        if self.resending {
            return None;
        }
        let email = self.unverified_email.clone()?;
        self.resending = true;
        Some(email)
    }

    /// Apply the result of a resend. The form error is left untouched.
    pub fn finish_resend(&mut self, result: Result<(), ApiError>) {
        self.resending = false;
        match result {
            Ok(()) => {
                tracing::info!("Verification email resent");
                self.notices.push(Notice::Success(MSG_RESEND_SUCCESS.to_string()));
                self.verify_prompt = true;
            }
            Err(e) => {
                tracing::warn!("Resend verification failed: {}", e);
                self.notices.push(Notice::Error(MSG_RESEND_FAILED.to_string()));
            }
        }
    }

    /// Resend the verification email in one step.
    pub async fn resend_verification(&mut self, api: &AuthApiClient) {
        let Some(email) = self.begin_resend() else {
            return;
        };
        let result = api.reverify_email(&email).await;
        self.finish_resend(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySessionStore;
    use crate::auth::classify::{FormErrorKind, MSG_DUPLICATE_UNVERIFIED};
    use crate::traits::HttpError;

    fn filled_login() -> AuthForm {
        let mut form = AuthForm::default();
        form.open();
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Password, "secret");
        form
    }

    fn status(status: u16, body: serde_json::Value) -> ApiError {
        ApiError::Status { status, body }
    }

    #[test]
    fn test_begin_submit_blocks_invalid_and_touches_fields() {
        let mut form = AuthForm::default();
        form.set_field(Field::Email, "not-an-email");
        assert!(form.field_error(Field::Email).is_none());

        match form.begin_submit() {
            Err(SubmitOutcome::Blocked(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected Blocked, got {other:?}"),
        }
        assert!(!form.is_loading());
        assert_eq!(form.field_error(Field::Email), Some("Invalid email format"));
        assert_eq!(form.field_error(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_begin_submit_while_loading_is_busy() {
        let mut form = filled_login();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_loading());
        assert!(matches!(form.begin_submit(), Err(SubmitOutcome::Busy)));
    }

    #[test]
    fn test_login_request_drops_full_name() {
        let mut form = filled_login();
        form.set_field(Field::FullName, "stale");
        let request = form.begin_submit().unwrap();
        assert_eq!(request.mode, AuthMode::Login);
        assert!(request.credentials.full_name.is_empty());
    }

    #[test]
    fn test_focus_cycles_and_marks_touched() {
        let mut form = AuthForm::default();
        assert_eq!(form.focused_field(), Field::Email);
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Password);
        assert!(form.is_touched(Field::Email));
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Email);
        form.focus_prev();
        assert_eq!(form.focused_field(), Field::Password);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = AuthForm::default();
        for c in "ada@x.io".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.values().email, "ada@x.i");
    }

    #[test]
    fn test_set_mode_reinitialises_values_but_keeps_error() {
        let mut form = filled_login();
        form.error = Some(classify_api_error(AuthMode::Login, &status(401, serde_json::json!({}))));
        form.focus_next();

        form.set_mode(AuthMode::Signup);
        assert_eq!(form.values(), &Credentials::default());
        assert!(!form.is_touched(Field::Email));
        assert_eq!(form.focused_field(), Field::FullName);
        assert!(form.error().is_some());
    }

    #[tokio::test]
    async fn test_login_success_saves_session_and_closes() {
        let mut form = filled_login();
        let store = InMemorySessionStore::new();
        let request = form.begin_submit().unwrap();
        let response: LoginResponse =
            serde_json::from_str(r#"{"access":"a","refresh":"r","user":{"email":"ada@example.com"}}"#)
                .unwrap();

        let outcome = form
            .finish_submit(&request, Ok(SubmitResponse::LoggedIn(response)), &store, Instant::now())
            .await;

        assert!(matches!(outcome, SubmitOutcome::LoggedIn(_)));
        assert_eq!(store.current().unwrap().access_token, "a");
        assert!(!form.is_open());
        assert!(!form.is_loading());
        assert_eq!(form.take_notices(), vec![Notice::Success(MSG_LOGIN_SUCCESS.to_string())]);
        assert!(form.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_login_succeeds_even_if_session_save_fails() {
        let mut form = filled_login();
        let store = InMemorySessionStore::new();
        store.set_save_should_fail(true);
        let request = form.begin_submit().unwrap();
        let response: LoginResponse = serde_json::from_str(r#"{"access":"a","refresh":"r"}"#).unwrap();

        let outcome = form
            .finish_submit(&request, Ok(SubmitResponse::LoggedIn(response)), &store, Instant::now())
            .await;
        assert!(matches!(outcome, SubmitOutcome::LoggedIn(_)));
    }

    #[tokio::test]
    async fn test_signup_success_shows_verify_prompt() {
        let mut form = AuthForm::default();
        form.open();
        form.set_mode(AuthMode::Signup);
        form.set_field(Field::FullName, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Password, "secret");
        let request = form.begin_submit().unwrap();

        let outcome = form
            .finish_submit(&request, Ok(SubmitResponse::Registered), &InMemorySessionStore::new(), Instant::now())
            .await;
        assert!(matches!(outcome, SubmitOutcome::Registered));
        assert!(form.verify_prompt_visible());
        assert!(!form.is_open());
        assert_eq!(form.take_notices(), vec![Notice::Success(MSG_SIGNUP_SUCCESS.to_string())]);
    }

    #[tokio::test]
    async fn test_duplicate_verified_schedules_switch_to_login() {
        let mut form = AuthForm::default();
        form.set_mode(AuthMode::Signup);
        form.set_field(Field::FullName, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Password, "secret");
        let request = form.begin_submit().unwrap();
        let t0 = Instant::now();

        let err = status(409, serde_json::json!({"email": ["user already exists and is verified"]}));
        form.finish_submit(&request, Err(err), &InMemorySessionStore::new(), t0).await;

        assert_eq!(form.error().unwrap().kind, FormErrorKind::DuplicateVerifiedEmail);
        assert!(!form.poll(t0 + Duration::from_millis(1499)));
        assert_eq!(form.mode(), AuthMode::Signup);
        assert!(form.poll(t0 + Duration::from_millis(1500)));
        assert_eq!(form.mode(), AuthMode::Login);
        assert!(form.pending_switch().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_unverified_enables_resend_with_submitted_email() {
        let mut form = AuthForm::default();
        form.set_mode(AuthMode::Signup);
        form.set_field(Field::FullName, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Password, "secret");
        let request = form.begin_submit().unwrap();

        let err = status(400, serde_json::json!({"email": ["already registered but not verified"]}));
        form.finish_submit(&request, Err(err), &InMemorySessionStore::new(), Instant::now()).await;

        assert_eq!(form.error().unwrap().message, MSG_DUPLICATE_UNVERIFIED);
        assert!(form.can_resend());
        assert_eq!(form.unverified_email(), Some("ada@example.com"));
    }

    #[test]
    fn test_resend_is_ignored_without_email_or_while_running() {
        let mut form = AuthForm::default();
        assert!(form.begin_resend().is_none());

        form.unverified_email = Some("ada@example.com".to_string());
        assert_eq!(form.begin_resend().as_deref(), Some("ada@example.com"));
        assert!(form.is_resending());
        assert!(form.begin_resend().is_none());
    }

    #[test]
    fn test_resend_results() {
        let mut form = AuthForm::default();
        form.unverified_email = Some("ada@example.com".to_string());

        form.begin_resend();
        form.finish_resend(Ok(()));
        assert!(!form.is_resending());
        assert!(form.verify_prompt_visible());
        assert_eq!(form.take_notices(), vec![Notice::Success(MSG_RESEND_SUCCESS.to_string())]);

        form.dismiss_verify_prompt();
        form.begin_resend();
        form.finish_resend(Err(ApiError::Network(HttpError::Timeout("t".to_string()))));
        assert!(!form.verify_prompt_visible());
        assert_eq!(form.take_notices(), vec![Notice::Error(MSG_RESEND_FAILED.to_string())]);
    }

    #[tokio::test]
    async fn test_close_resets_and_cancels_pending_switch() {
        let mut form = filled_login();
        let request = form.begin_submit().unwrap();
        let t0 = Instant::now();
        form.finish_submit(
            &request,
            Err(status(400, serde_json::json!({"detail": "User not found"}))),
            &InMemorySessionStore::new(),
            t0,
        )
        .await;
        assert!(form.pending_switch().is_some());

        form.close();
        assert!(!form.is_open());
        assert!(form.error().is_none());
        assert!(form.pending_switch().is_none());
        assert_eq!(form.values(), &Credentials::default());
        assert!(!form.poll(t0 + Duration::from_secs(5)));
        assert_eq!(form.mode(), AuthMode::Login);
    }
}
