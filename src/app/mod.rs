//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Results of background tasks
//! - [`ToastQueue`] - Status-line notifications

mod actions;
mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod toast;
mod types;

pub use messages::AppMessage;
pub use state_methods::FRAME_INTERVAL;
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_DURATION};
pub use types::Screen;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::auth::{AuthApiClient, AuthForm, Session};
use crate::models::MessageList;
use crate::startup::{ClientConfig, StartupResult};
use crate::traits::{ClipboardProvider, SessionStore};
use crate::view_state::ConversationView;

/// Main application state
pub struct App {
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Sign-in / sign-up modal
    pub auth_form: AuthForm,
    /// The conversation and its typing marker
    pub messages: MessageList,
    /// Per bot message render state
    pub conversation: ConversationView,
    pub toasts: ToastQueue,
    /// Signed-in session, if any
    pub session: Option<Session>,
    pub config: ClientConfig,
    pub api: AuthApiClient,
    pub session_store: Arc<dyn SessionStore>,
    pub clipboard: Box<dyn ClipboardProvider>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Lines scrolled up from the bottom of the conversation
    pub conversation_scroll: u16,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("should_quit", &self.should_quit)
            .field("messages", &self.messages.len())
            .field("signed_in", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build the app from preflight results.
    ///
    /// Starts on [`Screen::Chat`] when a session was restored, otherwise on
    /// [`Screen::Auth`] with the modal open.
    pub fn new(
        startup: StartupResult,
        api: AuthApiClient,
        session_store: Arc<dyn SessionStore>,
        clipboard: Box<dyn ClipboardProvider>,
        now: Instant,
    ) -> Self {
        let StartupResult {
            config,
            session,
            messages,
        } = startup;
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut auth_form = AuthForm::new(config.tab_redirect_delay());
        let screen = if session.is_some() {
            Screen::Chat
        } else {
            auth_form.open();
            Screen::Auth
        };

        let mut conversation = ConversationView::new(config.message_view_config());
        conversation.sync(&messages, now);

        Self {
            should_quit: false,
            screen,
            auth_form,
            messages,
            conversation,
            toasts: ToastQueue::new(config.toast_duration()),
            session,
            config,
            api,
            session_store,
            clipboard,
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            needs_redraw: true,
            conversation_scroll: 0,
        }
    }

    /// Name shown in the status line when signed in.
    pub fn signed_in_as(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.display_name())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStore, MemoryClipboard, MockHttpClient};
    use crate::auth::LoginResponse;

    pub const API: &str = "http://test/api";

    pub fn session() -> Session {
        Session::from_login(LoginResponse {
            access: "access".to_string(),
            refresh: "refresh".to_string(),
            user: crate::auth::User {
                full_name: Some("Ada".to_string()),
                ..Default::default()
            },
        })
    }

    /// An app wired to mocks, with handles kept for assertions.
    pub struct Harness {
        pub app: App,
        pub http: Arc<MockHttpClient>,
        pub store: Arc<InMemorySessionStore>,
        pub clipboard: MemoryClipboard,
    }

    pub fn harness(session: Option<Session>, messages: MessageList, now: Instant) -> Harness {
        let http = Arc::new(MockHttpClient::new());
        let store = Arc::new(InMemorySessionStore::new());
        let clipboard = MemoryClipboard::new();
        let config = ClientConfig::new().with_api_base_url(API);
        let api = AuthApiClient::new(config.api_base_url.clone(), http.clone());
        let app = App::new(
            StartupResult {
                config,
                session,
                messages,
            },
            api,
            store.clone(),
            Box::new(clipboard.clone()),
            now,
        );
        Harness {
            app,
            http,
            store,
            clipboard,
        }
    }
}
