//! User actions that reach outside the app: network requests, the
//! clipboard, the session store and the system browser.
//!
//! Requests run as spawned tasks and report back through
//! [`AppMessage`]s, so the event loop never waits on the network.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::CerinaError;

use super::{App, AppMessage, Screen};

impl App {
    /// Validate the auth form and send it in the background.
    ///
    /// Returns `true` when a request was started.
    pub fn submit_auth_form(&mut self) -> bool {
        let request = match self.auth_form.begin_submit() {
            Ok(request) => request,
            Err(outcome) => {
                debug!("Submit not sent: {:?}", outcome);
                return false;
            }
        };

        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = request.send(&api).await;
            let _ = tx.send(AppMessage::SubmitFinished { request, result });
        });
        true
    }

    /// Resend the verification email in the background.
    pub fn resend_verification(&mut self) -> bool {
        let Some(email) = self.auth_form.begin_resend() else {
            return false;
        };

        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.reverify_email(&email).await;
            let _ = tx.send(AppMessage::ResendFinished(result));
        });
        true
    }

    /// Copy the selected (or newest) code block.
    ///
    /// Clipboard failures become an error toast.
    pub fn copy_code_block(&mut self, now: Instant) {
        match self
            .conversation
            .copy_selected(&self.messages, self.clipboard.as_mut(), now)
        {
            Ok(Some(_)) => {}
            Ok(None) => debug!("No code block to copy"),
            Err(e) => {
                let err = CerinaError::from(e);
                warn!("Copy failed [{}/{}]: {}", err.category(), err.error_code(), err);
                self.toasts.error(err.user_message(), now);
            }
        }
    }

    /// Clear the stored session and return to the auth modal.
    pub async fn logout(&mut self, now: Instant) {
        if let Err(e) = self.session_store.clear().await {
            let err = CerinaError::from(e);
            warn!("Failed to clear session [{}]: {}", err.category(), err);
            self.toasts.error(err.user_message(), now);
        }
        info!("Signed out");
        self.session = None;
        self.screen = Screen::Auth;
        self.auth_form.open();
    }

    /// Open the configured mailbox in the system browser.
    pub fn open_mailbox(&mut self, now: Instant) {
        let url = self.config.mailbox_url.clone();
        match webbrowser::open(&url) {
            Ok(()) => info!("Opened mailbox {}", url),
            Err(e) => {
                warn!("Failed to open browser for {}: {}", url, e);
                self.toasts
                    .error(format!("Could not open a browser. Visit {}", url), now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::*;
    use crate::app::Screen;
    use crate::models::{Message, MessageList, MessageRole};
    use crate::traits::SessionStore;
    use std::time::Instant;

    #[test]
    fn test_invalid_form_spawns_nothing() {
        let mut h = harness(None, MessageList::new(), Instant::now());
        assert!(!h.app.submit_auth_form());
        assert!(!h.app.auth_form.is_loading());
        assert_eq!(h.http.request_count(), 0);
    }

    #[test]
    fn test_resend_requires_unverified_email() {
        let mut h = harness(None, MessageList::new(), Instant::now());
        assert!(!h.app.resend_verification());
    }

    #[test]
    fn test_copy_code_block() {
        let now = Instant::now();
        let list = MessageList::from_messages(vec![Message::new(
            "b1",
            MessageRole::Bot,
            "```rust\nfn main() {}\n```",
        )]);
        let mut h = harness(Some(session()), list, now);
        h.app.copy_code_block(now);
        assert_eq!(h.clipboard.contents().as_deref(), Some("fn main() {}"));
        assert!(h.app.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_opens_form() {
        let now = Instant::now();
        let mut h = harness(Some(session()), MessageList::new(), now);
        h.store.save(&session()).await.unwrap();

        h.app.logout(now).await;
        assert_eq!(h.app.screen, Screen::Auth);
        assert!(h.app.auth_form.is_open());
        assert!(h.app.session.is_none());
        assert!(h.store.current().is_none());
    }
}
