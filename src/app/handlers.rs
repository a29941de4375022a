//! Message handling for the App.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::auth::SubmitOutcome;

use super::{App, AppMessage, Screen};

impl App {
    /// Apply the result of a background task.
    /// All message handlers mark the app as dirty since they update visible state.
    pub async fn handle_message(&mut self, msg: AppMessage, now: Instant) {
        self.mark_dirty();
        match msg {
            AppMessage::SubmitFinished { request, result } => {
                let store = Arc::clone(&self.session_store);
                let outcome = self
                    .auth_form
                    .finish_submit(&request, result, store.as_ref(), now)
                    .await;
                match outcome {
                    SubmitOutcome::LoggedIn(session) => {
                        info!("Signed in as {}", session.user.display_name());
                        self.session = Some(session);
                        self.screen = Screen::Chat;
                        self.conversation_scroll = 0;
                        self.conversation.restart_clocks(now);
                    }
                    SubmitOutcome::Registered => {
                        // The verify prompt replaces the modal on the auth screen.
                        self.screen = Screen::Auth;
                    }
                    SubmitOutcome::Failed(_)
                    | SubmitOutcome::Blocked(_)
                    | SubmitOutcome::Busy => {}
                }
            }
            AppMessage::ResendFinished(result) => {
                self.auth_form.finish_resend(result);
            }
        }
        self.drain_notices(now);
    }

    /// Move form notices into the toast queue.
    pub(crate) fn drain_notices(&mut self, now: Instant) {
        for notice in self.auth_form.take_notices() {
            self.toasts.push(notice, now);
        }
    }
}
