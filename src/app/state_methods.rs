//! State accessor and utility methods for the App.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use super::{App, AppMessage, Screen};

/// Event loop period while nothing reveals faster.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a spinner is on screen and must keep animating.
    pub fn is_animating(&self) -> bool {
        self.screen == Screen::Auth
            && (self.auth_form.is_loading() || self.auth_form.is_resending())
    }

    /// How long the event loop may sleep before the next tick.
    ///
    /// Shortens to the reveal interval while a message types on screen, so
    /// every revealed character gets its own frame.
    pub fn frame_interval(&self) -> Duration {
        if self.screen == Screen::Chat && self.conversation.is_revealing() {
            FRAME_INTERVAL
                .min(self.config.message_view_config().typing_interval)
                .max(Duration::from_millis(1))
        } else {
            FRAME_INTERVAL
        }
    }

    /// Advance every deadline to `now`: pending tab switches, typing
    /// reveals, copy confirmations and toasts.
    ///
    /// The conversation only advances while it is on screen.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let mut dirty = self.auth_form.poll(now);
        if self.screen == Screen::Chat {
            dirty |= self.conversation.tick(&mut self.messages, now);
        }
        dirty |= self.toasts.poll(now);
        dirty |= self.is_animating();

        if dirty {
            self.mark_dirty();
        }
    }

    /// Scroll toward older messages.
    pub fn scroll_up(&mut self, lines: u16) {
        self.conversation_scroll = self.conversation_scroll.saturating_add(lines);
    }

    /// Scroll toward the newest message.
    pub fn scroll_down(&mut self, lines: u16) {
        self.conversation_scroll = self.conversation_scroll.saturating_sub(lines);
    }

    /// Reset scroll state to bottom (newest content)
    pub fn reset_scroll(&mut self) {
        self.conversation_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::models::{Message, MessageList, MessageRole};
    use crate::view_state::TypingPhase;

    fn typing(text: &str) -> MessageList {
        let mut list = MessageList::from_messages(vec![Message::new("b1", MessageRole::Bot, text)]);
        list.mark_last_bot_typing();
        list
    }

    #[test]
    fn test_tick_reveals_typing_message() {
        let t0 = Instant::now();
        let mut h = harness(Some(session()), typing("hey"), t0);
        h.app.needs_redraw = false;

        h.app.tick(t0 + Duration::from_millis(10));
        assert!(h.app.needs_redraw);
        assert_eq!(h.app.conversation.view("b1").unwrap().display_text(), "h");

        h.app.tick(t0 + Duration::from_millis(100));
        assert_eq!(h.app.messages.typing_message_id(), None);
    }

    #[test]
    fn test_idle_tick_is_clean() {
        let t0 = Instant::now();
        let mut h = harness(Some(session()), MessageList::new(), t0);
        h.app.needs_redraw = false;
        h.app.tick(t0 + Duration::from_millis(16));
        assert!(!h.app.needs_redraw);
        assert_eq!(h.app.tick_count, 1);
    }

    #[test]
    fn test_reveal_waits_behind_auth_modal() {
        let t0 = Instant::now();
        let mut h = harness(None, typing("hey"), t0);
        assert_eq!(h.app.screen, Screen::Auth);
        h.app.needs_redraw = false;

        for step in 1..=300 {
            h.app.tick(t0 + Duration::from_millis(16 * step));
        }
        let view = h.app.conversation.view("b1").unwrap();
        assert_eq!(view.phase(), TypingPhase::Typing);
        assert_eq!(view.display_text(), "");
        assert_eq!(h.app.messages.typing_message_id(), Some("b1"));
        assert!(!h.app.needs_redraw);
    }

    #[test]
    fn test_frame_interval_follows_reveal_speed() {
        let t0 = Instant::now();
        let mut h = harness(Some(session()), typing("hey"), t0);
        assert_eq!(h.app.frame_interval(), Duration::from_millis(10));

        h.app.tick(t0 + Duration::from_millis(40));
        assert_eq!(h.app.messages.typing_message_id(), None);
        assert_eq!(h.app.frame_interval(), FRAME_INTERVAL);
    }

    #[test]
    fn test_frame_interval_ignores_hidden_reveal() {
        let h = harness(None, typing("hey"), Instant::now());
        assert_eq!(h.app.frame_interval(), FRAME_INTERVAL);
    }

    #[test]
    fn test_scroll_saturates_at_bottom() {
        let mut h = harness(Some(session()), MessageList::new(), Instant::now());
        h.app.scroll_up(3);
        h.app.scroll_down(5);
        assert_eq!(h.app.conversation_scroll, 0);
    }
}
