//! Keyboard and paste handling.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

/// Lines moved per Up/Down press in the conversation.
const SCROLL_STEP: u16 = 1;
/// Lines moved per PageUp/PageDown press.
const PAGE_STEP: u16 = 10;

impl App {
    /// Dispatch a key press.
    pub async fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Auth => self.handle_auth_key(key, now),
            Screen::Chat => self.handle_chat_key(key, now).await,
        }
        self.drain_notices(now);
    }

    fn handle_auth_key(&mut self, key: KeyEvent, now: Instant) {
        if self.auth_form.verify_prompt_visible() {
            match key.code {
                KeyCode::Esc => self.auth_form.dismiss_verify_prompt(),
                KeyCode::Enter | KeyCode::Char('o') => self.open_mailbox(now),
                _ => {}
            }
            return;
        }

        if !self.auth_form.is_open() {
            if key.code == KeyCode::Enter {
                self.auth_form.open();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('t') if ctrl => self.auth_form.toggle_mode(),
            KeyCode::Char('r') if ctrl => {
                if self.auth_form.can_resend() {
                    self.resend_verification();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.auth_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.auth_form.focus_prev(),
            KeyCode::Enter => {
                self.submit_auth_form();
            }
            KeyCode::Esc => self.auth_form.close(),
            KeyCode::Backspace => self.auth_form.backspace(),
            KeyCode::Char(c) if !ctrl => self.auth_form.insert_char(c),
            _ => {}
        }
    }

    async fn handle_chat_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('y') => self.copy_code_block(now),
            KeyCode::Char('e') => {
                self.conversation.toggle_expanded(&self.messages);
            }
            KeyCode::Char(']') => {
                self.conversation.select_block(&self.messages, true);
            }
            KeyCode::Char('[') => {
                self.conversation.select_block(&self.messages, false);
            }
            KeyCode::Char('l') => self.logout(now).await,
            KeyCode::Up => self.scroll_up(SCROLL_STEP),
            KeyCode::Down => self.scroll_down(SCROLL_STEP),
            KeyCode::PageUp => self.scroll_up(PAGE_STEP),
            KeyCode::PageDown => self.scroll_down(PAGE_STEP),
            KeyCode::End => self.reset_scroll(),
            _ => {}
        }
    }

    /// Insert pasted text into the focused auth field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Auth || !self.auth_form.is_open() {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.auth_form.insert_char(c);
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::auth::{AuthMode, Field};
    use crate::models::{Message, MessageList, MessageRole};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let now = Instant::now();
        let mut h = harness(None, MessageList::new(), now);
        h.app.handle_key_event(ctrl('c'), now).await;
        assert!(h.app.should_quit);
    }

    #[tokio::test]
    async fn test_typing_into_form() {
        let now = Instant::now();
        let mut h = harness(None, MessageList::new(), now);
        for c in "ada@example.com".chars() {
            h.app.handle_key_event(press(KeyCode::Char(c)), now).await;
        }
        h.app.handle_key_event(press(KeyCode::Tab), now).await;
        h.app.handle_paste("pw\n123");

        assert_eq!(h.app.auth_form.values().email, "ada@example.com");
        assert_eq!(h.app.auth_form.focused_field(), Field::Password);
        assert_eq!(h.app.auth_form.values().password, "pw123");
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_tab() {
        let now = Instant::now();
        let mut h = harness(None, MessageList::new(), now);
        h.app.handle_key_event(ctrl('t'), now).await;
        assert_eq!(h.app.auth_form.mode(), AuthMode::Signup);
    }

    #[tokio::test]
    async fn test_esc_closes_and_enter_reopens() {
        let now = Instant::now();
        let mut h = harness(None, MessageList::new(), now);
        h.app.handle_key_event(press(KeyCode::Esc), now).await;
        assert!(!h.app.auth_form.is_open());
        h.app.handle_key_event(press(KeyCode::Enter), now).await;
        assert!(h.app.auth_form.is_open());
    }

    #[tokio::test]
    async fn test_chat_keys_select_and_expand() {
        let now = Instant::now();
        let list = MessageList::from_messages(vec![Message::new(
            "b1",
            MessageRole::Bot,
            "```sh\nls\n```",
        )]);
        let mut h = harness(Some(session()), list, now);

        h.app.handle_key_event(press(KeyCode::Char(']')), now).await;
        assert_eq!(h.app.conversation.cursor().unwrap().message_id, "b1");
        h.app.handle_key_event(press(KeyCode::Char('e')), now).await;
        assert!(h.app.conversation.view("b1").unwrap().is_expanded());
        h.app.handle_key_event(press(KeyCode::Char('y')), now).await;
        assert_eq!(h.clipboard.contents().as_deref(), Some("ls"));
    }

    #[tokio::test]
    async fn test_chat_keys_ignored_on_auth_screen() {
        let now = Instant::now();
        let mut h = harness(None, MessageList::new(), now);
        h.app.handle_key_event(press(KeyCode::Char('l')), now).await;
        assert_eq!(h.app.auth_form.values().email, "l");
        assert_eq!(h.app.screen, Screen::Auth);
    }
}
