//! UI rendering for the Cerina client
//!
//! - Header with the client name
//! - Chat screen: the conversation, bot messages revealed as they type
//! - Auth screen: the sign-in / sign-up modal or the verify-email prompt
//! - Bottom: status line with toasts and key hints
//!
//! ## Responsive Layout System
//!
//! Render functions size themselves with a [`LayoutContext`] built from the
//! area they draw into: dialogs shrink on narrow terminals, hints condense
//! on compact ones and conversation text wraps at a readable width.

pub mod auth_modal;
pub mod components;
pub mod conversation;
pub mod layout;
pub mod status_line;
pub mod theme;
pub mod verify_dialog;

pub use layout::{breakpoints, LayoutContext};

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use auth_modal::render_auth_modal;
use conversation::render_conversation;
use status_line::render_status_line;
use theme::{COLOR_BRAND, COLOR_DIM};
use verify_dialog::render_verify_dialog;

const CLIENT_NAME: &str = "Cerina";

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            format!(" ◆ {}", CLIENT_NAME),
            Style::default()
                .fg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  v{}", crate::cli::VERSION),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_auth_screen(frame: &mut Frame, area: Rect, app: &App) {
    if app.auth_form.verify_prompt_visible() {
        render_verify_dialog(frame, area);
    } else if app.auth_form.is_open() {
        render_auth_modal(frame, area, &app.auth_form, app.tick_count);
    } else {
        let splash = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to sign in",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .centered();
        let y = area.y + area.height / 2;
        frame.render_widget(splash, Rect::new(area.x, y.saturating_sub(1), area.width, 2));
    }
}

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    match app.screen {
        Screen::Chat => render_conversation(
            frame,
            body,
            &app.messages,
            &app.conversation,
            app.conversation_scroll,
            now,
        ),
        Screen::Auth => render_auth_screen(frame, body, app),
    }
    render_status_line(frame, status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::models::{Message, MessageList, MessageRole};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, now: Instant, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app, now)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_auth_screen_shows_modal() {
        let now = Instant::now();
        let h = harness(None, MessageList::new(), now);
        let text = draw(&h.app, now, 100, 40);
        assert!(text.contains("Cerina"));
        assert!(text.contains("▶ Login"));
        assert!(text.contains("Enter sign in"));
    }

    #[test]
    fn test_chat_screen_renders_code_block() {
        let now = Instant::now();
        let list = MessageList::from_messages(vec![Message::new(
            "b1",
            MessageRole::Bot,
            "Here:\n\n```rust\nfn main() {}\n```",
        )]);
        let h = harness(Some(session()), list, now);
        let text = draw(&h.app, now, 100, 30);
        assert!(text.contains("rust"));
        assert!(text.contains("fn main() {}"));
        assert!(text.contains("[Copy Code]"));
        assert!(text.contains("Ada"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let now = Instant::now();
        let h = harness(None, MessageList::new(), now);
        draw(&h.app, now, 10, 4);
        let h = harness(Some(session()), MessageList::new(), now);
        draw(&h.app, now, 3, 3);
    }
}
