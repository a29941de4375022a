//! Conversation rendering.
//!
//! Bot messages go through the markdown renderer using their
//! [`BotMessageView`](crate::view_state::BotMessageView) for the revealed
//! text and code block options. User messages render as plain text.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::markdown::{ends_in_prose, render_markdown_with};
use crate::models::{Message, MessageList, MessageRole};
use crate::view_state::ConversationView;

use super::layout::LayoutContext;
use super::theme::{COLOR_BOT, COLOR_BRAND, COLOR_DIM, COLOR_USER};

/// Appended to the revealed text while a message is typing.
pub const TYPING_INDICATOR: &str = "●";

const NAME_USER: &str = "You";
const NAME_BOT: &str = "Cerina";

fn header_line(role: MessageRole) -> Line<'static> {
    let (name, color) = match role {
        MessageRole::User => (NAME_USER, COLOR_USER),
        MessageRole::Bot => (NAME_BOT, COLOR_BOT),
    };
    Line::from(Span::styled(
        name,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Lines for a bot message at `now`. Empty while the view is idle.
pub fn bot_message_lines(
    message: &Message,
    conversation: &ConversationView,
    now: Instant,
) -> Vec<Line<'static>> {
    let Some(view) = conversation.view(&message.id) else {
        return render_markdown_with(&message.text, &Default::default());
    };

    let mut lines = if view.display_text().is_empty() {
        Vec::new()
    } else {
        render_markdown_with(view.display_text(), &view.code_options(now))
    };

    // The indicator follows prose only, never block chrome.
    if view.show_indicator() {
        let indicator = Span::styled(TYPING_INDICATOR, Style::default().fg(COLOR_BRAND));
        match lines.last_mut() {
            None => lines.push(Line::from(indicator)),
            Some(last)
                if view.display_text().trim().is_empty()
                    || ends_in_prose(view.display_text()) =>
            {
                last.spans.push(indicator)
            }
            Some(_) => {}
        }
    }
    lines
}

fn user_message_lines(message: &Message) -> Vec<Line<'static>> {
    message
        .text
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect()
}

/// All conversation lines, with a header per message.
pub fn conversation_lines(
    messages: &MessageList,
    conversation: &ConversationView,
    now: Instant,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, message) in messages.messages().iter().enumerate() {
        let body = match message.role {
            MessageRole::Bot => bot_message_lines(message, conversation, now),
            MessageRole::User => user_message_lines(message),
        };
        if body.is_empty() {
            continue;
        }
        if idx > 0 {
            for _ in 0..ctx.message_gap() {
                lines.push(Line::from(""));
            }
        }
        lines.push(header_line(message.role));
        lines.extend(body);
    }
    lines
}

/// Visual rows `lines` take when wrapped to `width`.
pub fn estimate_wrapped_line_count(lines: &[Line], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(width).max(1)
        })
        .sum()
}

/// Render the conversation, honoring `scroll` (rows up from the bottom).
pub fn render_conversation(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageList,
    conversation: &ConversationView,
    scroll: u16,
    now: Instant,
) {
    let ctx = LayoutContext::from_rect(area);
    let width = ctx.text_wrap_width();
    let inner = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width,
        ..area
    };

    let lines = conversation_lines(messages, conversation, now, &ctx);
    if lines.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No messages yet.",
            Style::default().fg(COLOR_DIM),
        )))
        .centered();
        frame.render_widget(empty, inner);
        return;
    }

    // scroll=0 shows the newest content; ratatui scrolls from the top.
    let total = estimate_wrapped_line_count(&lines, inner.width as usize);
    let max_scroll = total.saturating_sub(inner.height as usize) as u16;
    let from_top = max_scroll.saturating_sub(scroll.min(max_scroll));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((from_top, 0));
    frame.render_widget(paragraph, inner);
}
