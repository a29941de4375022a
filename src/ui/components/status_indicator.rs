//! Status Indicator Component
//!
//! One-line spinner, success and error indicators for buttons and the
//! status line.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::{COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Event-loop ticks per spinner frame (~100ms at a 16ms tick)
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicator<'a> {
    Spinner { message: &'a str, tick: u64 },
    Success(&'a str),
    Error(&'a str),
}

/// Spinner character for an event-loop tick count.
pub fn spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Render an indicator as a pair of spans: icon and message.
pub fn render_status_indicator(indicator: &StatusIndicator) -> Vec<Span<'static>> {
    let (icon, message, style) = match indicator {
        StatusIndicator::Spinner { message, tick } => (
            spinner_char(*tick),
            *message,
            Style::default().fg(COLOR_PENDING),
        ),
        StatusIndicator::Success(message) => ('✓', *message, Style::default().fg(COLOR_SUCCESS)),
        StatusIndicator::Error(message) => ('✗', *message, Style::default().fg(COLOR_ERROR)),
    };
    vec![
        Span::styled(format!("{} ", icon), style.add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), style),
    ]
}
