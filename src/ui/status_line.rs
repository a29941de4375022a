//! Bottom status line: the current toast, or key hints for the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen, ToastKind};

use super::components::{render_status_indicator, StatusIndicator};
use super::layout::LayoutContext;
use super::theme::{COLOR_BRAND, COLOR_DIM};

const HINTS_CHAT: &str = "[ ] select block · y copy · e expand · ↑↓ scroll · l logout · Ctrl+C quit";
const HINTS_CHAT_COMPACT: &str = "y copy · e expand · l logout";
const HINTS_AUTH: &str = "Enter sign in · Ctrl+C quit";

fn hints(app: &App, ctx: &LayoutContext) -> &'static str {
    match app.screen {
        Screen::Chat if ctx.is_compact() => HINTS_CHAT_COMPACT,
        Screen::Chat => HINTS_CHAT,
        Screen::Auth => HINTS_AUTH,
    }
}

/// Spans for the left side of the status line.
pub fn status_spans(app: &App, ctx: &LayoutContext) -> Vec<Span<'static>> {
    match app.toasts.current() {
        Some(toast) => {
            let indicator = match toast.kind {
                ToastKind::Success => StatusIndicator::Success(&toast.text),
                ToastKind::Error => StatusIndicator::Error(&toast.text),
            };
            render_status_indicator(&indicator)
        }
        None => vec![Span::styled(hints(app, ctx), Style::default().fg(COLOR_DIM))],
    }
}

pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(frame.area());
    let mut spans = vec![Span::raw(" ")];
    spans.extend(status_spans(app, &ctx));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(name) = app.signed_in_as() {
        if !ctx.is_extra_small() {
            let who = Line::from(Span::styled(
                format!("{} ", name),
                Style::default().fg(COLOR_BRAND),
            ))
            .right_aligned();
            frame.render_widget(Paragraph::new(who), area);
        }
    }
}
