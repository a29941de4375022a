//! "Verify your email address" prompt shown after sign-up.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BRAND};

pub const VERIFY_TITLE: &str = "Verify your email address";
pub const VERIFY_BODY: &str =
    "Please check your email and click the verification link to activate your account.";
pub const LABEL_OPEN_EMAIL: &str = "Open Email";

pub fn render_verify_dialog(frame: &mut Frame, area: Rect) {
    let ctx = LayoutContext::from_rect(area);
    let config = DialogFrameConfig::new(VERIFY_TITLE, 6)
        .max_width(56)
        .hint("Enter open · Esc dismiss");
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(VERIFY_BODY, Style::default().fg(COLOR_ACCENT))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", LABEL_OPEN_EMAIL),
            Style::default()
                .fg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true }),
        inner,
    );
}
