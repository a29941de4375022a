//! Sign-in / sign-up modal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::auth::AuthForm;

use super::components::{
    input_field_height, render_dialog_frame, render_input_field, render_status_indicator,
    render_tab_selector, DialogFrameConfig, InputFieldConfig, StatusIndicator,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BRAND, COLOR_DIM, COLOR_ERROR};

pub const LABEL_RESEND: &str = "Resend Verification Email";
pub const LABEL_RESENDING: &str = "Resending...";
const HINT: &str = "Tab next · Ctrl+T switch · Enter submit · Esc close";
const HINT_COMPACT: &str = "Enter submit · Esc close";

/// Rows `text` takes when word-wrapped to `width`.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.width();
        if used == 0 {
            used = len;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            rows += 1;
            used = len;
        }
        // Words longer than the line are broken.
        while used > width {
            rows += 1;
            used -= width;
        }
    }
    rows
}

fn error_rows(form: &AuthForm, width: u16) -> u16 {
    form.error()
        .map_or(0, |error| wrapped_rows(&error.message, width))
}

fn field_configs(form: &AuthForm) -> Vec<InputFieldConfig<'_>> {
    let focused = form.focused_field();
    form.mode()
        .fields()
        .iter()
        .map(|field| {
            InputFieldConfig::new(field.placeholder(), form.values().value(*field))
                .focused(*field == focused)
                .password(field.is_secret())
                .error(form.field_error(*field))
        })
        .collect()
}

/// Content rows: tabs, gap, fields, error, resend, gap, submit.
fn content_height(form: &AuthForm, inner_width: u16) -> u16 {
    let fields: u16 = field_configs(form).iter().map(input_field_height).sum();
    let resend = u16::from(form.can_resend());
    2 + fields + error_rows(form, inner_width) + resend + 2
}

fn submit_line(form: &AuthForm, tick: u64) -> Line<'static> {
    let label = form.mode().submit_label();
    if form.is_loading() {
        return Line::from(render_status_indicator(&StatusIndicator::Spinner {
            message: label,
            tick,
        }))
        .centered();
    }
    Line::from(Span::styled(
        format!("[ {} ]", label),
        Style::default()
            .fg(COLOR_BRAND)
            .add_modifier(Modifier::BOLD),
    ))
    .centered()
}

fn resend_line(form: &AuthForm, tick: u64) -> Line<'static> {
    if form.is_resending() {
        return Line::from(render_status_indicator(&StatusIndicator::Spinner {
            message: LABEL_RESENDING,
            tick,
        }))
        .centered();
    }
    Line::from(vec![
        Span::styled(
            format!("[ {} ]", LABEL_RESEND),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled("  Ctrl+R", Style::default().fg(COLOR_DIM)),
    ])
    .centered()
}

/// Render the modal centered in `area`.
pub fn render_auth_modal(frame: &mut Frame, area: Rect, form: &AuthForm, tick: u64) {
    let ctx = LayoutContext::from_rect(area);
    let hint = if ctx.is_compact() { HINT_COMPACT } else { HINT };
    let sizing = DialogFrameConfig::new(form.mode().title(), 0);
    let inner_width = super::components::dialog_area(area, &ctx, &sizing)
        .width
        .saturating_sub(2);

    let config = DialogFrameConfig::new(form.mode().title(), content_height(form, inner_width))
        .hint(hint);
    let inner = render_dialog_frame(frame, area, &ctx, &config);
    let bottom = inner.y + inner.height;

    let mut y = inner.y;
    let row = |height: u16, y: &mut u16| -> Option<Rect> {
        if *y + height > bottom {
            return None;
        }
        let rect = Rect::new(inner.x, *y, inner.width, height);
        *y += height;
        Some(rect)
    };

    if let Some(rect) = row(1, &mut y) {
        frame.render_widget(Paragraph::new(render_tab_selector(form.mode(), &ctx)), rect);
    }
    row(1, &mut y);

    for config in field_configs(form) {
        if let Some(rect) = row(input_field_height(&config), &mut y) {
            render_input_field(frame, rect, &config);
        }
    }

    if let Some(error) = form.error() {
        if let Some(rect) = row(error_rows(form, inner.width), &mut y) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.message.clone(),
                    Style::default().fg(COLOR_ERROR),
                ))
                .wrap(Wrap { trim: true }),
                rect,
            );
        }
    }

    if form.can_resend() {
        if let Some(rect) = row(1, &mut y) {
            frame.render_widget(Paragraph::new(resend_line(form, tick)), rect);
        }
    }

    row(1, &mut y);
    if let Some(rect) = row(1, &mut y) {
        frame.render_widget(Paragraph::new(submit_line(form, tick)), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::classify::MSG_DUPLICATE_UNVERIFIED;
    use crate::auth::{ApiError, AuthMode, Credentials, SubmitRequest};
    use crate::adapters::mock::InMemorySessionStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn screen_text(form: &AuthForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render_auth_modal(f, f.area(), form, 0))
            .unwrap();
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
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("short", 20), 1);
        assert_eq!(wrapped_rows("one two three", 7), 2);
        assert_eq!(wrapped_rows("abcdefghij", 4), 3);
    }

    #[test]
    fn test_login_modal_contents() {
        let mut form = AuthForm::default();
        form.open();
        let text = screen_text(&form);
        assert!(text.contains("▶ Login"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(!text.contains("Full Name"));
        assert!(text.contains("[ Let's Go ]"));
    }

    #[test]
    fn test_signup_modal_has_full_name() {
        let mut form = AuthForm::default();
        form.open();
        form.set_mode(AuthMode::Signup);
        let text = screen_text(&form);
        assert!(text.contains("Full Name"));
        assert!(text.contains("[ Join Now ]"));
    }

    #[tokio::test]
    async fn test_resend_offered_for_unverified_email() {
        let mut form = AuthForm::default();
        form.open();
        form.set_mode(AuthMode::Signup);
        let request = SubmitRequest {
            mode: AuthMode::Signup,
            credentials: Credentials::new("ada@example.com", "secret1").with_full_name("Ada"),
        };
        let error = ApiError::Status {
            status: 400,
            body: serde_json::json!({"email": ["User already registered but not verified"]}),
        };
        form.finish_submit(&request, Err(error), &InMemorySessionStore::new(), Instant::now())
            .await;

        let text = screen_text(&form);
        assert!(text.contains(LABEL_RESEND));
        // The message wraps inside the dialog, so check a fragment.
        assert!(text.contains(&MSG_DUPLICATE_UNVERIFIED[..20]));
    }
}
