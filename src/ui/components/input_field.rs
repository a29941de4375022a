//! Input Field Component
//!
//! A single-line text box with focus handling, password masking and an
//! inline validation message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

const MASK: char = '\u{2022}';
const CURSOR: &str = "\u{2588}";

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub value: &'a str,
    pub focused: bool,
    /// Mask the value with bullets
    pub is_password: bool,
    /// Validation message shown under the box
    pub error: Option<&'a str>,
    /// Shown in the top border
    pub label: &'a str,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            value,
            focused: false,
            is_password: false,
            error: None,
            label,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

/// Rows needed: 3 for the box plus 1 for an error.
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        4
    } else {
        3
    }
}

/// Text shown inside the box, scrolled so the end stays visible.
fn display_value(config: &InputFieldConfig, width: usize) -> String {
    let shown: String = if config.is_password {
        std::iter::repeat(MASK).take(config.value.chars().count()).collect()
    } else {
        config.value.to_string()
    };
    if shown.width() < width {
        return shown;
    }
    // Keep the tail that fits, leaving a column for the cursor.
    let mut tail = Vec::new();
    let mut used = 0;
    for c in shown.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w >= width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

/// Render the field into `area` and return the rows it used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let border_color = if config.focused { COLOR_ACCENT } else { COLOR_BORDER };
    let border_color = if config.error.is_some() { COLOR_ERROR } else { border_color };

    let box_area = Rect {
        height: 3.min(area.height),
        ..area
    };
    let label_color = if config.focused { COLOR_ACCENT } else { COLOR_DIM };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(label_color),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    let inner_width = block.inner(box_area).width as usize;

    let mut spans = vec![Span::styled(
        display_value(config, inner_width),
        Style::default().fg(COLOR_ACCENT),
    )];
    if config.focused {
        spans.push(Span::styled(
            CURSOR,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);

    let mut used = box_area.height;
    if let Some(error) = config.error {
        if area.height > used {
            let error_area = Rect {
                y: area.y + used,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" \u{2717} {}", error),
                    Style::default().fg(COLOR_ERROR),
                )),
                error_area,
            );
            used += 1;
        }
    }
    used
}
