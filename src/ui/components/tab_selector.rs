//! Tab Selector Component
//!
//! The Login / Sign Up switch at the top of the auth modal. The selected
//! tab carries a `▶` marker.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::auth::AuthMode;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BRAND, COLOR_DIM};

const TABS: [AuthMode; 2] = [AuthMode::Login, AuthMode::Signup];

/// Render the tab row with `selected` highlighted.
pub fn render_tab_selector(selected: AuthMode, ctx: &LayoutContext) -> Line<'static> {
    let spacing = if ctx.is_extra_small() { "  " } else { "    " };
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, mode) in TABS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(spacing));
        }
        if *mode == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                mode.title(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(mode.title(), Style::default().fg(COLOR_DIM)));
        }
    }
    Line::from(spans)
}
