//! Style constants for markdown rendering

use ratatui::style::{Color, Modifier, Style};

/// Style for code block lines - gray/dim color
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::Gray);

/// Style for inline code and untagged fences - cyan color
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Style for headings - cyan and bold
pub const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for links - blue and underlined
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

pub const STYLE_LINE_NUMBER: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_BLOCK_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Border of the code block targeted by copy
pub const STYLE_SELECTED_BORDER: Style = Style::new().fg(Color::Yellow);

pub const STYLE_BLOCK_LANGUAGE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const STYLE_BLOCK_META: Style = Style::new().fg(Color::DarkGray);

/// Expand/Collapse, Copy Code and the show-more footer
pub const STYLE_BLOCK_ACTION: Style = Style::new().fg(Color::Magenta);

pub const STYLE_TABLE_BORDER: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_TABLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
