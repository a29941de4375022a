//! Color theme constants for the Cerina UI
//!
//! Defines the dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Brand color for the header and the typing indicator
pub const COLOR_BRAND: Color = Color::Rgb(167, 139, 250);

/// Dim text for hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input boxes
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Spinner and in-flight actions
pub const COLOR_PENDING: Color = Color::Gray;

// ============================================================================
// Conversation
// ============================================================================

/// Prefix of user messages
pub const COLOR_USER: Color = Color::Cyan;

/// Prefix of bot messages
pub const COLOR_BOT: Color = Color::Rgb(167, 139, 250);
