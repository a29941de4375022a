//! Responsive Layout System
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers the sizing
//! questions render functions ask: how wide a dialog may be, whether to
//! condense chrome, and how wide the conversation text can wrap.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Conversation text never wraps wider than this
    pub const MAX_READABLE_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// `percentage` of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `min..=max`.
    ///
    /// ```
    /// use cerina::ui::layout::LayoutContext;
    ///
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, clamped to 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: UI elements should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Width conversation text wraps at, after a 2 column margin on each
    /// side.
    pub fn text_wrap_width(&self) -> u16 {
        self.width
            .saturating_sub(4)
            .min(breakpoints::MAX_READABLE_WIDTH)
            .max(1)
    }

    /// Blank rows between conversation messages.
    pub fn message_gap(&self) -> u16 {
        if self.is_short() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_flags() {
        let ctx = LayoutContext::new(120, 40);
        assert!(!ctx.is_compact());
        assert!(!ctx.is_extra_small());

        let ctx = LayoutContext::new(70, 40);
        assert!(ctx.is_narrow());
        assert!(ctx.is_compact());

        let ctx = LayoutContext::new(100, 12);
        assert!(ctx.is_short());
        assert!(ctx.is_extra_small());
    }

    #[test]
    fn test_percent_width_minimum() {
        let ctx = LayoutContext::new(1, 1);
        assert_eq!(ctx.percent_width(10), 1);
    }

    #[test]
    fn test_text_wrap_width() {
        assert_eq!(LayoutContext::new(80, 24).text_wrap_width(), 76);
        assert_eq!(LayoutContext::new(300, 24).text_wrap_width(), 120);
        assert_eq!(LayoutContext::new(2, 24).text_wrap_width(), 1);
    }

    #[test]
    fn test_message_gap() {
        assert_eq!(LayoutContext::new(80, 40).message_gap(), 1);
        assert_eq!(LayoutContext::new(80, 20).message_gap(), 0);
    }
}
