//! Transient "Copied!" confirmation for the code block copy action.

use std::time::{Duration, Instant};

/// How long the confirmation stays visible.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub const LABEL_COPY: &str = "Copy Code";
pub const LABEL_COPIED: &str = "Copied!";

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_FEEDBACK)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
        }
    }

    /// Start (or restart) the confirmation window.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// True for `[copied_at, copied_at + duration)`.
    pub fn is_showing(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_showing(now) {
            LABEL_COPIED
        } else {
            LABEL_COPY
        }
    }

    /// Drop an expired confirmation. Returns `true` if it just reverted.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_showing(now) {
            self.copied_at = None;
            return true;
        }
        false
    }
}
