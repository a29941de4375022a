//! Transient status-line notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::auth::Notice;

/// Default lifetime of a toast.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Toasts in arrival order. The oldest live one is shown.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        let (kind, text) = match notice {
            Notice::Success(text) => (ToastKind::Success, text),
            Notice::Error(text) => (ToastKind::Error, text),
        };
        self.toasts.push_back(Toast {
            kind,
            text,
            expires_at: now + self.duration,
        });
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.push(Notice::Success(text.into()), now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.push(Notice::Error(text.into()), now);
    }

    /// Drop expired toasts. Returns `true` if any were removed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| now < t.expires_at);
        self.toasts.len() != before
    }

    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
