//! Typewriter reveal state for a single message.
//!
//! A message moves through `Idle -> Typing -> Done`. While typing, each
//! [`TypingState::tick`] reveals exactly one character; the tick after the
//! last character moves to `Done` and reports [`TickOutcome::Finished`] so
//! the owner can clear the typing marker. A message that is not marked as
//! typing is shown in full straight away.
//!
//! [`RevealClock`] converts wall-clock time into a number of due ticks at a
//! fixed interval, so the event loop can run at its own frame rate.

use std::time::{Duration, Instant};

use crate::models::Message;

/// Default interval between revealed characters.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(10);

/// Reveal phase of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingPhase {
    /// Nothing to show (empty message, or not yet synced)
    #[default]
    Idle,
    /// Revealing one character per tick
    Typing,
    /// Full text is shown
    Done,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not typing; nothing changed
    Unchanged,
    /// One more character is visible
    Revealed,
    /// The reveal completed on this tick
    Finished,
}

/// Reveal progress of one message.
#[derive(Debug, Clone, Default)]
pub struct TypingState {
    message_id: Option<String>,
    source: String,
    /// Byte offset of the revealed prefix (always on a char boundary)
    revealed: usize,
    revealed_chars: usize,
    phase: TypingPhase,
    marked_typing: bool,
}

impl TypingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the state in line with the message and its typing marker.
    ///
    /// Any change of id, text or marker restarts the reveal from the new
    /// inputs. Returns `true` if the state was reset.
    pub fn sync(&mut self, message: &Message, is_typing: bool) -> bool {
        let unchanged = self.message_id.as_deref() == Some(message.id.as_str())
            && self.source == message.text
            && self.marked_typing == is_typing;
        if unchanged {
            return false;
        }

        self.message_id = Some(message.id.clone());
        self.source = message.text.clone();
        self.marked_typing = is_typing;

        if self.source.is_empty() {
            self.phase = TypingPhase::Idle;
            self.revealed = 0;
            self.revealed_chars = 0;
        } else if is_typing {
            tracing::debug!("Typing started for message {}", message.id);
            self.phase = TypingPhase::Typing;
            self.revealed = 0;
            self.revealed_chars = 0;
        } else {
            self.phase = TypingPhase::Done;
            self.revealed = self.source.len();
            self.revealed_chars = self.source.chars().count();
        }
        true
    }

    /// Advance the reveal by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TypingPhase::Typing {
            return TickOutcome::Unchanged;
        }
        match self.source[self.revealed..].chars().next() {
            Some(c) => {
                self.revealed += c.len_utf8();
                self.revealed_chars += 1;
                TickOutcome::Revealed
            }
            None => {
                self.phase = TypingPhase::Done;
                TickOutcome::Finished
            }
        }
    }

    /// The currently visible prefix of the message.
    pub fn display_text(&self) -> &str {
        &self.source[..self.revealed]
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// Whether the typing indicator should follow the text.
    pub fn show_indicator(&self) -> bool {
        self.phase == TypingPhase::Typing
    }
}

/// Fixed-interval tick source driven by the caller's clock.
#[derive(Debug, Clone)]
pub struct RevealClock {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for RevealClock {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_INTERVAL)
    }
}

impl RevealClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Number of whole intervals elapsed since the last call.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(last);
        let ticks = (elapsed.as_nanos() / self.interval.as_nanos()) as u32;
        if ticks > 0 {
            self.last = Some(last + self.interval * ticks);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;

    fn message(text: &str) -> Message {
        Message::new("m1", MessageRole::Bot, text)
    }

    #[test]
    fn test_not_typing_renders_fully() {
        let mut state = TypingState::new();
        assert!(state.sync(&message("Hello"), false));
        assert_eq!(state.phase(), TypingPhase::Done);
        assert_eq!(state.display_text(), "Hello");
        assert_eq!(state.tick(), TickOutcome::Unchanged);
    }

    #[test]
    fn test_typing_reveals_one_char_per_tick() {
        let mut state = TypingState::new();
        state.sync(&message("abc"), true);
        assert_eq!(state.phase(), TypingPhase::Typing);
        assert_eq!(state.display_text(), "");

        assert_eq!(state.tick(), TickOutcome::Revealed);
        assert_eq!(state.display_text(), "a");
        assert_eq!(state.tick(), TickOutcome::Revealed);
        assert_eq!(state.tick(), TickOutcome::Revealed);
        assert_eq!(state.display_text(), "abc");
        assert_eq!(state.phase(), TypingPhase::Typing);

        assert_eq!(state.tick(), TickOutcome::Finished);
        assert_eq!(state.phase(), TypingPhase::Done);
        assert_eq!(state.tick(), TickOutcome::Unchanged);
    }

    #[test]
    fn test_reveal_count_equals_char_count() {
        let text = "héllo, 世界 👋";
        let mut state = TypingState::new();
        state.sync(&message(text), true);

        let mut renders = 0;
        loop {
            match state.tick() {
                TickOutcome::Revealed => renders += 1,
                TickOutcome::Finished => break,
                TickOutcome::Unchanged => panic!("typing stalled"),
            }
        }
        assert_eq!(renders, text.chars().count());
        assert_eq!(state.display_text(), text);
    }

    #[test]
    fn test_text_change_restarts_reveal() {
        let mut state = TypingState::new();
        state.sync(&message("first"), true);
        state.tick();
        state.tick();

        assert!(state.sync(&message("second"), true));
        assert_eq!(state.display_text(), "");
        assert_eq!(state.revealed_chars(), 0);
        assert!(!state.sync(&message("second"), true));
    }

    #[test]
    fn test_clearing_marker_shows_full_text() {
        let mut state = TypingState::new();
        state.sync(&message("abcdef"), true);
        state.tick();

        assert!(state.sync(&message("abcdef"), false));
        assert_eq!(state.phase(), TypingPhase::Done);
        assert_eq!(state.display_text(), "abcdef");
    }

    #[test]
    fn test_empty_message_stays_idle() {
        let mut state = TypingState::new();
        state.sync(&message(""), true);
        assert_eq!(state.phase(), TypingPhase::Idle);
        assert!(!state.show_indicator());
        assert_eq!(state.tick(), TickOutcome::Unchanged);
    }

    #[test]
    fn test_reveal_clock_counts_whole_intervals() {
        let t0 = Instant::now();
        let mut clock = RevealClock::new(Duration::from_millis(10));
        assert_eq!(clock.due_ticks(t0), 0);

        clock.start(t0);
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(9)), 0);
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(25)), 2);
        // Remainder carries over: 25ms -> 30ms is one more tick.
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(30)), 1);

        clock.stop();
        assert_eq!(clock.due_ticks(t0 + Duration::from_secs(1)), 0);
    }
}
