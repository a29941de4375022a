//! Render state for one bot message: reveal progress, code block
//! expansion, selection and copy confirmation.

use std::time::{Duration, Instant};

use super::copy_feedback::CopyFeedback;
use super::typing_state::{RevealClock, TickOutcome, TypingPhase, TypingState};
use crate::markdown::{extract_code_blocks, CodeBlock, CodeBlockOptions};
use crate::models::Message;
use crate::traits::{ClipboardError, ClipboardProvider};

/// Timing and layout knobs shared by every message view.
#[derive(Debug, Clone, Copy)]
pub struct MessageViewConfig {
    pub typing_interval: Duration,
    pub copy_feedback: Duration,
    pub collapse_threshold: usize,
}

impl Default for MessageViewConfig {
    fn default() -> Self {
        Self {
            typing_interval: super::typing_state::DEFAULT_TYPING_INTERVAL,
            copy_feedback: super::copy_feedback::DEFAULT_COPY_FEEDBACK,
            collapse_threshold: crate::markdown::DEFAULT_COLLAPSE_THRESHOLD,
        }
    }
}

/// Result of advancing a view to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Unchanged,
    /// This many characters were revealed
    Revealed(u32),
    /// The reveal completed; the typing marker should be cleared
    Finished,
}

#[derive(Debug, Clone)]
pub struct BotMessageView {
    typing: TypingState,
    clock: RevealClock,
    expanded: bool,
    copy: CopyFeedback,
    copied_block: Option<usize>,
    selected_block: Option<usize>,
    collapse_threshold: usize,
}

impl Default for BotMessageView {
    fn default() -> Self {
        Self::new(MessageViewConfig::default())
    }
}

impl BotMessageView {
    pub fn new(config: MessageViewConfig) -> Self {
        Self {
            typing: TypingState::new(),
            clock: RevealClock::new(config.typing_interval),
            expanded: false,
            copy: CopyFeedback::new(config.copy_feedback),
            copied_block: None,
            selected_block: None,
            collapse_threshold: config.collapse_threshold,
        }
    }

    /// Follow the message and its typing marker. Returns `true` on restart.
    pub fn sync(&mut self, message: &Message, is_typing: bool, now: Instant) -> bool {
        if !self.typing.sync(message, is_typing) {
            return false;
        }
        if self.typing.phase() == TypingPhase::Typing {
            self.clock.start(now);
        } else {
            self.clock.stop();
        }
        self.clamp_selection();
        true
    }

    /// Restart a running reveal from `now` so time spent off screen is not
    /// caught up.
    pub fn restart_clock(&mut self, now: Instant) {
        if self.typing.phase() == TypingPhase::Typing {
            self.clock.start(now);
        }
    }

    /// Run every tick that is due by `now`.
    pub fn advance(&mut self, now: Instant) -> AdvanceOutcome {
        let due = self.clock.due_ticks(now);
        let mut revealed = 0;
        for _ in 0..due {
            match self.typing.tick() {
                TickOutcome::Revealed => revealed += 1,
                TickOutcome::Finished => {
                    self.clock.stop();
                    if let Some(id) = self.typing.message_id() {
                        tracing::debug!("Typing finished for message {}", id);
                    }
                    return AdvanceOutcome::Finished;
                }
                TickOutcome::Unchanged => break,
            }
        }
        if revealed > 0 {
            AdvanceOutcome::Revealed(revealed)
        } else {
            AdvanceOutcome::Unchanged
        }
    }

    pub fn display_text(&self) -> &str {
        self.typing.display_text()
    }

    pub fn phase(&self) -> TypingPhase {
        self.typing.phase()
    }

    pub fn show_indicator(&self) -> bool {
        self.typing.show_indicator()
    }

    /// Tagged code blocks in the revealed text.
    pub fn visible_blocks(&self) -> Vec<CodeBlock> {
        extract_code_blocks(self.typing.display_text())
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn selected_block(&self) -> Option<usize> {
        self.selected_block
    }

    pub fn select_block(&mut self, index: Option<usize>) {
        self.selected_block = index;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_blocks().len();
        self.selected_block = match self.selected_block {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    /// Copy the selected block (or the last visible one) to the clipboard.
    ///
    /// Returns the copied block index, or `None` when there is nothing to copy.
    pub fn copy_selected(
        &mut self,
        clipboard: &mut dyn ClipboardProvider,
        now: Instant,
    ) -> Result<Option<usize>, ClipboardError> {
        let blocks = self.visible_blocks();
        let Some(index) = self
            .selected_block
            .filter(|i| *i < blocks.len())
            .or_else(|| blocks.len().checked_sub(1))
        else {
            return Ok(None);
        };

        clipboard.set_text(&blocks[index].code)?;
        tracing::info!(
            "Copied {} block ({} lines)",
            blocks[index].language,
            blocks[index].line_count()
        );
        self.copy.mark_copied(now);
        self.copied_block = Some(index);
        Ok(Some(index))
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.copy.label(now)
    }

    /// Expire the copy confirmation. Returns `true` if it just reverted.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.copy.poll(now) {
            self.copied_block = None;
            return true;
        }
        false
    }

    /// Rendering options for the markdown renderer at `now`.
    pub fn code_options(&self, now: Instant) -> CodeBlockOptions {
        CodeBlockOptions {
            collapse_threshold: self.collapse_threshold,
            expanded: self.expanded,
            copied: self.copied_block.filter(|_| self.copy.is_showing(now)),
            selected: self.selected_block,
        }
    }
}
