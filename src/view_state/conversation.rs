//! Per-message render state for the whole conversation.

use std::collections::HashMap;
use std::time::Instant;

use super::message_view::{AdvanceOutcome, BotMessageView, MessageViewConfig};
use super::TypingPhase;
use crate::models::MessageList;
use crate::traits::{ClipboardError, ClipboardProvider};

/// A code block addressed across the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCursor {
    pub message_id: String,
    pub block: usize,
}

/// Holds one [`BotMessageView`] per bot message, keyed by message id.
#[derive(Debug, Default)]
pub struct ConversationView {
    views: HashMap<String, BotMessageView>,
    config: MessageViewConfig,
    cursor: Option<BlockCursor>,
}

impl ConversationView {
    pub fn new(config: MessageViewConfig) -> Self {
        Self {
            views: HashMap::new(),
            config,
            cursor: None,
        }
    }

    pub fn view(&self, id: &str) -> Option<&BotMessageView> {
        self.views.get(id)
    }

    pub fn cursor(&self) -> Option<&BlockCursor> {
        self.cursor.as_ref()
    }

    /// Create, update and drop views to match the list. Returns `true` if
    /// any view restarted.
    pub fn sync(&mut self, list: &MessageList, now: Instant) -> bool {
        let mut changed = false;
        for message in list.messages().iter().filter(|m| m.is_bot()) {
            let config = self.config;
            let view = self
                .views
                .entry(message.id.clone())
                .or_insert_with(|| BotMessageView::new(config));
            changed |= view.sync(message, list.is_typing(&message.id), now);
        }

        let before = self.views.len();
        self.views
            .retain(|id, _| list.messages().iter().any(|m| &m.id == id));
        changed |= self.views.len() != before;

        if let Some(cursor) = &self.cursor {
            if !self.views.contains_key(&cursor.message_id) {
                self.cursor = None;
            }
        }
        changed
    }

    /// Whether any message is mid-reveal.
    pub fn is_revealing(&self) -> bool {
        self.views
            .values()
            .any(|view| view.phase() == TypingPhase::Typing)
    }

    /// Restart every running reveal clock from `now`.
    pub fn restart_clocks(&mut self, now: Instant) {
        for view in self.views.values_mut() {
            view.restart_clock(now);
        }
    }

    /// Advance reveals and expire copy confirmations.
    ///
    /// A finished reveal clears the list's typing marker. Returns `true` if
    /// anything visible changed.
    pub fn tick(&mut self, list: &mut MessageList, now: Instant) -> bool {
        let mut dirty = false;
        let mut finished = Vec::new();

        for (id, view) in self.views.iter_mut() {
            match view.advance(now) {
                AdvanceOutcome::Unchanged => {}
                AdvanceOutcome::Revealed(_) => dirty = true,
                AdvanceOutcome::Finished => {
                    dirty = true;
                    finished.push(id.clone());
                }
            }
            dirty |= view.poll(now);
        }

        for id in finished {
            if list.is_typing(&id) {
                list.set_typing_message_id(None);
            }
        }
        if dirty {
            self.sync(list, now);
        }
        dirty
    }

    /// Every visible code block in conversation order.
    fn block_positions(&self, list: &MessageList) -> Vec<BlockCursor> {
        list.messages()
            .iter()
            .filter_map(|m| self.views.get(&m.id).map(|v| (m, v)))
            .flat_map(|(m, view)| {
                (0..view.visible_blocks().len()).map(move |block| BlockCursor {
                    message_id: m.id.clone(),
                    block,
                })
            })
            .collect()
    }

    /// Move the block cursor forward (`true`) or backward. Wraps around.
    pub fn select_block(&mut self, list: &MessageList, forward: bool) -> bool {
        let positions = self.block_positions(list);
        if positions.is_empty() {
            return false;
        }
        let current = self
            .cursor
            .as_ref()
            .and_then(|c| positions.iter().position(|p| p == c));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => positions.len() - 1,
            (Some(i), true) => (i + 1) % positions.len(),
            (Some(i), false) => (i + positions.len() - 1) % positions.len(),
        };

        if let Some(old) = self.cursor.take() {
            if let Some(view) = self.views.get_mut(&old.message_id) {
                view.select_block(None);
            }
        }
        let target = positions[next].clone();
        if let Some(view) = self.views.get_mut(&target.message_id) {
            view.select_block(Some(target.block));
        }
        self.cursor = Some(target);
        true
    }

    /// Message targeted by expand/copy: the cursor's, else the newest bot
    /// message with a visible code block.
    fn target_id(&self, list: &MessageList) -> Option<String> {
        if let Some(cursor) = &self.cursor {
            return Some(cursor.message_id.clone());
        }
        list.messages()
            .iter()
            .rev()
            .find(|m| {
                self.views
                    .get(&m.id)
                    .is_some_and(|v| !v.visible_blocks().is_empty())
            })
            .map(|m| m.id.clone())
    }

    pub fn toggle_expanded(&mut self, list: &MessageList) -> bool {
        let Some(id) = self.target_id(list) else {
            return false;
        };
        match self.views.get_mut(&id) {
            Some(view) => {
                view.toggle_expanded();
                true
            }
            None => false,
        }
    }

    pub fn copy_selected(
        &mut self,
        list: &MessageList,
        clipboard: &mut dyn ClipboardProvider,
        now: Instant,
    ) -> Result<Option<usize>, ClipboardError> {
        let Some(id) = self.target_id(list) else {
            return Ok(None);
        };
        match self.views.get_mut(&id) {
            Some(view) => view.copy_selected(clipboard, now),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) {
        self.views.clear();
        self.cursor = None;
    }
}
