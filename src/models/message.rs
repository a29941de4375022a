use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string};

/// Who sent a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[serde(alias = "assistant")]
    Bot,
}

/// A chat message as owned by the message list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub text: String,
    #[serde(alias = "sender")]
    pub role: MessageRole,
}

impl Message {
    pub fn new(id: impl Into<String>, role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            role,
        }
    }

    /// A bot message with a fresh random id.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), MessageRole::Bot, text)
    }

    /// A user message with a fresh random id.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), MessageRole::User, text)
    }

    pub fn is_bot(&self) -> bool {
        self.role == MessageRole::Bot
    }
}

/// The conversation plus the "currently typing" marker.
///
/// Only one message can be typing at a time. The renderer reads the marker
/// and asks the list to clear it once the reveal finishes.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    messages: Vec<Message>,
    typing_message_id: Option<String>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            typing_message_id: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a bot message and mark it as typing.
    pub fn push_typing(&mut self, message: Message) {
        self.typing_message_id = Some(message.id.clone());
        self.messages.push(message);
    }

    pub fn typing_message_id(&self) -> Option<&str> {
        self.typing_message_id.as_deref()
    }

    pub fn set_typing_message_id(&mut self, id: Option<String>) {
        self.typing_message_id = id;
    }

    /// Mark the newest bot message as typing.
    pub fn mark_last_bot_typing(&mut self) {
        self.typing_message_id = self
            .messages
            .iter()
            .rev()
            .find(|m| m.is_bot())
            .map(|m| m.id.clone());
    }

    pub fn is_typing(&self, id: &str) -> bool {
        self.typing_message_id.as_deref() == Some(id)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.typing_message_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_id_and_assistant_alias() {
        let message: Message =
            serde_json::from_str(r#"{"id": 42, "text": "hi", "role": "assistant"}"#).unwrap();
        assert_eq!(message.id, "42");
        assert_eq!(message.role, MessageRole::Bot);
    }

    #[test]
    fn test_deserialize_null_text() {
        let message: Message =
            serde_json::from_str(r#"{"id": "m1", "text": null, "sender": "user"}"#).unwrap();
        assert_eq!(message.text, "");
        assert_eq!(message.role, MessageRole::User);
    }

    #[test]
    fn test_push_typing_sets_marker() {
        let mut list = MessageList::new();
        list.push(Message::user("hello"));
        let bot = Message::bot("hi there");
        let id = bot.id.clone();
        list.push_typing(bot);

        assert!(list.is_typing(&id));
        list.set_typing_message_id(None);
        assert!(!list.is_typing(&id));
    }

    #[test]
    fn test_mark_last_bot_typing() {
        let mut list = MessageList::from_messages(vec![
            Message::new("1", MessageRole::Bot, "first"),
            Message::new("2", MessageRole::User, "question"),
            Message::new("3", MessageRole::Bot, "answer"),
            Message::new("4", MessageRole::User, "thanks"),
        ]);
        list.mark_last_bot_typing();
        assert_eq!(list.typing_message_id(), Some("3"));
    }
}
