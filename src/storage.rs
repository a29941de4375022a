//! Data directory and transcript files.

use crate::models::{Message, MessageList};
use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::Path;

/// Greeting shown when no transcript is given.
pub const GREETING: &str = "Hi! I'm **Cerina**. Ask me anything.\n\n\
Code answers come with a copy button:\n\n\
```rust\nfn main() {\n    println!(\"Hello from Cerina\");\n}\n```";

/// Create the data directory if it does not exist yet.
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).wrap_err(format!("Failed to create data directory {:?}", dir))?;
    }
    Ok(())
}

/// Load a transcript: a JSON array of messages.
pub fn load_transcript(path: &Path) -> Result<Vec<Message>> {
    let json = fs::read_to_string(path)
        .wrap_err(format!("Failed to read transcript from {:?}", path))?;
    let messages = serde_json::from_str(&json).wrap_err("Failed to deserialize transcript")?;
    Ok(messages)
}

/// The initial conversation: the transcript if given, else the greeting.
/// The newest bot message is marked as typing.
pub fn initial_messages(transcript: Option<&Path>) -> Result<MessageList> {
    let messages = match transcript {
        Some(path) => load_transcript(path)?,
        None => vec![Message::bot(GREETING)],
    };
    let mut list = MessageList::from_messages(messages);
    list.mark_last_bot_typing();
    Ok(list)
}
