//! View state for bot message rendering.
//!
//! These types hold everything the renderer needs beyond the message itself:
//! reveal progress, code block expansion and selection, and the transient
//! copy confirmation. All timed behavior takes an explicit `Instant`.
//!
//! ## Components
//!
//! - [`TypingState`]: Idle / Typing / Done reveal state machine
//! - [`RevealClock`]: Converts elapsed time into reveal ticks
//! - [`CopyFeedback`]: "Copied!" window after a copy
//! - [`BotMessageView`]: All of the above for one message
//! - [`ConversationView`]: One view per bot message, plus the block cursor

pub mod conversation;
pub mod copy_feedback;
pub mod message_view;
pub mod typing_state;

pub use conversation::{BlockCursor, ConversationView};
pub use copy_feedback::CopyFeedback;
pub use message_view::{AdvanceOutcome, BotMessageView, MessageViewConfig};
pub use typing_state::{RevealClock, TickOutcome, TypingPhase, TypingState};
