//! Chat shell
//!
//! Message thread, simulated assistant replies, and the sidebar's
//! conversation history grouped by recency.

pub mod conversation;
pub mod responder;
pub mod thread;

pub use conversation::{
    Conversation, ConversationGroup, Recency, format_relative, group_by_recency,
    sample_conversations,
};
pub use responder::Responder;
pub use thread::{Author, ChatThread, GREETING, Message};
