//! Message thread for one chat window

use chrono::{DateTime, Utc};

pub const GREETING: &str =
    "Hello! I'm CypherX, your AI assistant powered by DeepSeek. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered messages plus whether an assistant reply is still pending.
#[derive(Debug, Clone)]
pub struct ChatThread {
    messages: Vec<Message>,
    next_id: u64,
    awaiting_reply: bool,
}

impl Default for ChatThread {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatThread {
    /// A thread opened by the assistant greeting
    pub fn new() -> Self {
        let mut thread = Self {
            messages: Vec::new(),
            next_id: 1,
            awaiting_reply: false,
        };
        thread.push(Author::Assistant, GREETING.to_string());
        thread
    }

    fn push(&mut self, author: Author, content: String) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            author,
            content,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Appends the user's message, trimmed.
    ///
    /// Returns `None` without changing anything if the input is blank or a
    /// reply is still pending.
    pub fn submit(&mut self, input: &str) -> Option<&Message> {
        let content = input.trim();
        if content.is_empty() || self.awaiting_reply {
            return None;
        }

        self.awaiting_reply = true;
        Some(self.push(Author::User, content.to_string()))
    }

    /// Appends the assistant reply and reopens input.
    pub fn receive_reply(&mut self, content: String) -> &Message {
        self.awaiting_reply = false;
        self.push(Author::Assistant, content)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }
}
