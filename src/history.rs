// Chat history interface - the message list handed to the persistence
// collaborator. The core only appends; storage itself lives outside

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry in the rehearsal chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    /// Unix timestamp in milliseconds
    pub timestamp_ms: i64,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// An accepted question from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// A generated answer.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Persistence collaborator keyed by an opaque message list.
pub trait MessageStore: Send + Sync {
    fn append(&self, message: ChatMessage);
    fn load(&self) -> Vec<ChatMessage>;
    fn clear(&self);
}

/// Non-persistent store holding the message list in memory. The default
/// when no persistence collaborator is wired in.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: parking_lot::Mutex<Vec<ChatMessage>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageStore for MemoryMessageStore {
    fn append(&self, message: ChatMessage) {
        self.messages.lock().push(message);
    }

    fn load(&self) -> Vec<ChatMessage> {
        self.messages.lock().clone()
    }

    fn clear(&self) {
        self.messages.lock().clear();
    }
}
