//! Conversation domain model.
//!
//! This module contains the core Conversation entity that represents a
//! titled, timestamped exchange between one user and the assistant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::ConversationCategory;
use super::message::{Message, MessageRole};

/// Title given to every conversation until one is derived from the first
/// user message.
pub const DEFAULT_TITLE: &str = "New Security Session";

/// Greeting seeded into every newly created conversation.
pub const SEED_GREETING: &str = "OSCTIP INITIALIZED // Welcome to the OSCTIP Security Assistant. \
I'm here to help with threat intelligence, vulnerability assessment, incident response, and \
security analysis. How can I assist you today?";

/// Greeting seeded into a conversation after its history is cleared.
pub const RESET_GREETING: &str =
    "OSCTIP RESET // System cleared and reinitialized. What security topic would you like to explore?";

/// Represents one user's conversation with the assistant.
///
/// A conversation is never empty: it is created with a single seed assistant
/// message, and the message pipeline only ever appends. `updated_at` is
/// bumped on every append, so `updated_at >= created_at` always holds.
///
/// Field names serialize in camelCase to match the persisted blob layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation identifier (UUID format), immutable.
    pub id: String,
    /// Human-readable title; starts as [`DEFAULT_TITLE`] and is derived from
    /// the first user message once exactly two messages exist.
    pub title: String,
    /// Ordered message history, append-only except on explicit clear.
    pub messages: Vec<Message>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-modification timestamp in epoch milliseconds.
    pub updated_at: i64,
    /// Content-derived category, `General` until auto-classified.
    #[serde(default)]
    pub category: ConversationCategory,
}

impl Conversation {
    /// Creates a freshly seeded conversation carrying the initialization
    /// greeting as its single assistant message.
    pub fn seeded(now: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: vec![Message {
                id: Uuid::new_v4().to_string(),
                content: SEED_GREETING.to_string(),
                role: MessageRole::Assistant,
                timestamp: now,
                threat_level: None,
                metadata: None,
            }],
            created_at: now,
            updated_at: now,
            category: ConversationCategory::General,
        }
    }

    /// Resets this conversation back to a single seed assistant message
    /// carrying the reset greeting. Identity and `created_at` are preserved.
    pub fn reset(&mut self, now: i64) {
        self.messages = vec![Message {
            id: Uuid::new_v4().to_string(),
            content: RESET_GREETING.to_string(),
            role: MessageRole::Assistant,
            timestamp: now,
            threat_level: None,
            metadata: None,
        }];
        self.title = DEFAULT_TITLE.to_string();
        self.updated_at = now;
        self.category = ConversationCategory::General;
    }

    /// Returns the content of the most recent user message, if any.
    pub fn latest_user_message(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
    }
}
