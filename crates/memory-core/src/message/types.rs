//! Message type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role recorded when the caller does not supply one
pub const DEFAULT_ROLE: &str = "assistant";

/// Agent recorded when the caller does not supply one
pub const DEFAULT_AGENT: &str = "unknown";

const KEY_PREFIX: &str = "message_";

/// A remembered conversational turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Identifier, unique for the lifetime of the store
    pub id: u64,
    /// When the message was saved
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    /// The remembered text
    pub content: String,
    /// Who produced the turn (assistant, user, system, ...)
    pub role: String,
    /// Name of the agent that produced the turn
    pub agent: String,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(
        id: u64,
        content: impl Into<String>,
        role: Option<&str>,
        agent: Option<&str>,
    ) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            content: content.into(),
            role: role.unwrap_or(DEFAULT_ROLE).to_string(),
            agent: agent.unwrap_or(DEFAULT_AGENT).to_string(),
        }
    }

    /// Override the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Storage key of this message
    pub fn key(&self) -> String {
        message_key(self.id)
    }
}

/// Storage key for the message with the given id
pub fn message_key(id: u64) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Id encoded in a message key
///
/// Only canonical keys as produced by [`message_key`] are accepted.
pub(crate) fn parse_message_id(key: &str) -> Option<u64> {
    let id = key.strip_prefix(KEY_PREFIX)?.parse::<u64>().ok()?;
    (message_key(id) == key).then_some(id)
}

/// Prefix shared by every message key
pub(crate) fn key_prefix() -> &'static str {
    KEY_PREFIX
}
