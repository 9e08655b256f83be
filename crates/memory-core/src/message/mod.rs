//! Message memory
//!
//! Stores short-lived conversational messages on top of a [`KvStore`]
//! and keeps an in-memory chronological index of the live records.
//!
//! [`KvStore`]: crate::kv::KvStore

mod index;
mod search;
mod store;
mod types;

pub use index::KeyIndex;
pub use search::matches_keywords;
pub use store::MessageStore;
pub use types::{DEFAULT_AGENT, DEFAULT_ROLE, Message, message_key};
