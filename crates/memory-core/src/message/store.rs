//! Message store over a key-value backend

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::kv::{IndexedField, KvStore};
use crate::message::index::KeyIndex;
use crate::message::search::matches_keywords;
use crate::message::types::{key_prefix, parse_message_id};
use crate::message::Message;
use crate::Result;

/// Store for conversational messages
///
/// Records live in the key-value backend; the key index is the only
/// shared mutable state and is guarded by one reader/writer lock.
/// Readers hold the lock just long enough to copy the key sequence.
pub struct MessageStore {
    kv: Arc<dyn KvStore>,
    index: RwLock<KeyIndex>,
}

/// Outcome of applying the retention cutoff to one key
enum Expiry {
    Deleted,
    Kept,
    /// Record no longer exists in the backend
    Gone,
}

impl MessageStore {
    /// Open a store over `kv`, rebuilding the key index from the message
    /// keys already persisted there
    ///
    /// Ids come from the keys themselves, so a record that no longer decodes
    /// still counts toward the counter seed and is never overwritten.
    pub fn open(kv: Arc<dyn KvStore>) -> Result<Self> {
        for field in IndexedField::all() {
            kv.create_index(field)?;
        }

        let mut ids = Vec::new();
        for key in kv.keys_with_prefix(key_prefix())? {
            match parse_message_id(&key) {
                Some(id) => ids.push(id),
                None => warn!("Ignoring key without a numeric id: {}", key),
            }
        }

        let index = KeyIndex::from_ids(ids);
        info!(
            "MessageStore opened with {} messages, next id {}",
            index.len(),
            index.peek_id()
        );

        Ok(Self {
            kv,
            index: RwLock::new(index),
        })
    }

    /// Save a new message and return its id
    ///
    /// Allocation, persistence and index append happen under the write
    /// lock, so concurrent saves never share an id. A failed write leaves
    /// the index and counter unchanged.
    pub fn save(&self, content: &str, role: Option<&str>, agent: Option<&str>) -> Result<u64> {
        let mut index = self.index.write();

        let message = Message::new(index.peek_id(), content, role, agent);
        let value = serde_json::to_string(&message)?;
        self.kv.set(&message.key(), &value)?;
        index.commit(message.id);

        info!(
            "Saved message ID: {}, Role: {}, Agent: {}",
            message.id, message.role, message.agent
        );
        Ok(message.id)
    }

    /// All live messages ordered by ascending timestamp
    ///
    /// Keys deleted between the snapshot and their lookup are skipped.
    /// The sort is stable, so equal timestamps keep insertion order.
    pub fn list_sorted(&self) -> Result<Vec<Message>> {
        let keys = self.index.read().snapshot();

        let mut messages = Vec::with_capacity(keys.len());
        for key in &keys {
            if let Some(message) = Self::resolve(self.kv.as_ref(), key)? {
                messages.push(message);
            }
        }
        messages.sort_by_key(|m| m.timestamp);

        debug!("Listed {} messages", messages.len());
        Ok(messages)
    }

    /// Most recent message, if any
    pub fn last(&self) -> Result<Option<Message>> {
        Ok(self.list_sorted()?.pop())
    }

    /// The `k` most recent messages in chronological order
    ///
    /// Returns everything available when fewer than `k` exist.
    pub fn last_k(&self, k: usize) -> Result<Vec<Message>> {
        let mut messages = self.list_sorted()?;
        let start = messages.len().saturating_sub(k);
        Ok(messages.split_off(start))
    }

    /// Delete every message saved strictly before `cutoff`
    ///
    /// Returns the number of records removed. If the backend fails partway,
    /// keys already deleted leave the index and every unvisited key stays.
    pub fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut index = self.index.write();
        let keys = index.snapshot();

        let mut retained = Vec::with_capacity(keys.len());
        let mut deleted = 0;
        for (pos, key) in keys.iter().enumerate() {
            match self.expire(key, cutoff) {
                Ok(Expiry::Deleted) => deleted += 1,
                Ok(Expiry::Gone) => {}
                Ok(Expiry::Kept) => retained.push(key.clone()),
                Err(e) => {
                    retained.extend_from_slice(&keys[pos..]);
                    index.replace(retained);
                    warn!("Retention stopped after {} deletions: {}", deleted, e);
                    return Err(e);
                }
            }
        }
        index.replace(retained);

        debug!("Deleted {} messages older than {}", deleted, cutoff.to_rfc3339());
        Ok(deleted)
    }

    /// Delete every message
    ///
    /// Returns the number of records removed; an empty store yields 0.
    /// If the backend fails partway, the keys not yet deleted stay indexed.
    pub fn delete_all(&self) -> Result<usize> {
        let mut index = self.index.write();
        let keys = index.snapshot();

        let mut deleted = 0;
        for (pos, key) in keys.iter().enumerate() {
            match self.kv.delete(key) {
                Ok(true) => deleted += 1,
                Ok(false) => {}
                Err(e) => {
                    index.replace(keys[pos..].to_vec());
                    warn!("Delete all stopped after {} deletions: {}", deleted, e);
                    return Err(e);
                }
            }
        }
        index.replace(Vec::new());

        info!("Deleted all {} messages", deleted);
        Ok(deleted)
    }

    /// Messages whose content contains any of the whitespace-separated
    /// `keywords`, case-insensitively, in chronological order
    pub fn search(&self, keywords: &str) -> Result<Vec<Message>> {
        let matching: Vec<Message> = self
            .list_sorted()?
            .into_iter()
            .filter(|m| matches_keywords(&m.content, keywords))
            .collect();

        debug!(
            "Found {} messages matching keywords: {}",
            matching.len(),
            keywords
        );
        Ok(matching)
    }

    /// Number of indexed messages
    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }

    fn expire(&self, key: &str, cutoff: DateTime<Utc>) -> Result<Expiry> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(Expiry::Gone);
        };
        match serde_json::from_str::<Message>(&raw) {
            Ok(message) if message.timestamp < cutoff => {
                if self.kv.delete(key)? {
                    Ok(Expiry::Deleted)
                } else {
                    Ok(Expiry::Gone)
                }
            }
            Ok(_) => Ok(Expiry::Kept),
            Err(e) => {
                warn!("Keeping undecodable record {}: {}", key, e);
                Ok(Expiry::Kept)
            }
        }
    }

    /// Look up and decode one record; missing or undecodable records yield `None`
    fn resolve(kv: &dyn KvStore, key: &str) -> Result<Option<Message>> {
        let Some(raw) = kv.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(message) => Ok(Some(message)),
            Err(e) => {
                warn!("Skipping undecodable record {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Write a fully formed message, bypassing id allocation
    #[cfg(test)]
    fn insert_raw(&self, message: &Message) -> Result<()> {
        let mut index = self.index.write();
        self.kv.set(&message.key(), &serde_json::to_string(message)?)?;
        index.commit(message.id);
        Ok(())
    }
}
