//! In-memory key index and id allocation

use crate::message::message_key;

/// Ordered mirror of the message keys present in the backing store,
/// together with the id counter used to name new messages.
///
/// Both live in one struct so a single lock guards allocation and append.
#[derive(Debug)]
pub struct KeyIndex {
    keys: Vec<String>,
    next_id: u64,
}

impl KeyIndex {
    /// Build an index from the ids of records already stored
    ///
    /// Keys are ordered by ascending id and the counter is seeded with
    /// `max(id) + 1`, or 1 when there are none.
    pub fn from_ids(mut ids: Vec<u64>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        let next_id = ids.last().map_or(1, |max| max + 1);
        Self {
            keys: ids.into_iter().map(message_key).collect(),
            next_id,
        }
    }

    /// Id that the next saved message will receive
    pub fn peek_id(&self) -> u64 {
        self.next_id
    }

    /// Record a successfully stored message and advance the counter
    pub fn commit(&mut self, id: u64) {
        self.keys.push(message_key(id));
        self.next_id = self.next_id.max(id + 1);
    }

    /// Copy of the current key sequence
    pub fn snapshot(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// Replace the key sequence, leaving the counter untouched
    pub fn replace(&mut self, keys: Vec<String>) {
        self.keys = keys;
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_starts_at_one() {
        let index = KeyIndex::from_ids(vec![]);
        assert_eq!(index.peek_id(), 1);
        assert!(index.is_empty());
    }

    #[test]
    fn test_from_ids_orders_and_seeds() {
        let index = KeyIndex::from_ids(vec![5, 2, 9]);
        assert_eq!(index.snapshot(), ["message_2", "message_5", "message_9"]);
        assert_eq!(index.peek_id(), 10);
    }

    #[test]
    fn test_commit_advances_counter() {
        let mut index = KeyIndex::from_ids(vec![]);
        let id = index.peek_id();
        index.commit(id);
        assert_eq!(index.peek_id(), 2);
        assert_eq!(index.snapshot(), ["message_1"]);
    }

    #[test]
    fn test_replace_keeps_counter() {
        let mut index = KeyIndex::from_ids(vec![1, 2, 3]);
        index.replace(Vec::new());
        assert!(index.is_empty());
        // ids are never reused within a process
        assert_eq!(index.peek_id(), 4);
    }
}
