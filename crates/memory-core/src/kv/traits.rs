//! Key-value store trait definition

use crate::Result;

/// Record field that a backend may build a secondary index over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexedField {
    Timestamp,
    Role,
    Agent,
}

impl IndexedField {
    /// Name of the field in the stored JSON document
    pub fn json_field(&self) -> &'static str {
        match self {
            Self::Timestamp => "date",
            Self::Role => "role",
            Self::Agent => "agent",
        }
    }

    pub fn all() -> [IndexedField; 3] {
        [Self::Timestamp, Self::Role, Self::Agent]
    }
}

/// Durable string-keyed storage
///
/// Each single-key write is expected to be atomic and crash-safe.
pub trait KvStore: Send + Sync {
    /// Insert or replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Remove `key`, returning whether it existed
    fn delete(&self, key: &str) -> Result<bool>;

    /// List every stored key starting with `prefix`
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Declare a secondary index over a record field
    ///
    /// Indexes only accelerate backend-side queries; callers never rely on
    /// them for correctness.
    fn create_index(&self, _field: IndexedField) -> Result<()> {
        Ok(())
    }
}
