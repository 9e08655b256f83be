//! Durable key-value persistence
//!
//! The message store keeps every record in a string-keyed store. SQLite is
//! the backend used by the server; the [`KvStore`] trait is the seam the
//! message store is written against.

mod sqlite;
mod traits;

pub use sqlite::SqliteKvStore;
pub use traits::{IndexedField, KvStore};
