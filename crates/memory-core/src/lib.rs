//! memory-core: Message memory store for mcp-memory-server
//!
//! Provides the message model, the in-memory key index with id allocation,
//! the durable key-value persistence layer, argument decoding and the tool
//! system that exposes store operations to callers.

pub mod args;
pub mod config;
pub mod error;
pub mod kv;
pub mod message;
pub mod tool;

pub use config::{Config, MemoryConfig, ServerConfig};
pub use error::{Error, Result};
pub use kv::{IndexedField, KvStore, SqliteKvStore};
pub use message::{Message, MessageStore};
pub use tool::{Tool, ToolDefinition, ToolManager, ToolResult};
