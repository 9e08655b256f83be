//! Tool system
//!
//! Every caller-facing operation is a [`Tool`]: a named, schema-described
//! handler taking JSON arguments. The [`ToolManager`] registry is what the
//! transport layer lists and dispatches against.

pub mod definition;
pub mod manager;
pub mod traits;

pub use definition::{SchemaBuilder, ToolDefinition};
pub use manager::ToolManager;
pub use traits::{Tool, ToolResult};
