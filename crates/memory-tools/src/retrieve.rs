//! Retrieval tools

use std::sync::Arc;

use async_trait::async_trait;
use memory_core::args::parse_non_negative;
use memory_core::tool::SchemaBuilder;
use memory_core::{MessageStore, Result, Tool, ToolResult};
use serde_json::Value;

use crate::{json_result, NO_MESSAGES};

/// Shared tail retrieval: the last `k` messages as a JSON array, or
/// "No messages found" when `k > 0` and the store holds none
fn last_k_result(store: &MessageStore, k: usize) -> Result<ToolResult> {
    let messages = store.last_k(k)?;
    if messages.is_empty() && k > 0 {
        return Ok(ToolResult::success(NO_MESSAGES));
    }
    Ok(json_result(&messages))
}

/// Returns the most recent message
pub struct GetLastMessageTool {
    store: Arc<MessageStore>,
}

impl GetLastMessageTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetLastMessageTool {
    fn name(&self) -> &str {
        "get_last_message"
    }

    fn description(&self) -> &str {
        "Get the last message"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::empty_object()
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult> {
        match self.store.last()? {
            Some(message) => Ok(json_result(&message)),
            None => Ok(ToolResult::success(NO_MESSAGES)),
        }
    }
}

/// Returns the three most recent messages
pub struct GetLast3MessagesTool {
    store: Arc<MessageStore>,
}

impl GetLast3MessagesTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetLast3MessagesTool {
    fn name(&self) -> &str {
        "get_last_3_messages"
    }

    fn description(&self) -> &str {
        "Get the last 3 messages"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::empty_object()
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult> {
        last_k_result(&self.store, 3)
    }
}

/// Returns the `n` most recent messages
pub struct GetLastNMessagesTool {
    store: Arc<MessageStore>,
}

impl GetLastNMessagesTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetLastNMessagesTool {
    fn name(&self) -> &str {
        "get_last_n_messages"
    }

    fn description(&self) -> &str {
        "Get the last N messages"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object_schema_with_descriptions(vec![(
            "n",
            "integer",
            "Number of messages to retrieve",
            true,
        )])
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let n = parse_non_negative(&input, "n")?;
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        last_k_result(&self.store, n)
    }
}
