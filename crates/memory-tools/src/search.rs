//! Keyword search tool

use std::sync::Arc;

use async_trait::async_trait;
use memory_core::args::required_str;
use memory_core::tool::SchemaBuilder;
use memory_core::{MessageStore, Result, Tool, ToolResult};
use serde_json::Value;

use crate::json_result;

/// Finds messages containing any of the given keywords
pub struct SearchMessagesTool {
    store: Arc<MessageStore>,
}

impl SearchMessagesTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SearchMessagesTool {
    fn name(&self) -> &str {
        "search_messages"
    }

    fn description(&self) -> &str {
        "Search messages by keywords in content"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object_schema_with_descriptions(vec![(
            "keywords",
            "string",
            "Keywords to search for in message content",
            true,
        )])
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let keywords = required_str(&input, "keywords")?;

        let matching = self.store.search(keywords)?;
        if matching.is_empty() {
            return Ok(ToolResult::success(
                "No messages found matching the keywords",
            ));
        }

        tracing::info!(
            "Found {} messages matching keywords: {}",
            matching.len(),
            keywords
        );
        Ok(json_result(&matching))
    }
}
