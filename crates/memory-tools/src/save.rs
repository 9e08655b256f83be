//! Save tool

use std::sync::Arc;

use async_trait::async_trait;
use memory_core::args::{optional_str, required_str};
use memory_core::tool::SchemaBuilder;
use memory_core::{Error, MessageStore, Result, Tool, ToolResult};
use serde_json::Value;

/// Stores a new message and reports its id
pub struct SaveMessageTool {
    store: Arc<MessageStore>,
}

impl SaveMessageTool {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SaveMessageTool {
    fn name(&self) -> &str {
        "save_message"
    }

    fn description(&self) -> &str {
        "Save a message to memory"
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object_schema_with_descriptions(vec![
            ("content", "string", "Content of the message", true),
            (
                "role",
                "string",
                "Role of the message creator (assistant, user, system). Defaults to 'assistant' if not provided",
                false,
            ),
            (
                "agent",
                "string",
                "Name of the agent. Defaults to 'unknown' if not provided",
                false,
            ),
        ])
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let content = required_str(&input, "content")?;
        if content.is_empty() {
            return Err(Error::InvalidArgument(
                "parameter 'content' must not be empty".to_string(),
            ));
        }
        let role = optional_str(&input, "role")?;
        let agent = optional_str(&input, "agent")?;

        let id = self.store.save(content, role, agent)?;
        Ok(ToolResult::success(format!("Message saved with ID: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_reports_id() -> Result<()> {
        let store = store();
        let tool = SaveMessageTool::new(store.clone());

        let result = tool
            .execute(json!({"content": "ping", "role": "user", "agent": "bot-1"}))
            .await?;
        assert_eq!(result, ToolResult::success("Message saved with ID: 1"));

        let result = tool.execute(json!({"content": "pong"})).await?;
        assert_eq!(result.output, "Message saved with ID: 2");

        let last = store.last()?.unwrap();
        assert_eq!(last.role, "assistant");
        assert_eq!(last.agent, "unknown");
        Ok(())
    }

    #[tokio::test]
    async fn test_save_rejects_bad_content() {
        let tool = SaveMessageTool::new(store());

        for input in [json!({}), json!({"content": ""}), json!({"content": 42})] {
            let err = tool.execute(input).await.unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[tokio::test]
    async fn test_save_rejects_non_string_role() {
        let store = store();
        let tool = SaveMessageTool::new(store.clone());

        let err = tool
            .execute(json!({"content": "hi", "role": 1}))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }
}
