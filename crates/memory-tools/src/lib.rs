//! memory-tools: Caller-facing message tools
//!
//! Each tool validates its JSON arguments, runs exactly one
//! [`MessageStore`] operation and renders the result as text.

use std::sync::Arc;

use memory_core::{MessageStore, ToolManager, ToolResult};
use serde::Serialize;

pub mod retention;
pub mod retrieve;
pub mod save;
pub mod search;

pub use retention::{DeleteAllMessagesTool, DeleteOlderThanDaysTool, DeleteOlderThanHoursTool};
pub use retrieve::{GetLast3MessagesTool, GetLastMessageTool, GetLastNMessagesTool};
pub use save::SaveMessageTool;
pub use search::SearchMessagesTool;

/// Text returned when the store holds no messages
pub const NO_MESSAGES: &str = "No messages found";

/// Register every message tool with the tool manager
pub fn register_memory_tools(manager: &mut ToolManager, store: Arc<MessageStore>) {
    manager.register(Arc::new(SaveMessageTool::new(store.clone())));
    manager.register(Arc::new(GetLastMessageTool::new(store.clone())));
    manager.register(Arc::new(GetLast3MessagesTool::new(store.clone())));
    manager.register(Arc::new(GetLastNMessagesTool::new(store.clone())));
    manager.register(Arc::new(DeleteOlderThanHoursTool::new(store.clone())));
    manager.register(Arc::new(DeleteOlderThanDaysTool::new(store.clone())));
    manager.register(Arc::new(DeleteAllMessagesTool::new(store.clone())));
    manager.register(Arc::new(SearchMessagesTool::new(store)));
}

/// Serialize a payload as the tool output; failures become an error result
pub(crate) fn json_result<T: Serialize + ?Sized>(value: &T) -> ToolResult {
    match serde_json::to_string(value) {
        Ok(json) => ToolResult::success(json),
        Err(e) => {
            tracing::error!("Error marshaling result: {}", e);
            ToolResult::error(format!("Error marshaling messages: {}", e))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_register_memory_tools() {
        let mut manager = ToolManager::new();
        register_memory_tools(&mut manager, test_support::store());

        assert_eq!(
            manager.tool_names(),
            vec![
                "delete_all_messages",
                "delete_older_than_days",
                "delete_older_than_hours",
                "get_last_3_messages",
                "get_last_message",
                "get_last_n_messages",
                "save_message",
                "search_messages",
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_all_then_read() -> memory_core::Result<()> {
        let mut manager = ToolManager::new();
        register_memory_tools(&mut manager, test_support::store());

        manager
            .execute("save_message", json!({"content": "hello there"}))
            .await?;
        manager
            .execute("save_message", json!({"content": "world"}))
            .await?;

        let deleted = manager.execute("delete_all_messages", json!({})).await?;
        assert_eq!(deleted.output, "Deleted all 2 messages");

        let last = manager.execute("get_last_message", json!({})).await?;
        assert_eq!(last.output, NO_MESSAGES);

        let found = manager
            .execute("search_messages", json!({"keywords": "hello world"}))
            .await?;
        assert_eq!(found.output, "No messages found matching the keywords");
        Ok(())
    }
}
