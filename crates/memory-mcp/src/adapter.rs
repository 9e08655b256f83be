//! Conversions between memory-core tool types and MCP model types

use std::sync::Arc;

use memory_core::{Error, ToolDefinition, ToolResult};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, Tool as McpTool};
use serde_json::Value as JsonValue;

/// Describe a registered tool in MCP terms
///
/// Schemas that are not JSON objects are published as an empty object.
pub fn to_mcp_tool(definition: ToolDefinition) -> McpTool {
    let schema = match definition.input_schema {
        JsonValue::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    McpTool::new(definition.name, definition.description, Arc::new(schema))
}

/// Wrap a tool's output as a single text content block
pub fn to_call_result(result: ToolResult) -> CallToolResult {
    let content = vec![Content::text(result.output)];
    if result.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Map a failed call to a protocol error
///
/// Caller mistakes become `invalid_params`; everything else is an
/// internal error.
pub fn to_mcp_error(error: Error) -> McpError {
    if error.is_validation() {
        McpError::invalid_params(error.to_string(), None)
    } else {
        McpError::internal_error(error.to_string(), None)
    }
}
