//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::Result;

/// Text returned by a memory tool
///
/// Every tool answers with a single text payload: a confirmation such as
/// `Message saved with ID: 3`, a JSON-encoded message or message list, or
/// `No messages found`. `is_error` marks payloads that describe a failure
/// the call itself survived, such as a message list that could not be
/// encoded; the MCP layer forwards it as the result's error flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub output: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    /// Payload reporting an operation-level failure
    pub fn error(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: true,
        }
    }
}

/// One memory operation exposed to MCP callers
///
/// `execute` returns `Err` for faults the caller should see as a failed
/// call (validation, storage); `Ok(ToolResult::error(..))` reports an
/// operation-level failure inside an otherwise successful call.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name used in `tools/call`, e.g. `save_message`
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema advertised in `tools/list`
    fn input_schema(&self) -> JsonValue;

    /// Run against the raw `arguments` object of a call
    async fn execute(&self, input: JsonValue) -> Result<ToolResult>;
}
