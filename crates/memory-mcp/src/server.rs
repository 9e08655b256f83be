//! MCP server handler
//!
//! [`MemoryMcpServer`] answers `tools/list` and `tools/call` from a shared
//! [`ToolManager`]. It is served over Streamable HTTP by
//! [`streamable_http_service`].

use std::sync::Arc;

use memory_core::ToolManager;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::RequestContext;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::adapter::{to_call_result, to_mcp_error, to_mcp_tool};

/// Name advertised in the MCP handshake and the health report
pub const SERVER_NAME: &str = "mcp-memory-server";

/// MCP handler backed by a tool registry
#[derive(Clone)]
pub struct MemoryMcpServer {
    tools: Arc<ToolManager>,
}

impl MemoryMcpServer {
    pub fn new(tools: Arc<ToolManager>) -> Self {
        Self { tools }
    }

    /// Tool list as published to MCP clients
    pub fn mcp_tools(&self) -> Vec<McpTool> {
        self.tools
            .definitions()
            .into_iter()
            .map(to_mcp_tool)
            .collect()
    }

    /// Run one tool call
    pub async fn dispatch(&self, name: &str, arguments: JsonValue) -> Result<CallToolResult, McpError> {
        debug!(tool = %name, "Tool call");
        self.tools
            .execute(name, arguments)
            .await
            .map(to_call_result)
            .map_err(|e| {
                tracing::warn!(tool = %name, "Tool call failed: {}", e);
                to_mcp_error(e)
            })
    }
}

impl ServerHandler for MemoryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Stores and retrieves conversation messages: save, read the most recent, \
                 search by keywords and delete by age."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.mcp_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = JsonValue::Object(request.arguments.unwrap_or_default());
        self.dispatch(&request.name, arguments).await
    }
}

/// Streamable HTTP service exposing `server`, one handler clone per session
pub fn streamable_http_service(
    server: MemoryMcpServer,
) -> StreamableHttpService<MemoryMcpServer, LocalSessionManager> {
    StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    )
}
