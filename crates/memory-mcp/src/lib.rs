//! memory-mcp: MCP (Model Context Protocol) server integration
//!
//! Publishes the tools registered in a [`memory_core::ToolManager`] over
//! MCP and dispatches incoming tool calls back to them.

pub mod adapter;
pub mod server;

pub use adapter::{to_call_result, to_mcp_error, to_mcp_tool};
pub use server::{MemoryMcpServer, SERVER_NAME, streamable_http_service};
