//! memory-api: HTTP surface for mcp-memory-server
//!
//! Serves the MCP Streamable HTTP endpoint at `/mcp` and a static
//! health report at `/health`. Built with axum.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::start_server;
