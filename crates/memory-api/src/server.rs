//! HTTP server
//!
//! Starts the axum server hosting `/health` and `/mcp`.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use memory_mcp::MemoryMcpServer;

use crate::error::{ApiError, Result};
use crate::routes::routes;

/// Bind `addr` and serve until the task is cancelled
pub async fn start_server(addr: &str, mcp_server: MemoryMcpServer) -> Result<()> {
    let app = routes(mcp_server)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!("MCP Memory Server is listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
