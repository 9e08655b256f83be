//! Route definitions

use axum::{Router, routing::get};
use memory_mcp::{MemoryMcpServer, streamable_http_service};

use crate::handlers::health;

/// Create the HTTP router
pub fn routes(mcp_server: MemoryMcpServer) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // MCP Streamable HTTP endpoint
        .nest_service("/mcp", streamable_http_service(mcp_server))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use memory_core::ToolManager;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let app = routes(MemoryMcpServer::new(Arc::new(ToolManager::new())));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["server"], "mcp-memory-server");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = routes(MemoryMcpServer::new(Arc::new(ToolManager::new())));

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
