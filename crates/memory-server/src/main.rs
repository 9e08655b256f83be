//! mcp-memory-server: main binary
//!
//! Usage:
//!   mcp-memory-server            - Serve MCP over HTTP (`/mcp`, `/health`)
//!   mcp-memory-server --help     - Show help
//!   mcp-memory-server --version  - Show version

use std::sync::Arc;

use memory_core::{Config, MessageStore, SqliteKvStore, ToolManager};
use memory_mcp::MemoryMcpServer;
use memory_tools::register_memory_tools;
use tracing_subscriber::EnvFilter;

/// Environment file read before `.env`
const ENV_FILE: &str = "mcp.server.env";

/// Run mode
enum RunMode {
    Server,
    Help,
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("mcp-memory-server {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Load environment files first so RUST_LOG may come from them
    dotenvy::from_filename(ENV_FILE).ok();
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    run_server(config).await
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("mcp-memory-server - conversation memory over MCP");
    println!();
    println!("Usage:");
    println!("  mcp-memory-server            Serve MCP over HTTP");
    println!("  mcp-memory-server --help     Show this help message");
    println!("  mcp-memory-server --version  Show version");
    println!();
    println!("Environment Variables:");
    println!("  MCP_HTTP_PORT        HTTP port (default: 9091)");
    println!("  MCP_HTTP_HOST        Bind address (default: 0.0.0.0)");
    println!("  MEMORY_FOLDER        Folder for messages.db (default: working directory)");
    println!("  RUST_LOG             Log filter (default: info)");
}

/// Open storage, register tools and serve until Ctrl+C
async fn run_server(config: Config) -> anyhow::Result<()> {
    // Storage must be available before serving anything
    let db_path = config
        .memory
        .prepare_storage()
        .map_err(|e| anyhow::anyhow!("Failed to prepare storage: {}", e))?;
    let db_path = db_path.to_string_lossy();

    let kv = SqliteKvStore::open(&db_path)
        .map_err(|e| anyhow::anyhow!("Failed to open message storage at {}: {}", db_path, e))?;
    let store = MessageStore::open(Arc::new(kv))
        .map_err(|e| anyhow::anyhow!("Failed to load messages: {}", e))?;

    let mut tool_manager = ToolManager::new();
    register_memory_tools(&mut tool_manager, Arc::new(store));
    tracing::info!(
        "Registered {} tools: {:?}",
        tool_manager.len(),
        tool_manager.tool_names()
    );

    let mcp_server = MemoryMcpServer::new(Arc::new(tool_manager));
    let addr = config.bind_address();

    let handle = tokio::spawn(async move { memory_api::start_server(&addr, mcp_server).await });

    tracing::info!("Press Ctrl+C to exit");

    tokio::select! {
        result = handle => {
            // The server only returns on failure
            result??;
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Shutting down...");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
