//! `kakeibo serve` command.
//!
//! Starts the MCP server over stdio or HTTP, exposing the ledger tools
//! and the categories resource via JSON-RPC 2.0.

use std::sync::Arc;

use clap::Args;

use kakeibo_config::LedgerConfig;
use kakeibo_mcp::{CategoriesStore, McpHandler};
use kakeibo_transport_http::HttpServer;
use kakeibo_transport_stdio::{McpServer, StdioTransport};

use crate::shared;

/// Start the MCP server (stdio or HTTP).
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport mode: stdio or http (overrides config).
    #[arg(long, value_parser = ["stdio", "http"])]
    pub transport: Option<String>,
    /// TCP port for the HTTP transport (overrides config).
    #[arg(long)]
    pub port: Option<u16>,
    /// Database path (overrides config).
    #[arg(long)]
    pub db: Option<String>,
    /// Categories document path (overrides config).
    #[arg(long)]
    pub categories: Option<String>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &LedgerConfig) -> anyhow::Result<()> {
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| config.storage.database_path.clone());
    let categories_path = args
        .categories
        .clone()
        .unwrap_or_else(|| config.storage.categories_path.clone());
    let transport = args
        .transport
        .clone()
        .unwrap_or_else(|| config.server.transport.clone());
    let port = args.port.unwrap_or(config.server.port);

    let repo = shared::open_repository(&db_path)?;
    tracing::debug!(db = %db_path, categories = %categories_path, "ledger opened");
    let handler = McpHandler::new(repo, CategoriesStore::new(categories_path));

    match transport.as_str() {
        "http" => {
            let server = HttpServer::new(Arc::new(handler), port);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
        _ => {
            let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
            let mut server = McpServer::new(transport, handler);
            tracing::info!("kakeibo MCP server ready on stdio");
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}
