//! HTTP/JSON-RPC transport adapter for the kakeibo MCP server.
//! Exposes MCP over `POST /mcp` plus liveness and readiness probes.

mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
