//! # kakeibo-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the expense-ledger tools and the categories resource.

pub mod categories;
mod dispatch;
pub mod handler;
pub mod tools;

pub use categories::CategoriesStore;
pub use handler::{JsonRpcOutput, McpHandler};
