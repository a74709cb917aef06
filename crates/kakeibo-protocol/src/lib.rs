//! # kakeibo-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions: the wire format
//! between MCP clients and the kakeibo expense ledger server.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::*;
pub use mcp::methods;
