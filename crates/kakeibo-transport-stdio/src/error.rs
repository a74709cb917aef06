//! Transport-layer error types.

use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(String),
    /// Failed to serialize an outgoing response.
    #[error("serialize error: {0}")]
    Serialize(String),
}
