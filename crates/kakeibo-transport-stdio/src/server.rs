//! MCP server loop over the stdio transport.
//!
//! Reads JSON-RPC requests line by line, dispatches them via
//! `McpHandler`, and writes responses back. JSON-RPC notifications
//! (which have no `id` field) are consumed without a response.

use tracing::{debug, error, info, warn};

use kakeibo_mcp::{JsonRpcOutput, McpHandler};
use kakeibo_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, RequestId,
};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("kakeibo MCP server starting on stdio");

        while let Some(line) = self.transport.read_message().await? {
            // A request carries an `id`; anything without one is handled
            // as a notification and must not be answered.
            match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => {
                    debug!(method = %request.method, id = ?request.id, "received request");
                    let output = self.handler.dispatch(&request).await;
                    self.write_output(&output).await?;
                }
                Err(_) => match serde_json::from_str::<JsonRpcNotification>(&line) {
                    Ok(notification) => {
                        self.handler.handle_notification(&notification);
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to parse JSON-RPC message");
                        let err = JsonRpcErrorResponse::error(
                            RequestId::Number(0),
                            error_codes::PARSE_ERROR,
                            format!("parse error: {e}"),
                        );
                        self.write_output(&JsonRpcOutput::Error(err)).await?;
                    }
                },
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Serializes and writes one JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_message(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Serialize(e.to_string()))
            }
        }
    }
}
