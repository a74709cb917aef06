//! JSON-RPC method routing for the MCP surface.

use std::sync::Arc;

use kakeibo_ledger::ExpenseRepository;
use kakeibo_protocol::{
    error_codes, methods, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse,
};

use crate::categories::CategoriesStore;
use crate::dispatch;

/// The outcome of dispatching one JSON-RPC request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// A success response.
    Success(JsonRpcResponse),
    /// An error response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the output to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(resp) => serde_json::to_string(resp),
            Self::Error(err) => serde_json::to_string(err),
        }
    }
}

/// Routes MCP methods to their implementations.
///
/// Holds the shared ledger repository and the categories store; both are
/// stateless between calls, so the handler can be shared across
/// concurrent invocations.
pub struct McpHandler {
    repository: Arc<dyn ExpenseRepository>,
    categories: CategoriesStore,
}

impl McpHandler {
    /// Creates a handler over the given repository and categories store.
    pub fn new(repository: Arc<dyn ExpenseRepository>, categories: CategoriesStore) -> Self {
        Self {
            repository,
            categories,
        }
    }

    /// Dispatches a single JSON-RPC request to the matching MCP method.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id, &request.params),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(id),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(
                    id,
                    &request.params,
                    self.repository.as_ref(),
                )
                .await
            }
            methods::RESOURCES_LIST => {
                dispatch::resources_list::handle_resources_list(id)
            }
            methods::RESOURCES_READ => {
                dispatch::resources_read::handle_resources_read(id, &request.params, &self.categories)
            }
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            )),
        }
    }

    /// Consumes a notification. Notifications never receive a response.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        tracing::debug!(method = %notification.method, "notification received");
    }
}
