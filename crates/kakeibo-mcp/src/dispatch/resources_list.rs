//! Handles the `resources/list` MCP method.

use kakeibo_protocol::mcp::resources::ResourcesListResult;
use kakeibo_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::categories::CategoriesStore;
use crate::handler::JsonRpcOutput;

/// Handles the `resources/list` request.
pub(crate) fn handle_resources_list(id: RequestId) -> JsonRpcOutput {
    let result = ResourcesListResult {
        resources: vec![CategoriesStore::definition()],
    };

    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
