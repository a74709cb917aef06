//! Handles the `tools/list` MCP method.

use kakeibo_protocol::mcp::tools::ToolsListResult;
use kakeibo_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;
use crate::tools;

/// Handles the `tools/list` request.
///
/// The catalog is compiled in, so no storage access is needed.
pub(crate) fn handle_tools_list(id: RequestId) -> JsonRpcOutput {
    let result = ToolsListResult {
        tools: tools::catalog(),
        next_cursor: None,
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
