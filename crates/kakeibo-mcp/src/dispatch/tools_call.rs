//! Handles the `tools/call` MCP method.

use serde_json::Value;

use kakeibo_ledger::ExpenseRepository;
use kakeibo_protocol::mcp::tools::ToolsCallParams;
use kakeibo_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;
use crate::tools;

/// Handles the `tools/call` request.
///
/// Argument-shape problems and unknown tool names are protocol errors;
/// everything that happens past argument parsing (validation failures,
/// storage faults) is reported inside the tool result with `isError`.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    repository: &dyn ExpenseRepository,
) -> JsonRpcOutput {
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            ));
        }
    };

    tracing::debug!(tool = %call_params.name, "executing ledger tool");

    let call_result =
        match tools::execute(&call_params.name, &call_params.arguments, repository).await {
            Ok(result) => result,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    e.to_string(),
                ));
            }
        };

    match serde_json::to_value(call_result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
