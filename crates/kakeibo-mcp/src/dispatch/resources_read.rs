//! Handles the `resources/read` MCP method.

use serde_json::Value;

use kakeibo_protocol::mcp::resources::{
    ResourceContents, ResourcesReadParams, ResourcesReadResult,
};
use kakeibo_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::categories::{CategoriesStore, CATEGORIES_URI};
use crate::handler::JsonRpcOutput;

/// Handles the `resources/read` request.
pub(crate) fn handle_resources_read(
    id: RequestId,
    params: &Option<Value>,
    categories: &CategoriesStore,
) -> JsonRpcOutput {
    let read_params = match params {
        Some(p) => match serde_json::from_value::<ResourcesReadParams>(p.clone()) {
            Ok(rp) => rp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid resources/read params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "resources/read requires params",
            ));
        }
    };

    if read_params.uri != CATEGORIES_URI {
        return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("unknown resource: {}", read_params.uri),
        ));
    }

    let result = ResourcesReadResult {
        contents: vec![ResourceContents {
            uri: CATEGORIES_URI.to_string(),
            mime_type: Some("application/json".to_string()),
            text: categories.read(),
        }],
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
