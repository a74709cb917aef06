//! The ledger tool surface: catalog, argument parsing and execution.
//!
//! Tool names are stable; input schemas are built from compiled-in
//! parameter declarations so `tools/list` always matches what
//! `tools/call` actually accepts.

pub mod args;
mod mutate;
mod query;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use kakeibo_ledger::{ExpenseRepository, RepositoryError};
use kakeibo_protocol::mcp::tools::{McpToolDefinition, ToolsCallResult};
use kakeibo_types::NewExpense;

/// Stable tool names.
pub mod names {
    pub const ADD_EXPENSE: &str = "add_expense";
    pub const LIST_EXPENSES: &str = "list_expenses";
    pub const SUMMARIZE: &str = "summarize";
    pub const EDIT_EXPENSE: &str = "edit_expense";
    pub const DELETE_EXPENSE: &str = "delete_expense";
    pub const SEARCH_EXPENSES: &str = "search_expenses";
    pub const MONTHLY_REPORT: &str = "monthly_report";
}

/// Errors surfaced to the dispatch layer as protocol faults.
///
/// Everything else (validation, storage) is reported in-band inside the
/// tool result.
#[derive(Debug, Error)]
pub enum ToolCallError {
    /// The requested tool does not exist.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// The arguments did not match the tool's declared schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// A compiled-in parameter declaration.
struct ToolParam {
    name: &'static str,
    param_type: &'static str,
    description: &'static str,
    required: bool,
}

/// Builds a JSON Schema `inputSchema` from parameter declarations.
fn input_schema(params: &[ToolParam]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for p in params {
        properties.insert(
            p.name.to_string(),
            json!({ "type": p.param_type, "description": p.description }),
        );
        if p.required {
            required.push(Value::String(p.name.to_string()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}

/// The full tool catalog advertised by `tools/list`.
pub fn catalog() -> Vec<McpToolDefinition> {
    vec![
        McpToolDefinition {
            name: names::ADD_EXPENSE.to_string(),
            description: Some("Add a new expense entry to the ledger.".to_string()),
            input_schema: input_schema(&[
                ToolParam {
                    name: "date",
                    param_type: "string",
                    description: "Date in ISO YYYY-MM-DD format",
                    required: true,
                },
                ToolParam {
                    name: "amount",
                    param_type: "number",
                    description: "Amount spent (negative for refunds)",
                    required: true,
                },
                ToolParam {
                    name: "category",
                    param_type: "string",
                    description: "Category label",
                    required: true,
                },
                ToolParam {
                    name: "subcategory",
                    param_type: "string",
                    description: "Optional subcategory label",
                    required: false,
                },
                ToolParam {
                    name: "note",
                    param_type: "string",
                    description: "Optional free-form note",
                    required: false,
                },
            ]),
        },
        McpToolDefinition {
            name: names::LIST_EXPENSES.to_string(),
            description: Some(
                "List expense entries within an inclusive date range, newest first.".to_string(),
            ),
            input_schema: input_schema(&[
                ToolParam {
                    name: "start_date",
                    param_type: "string",
                    description: "First date included (ISO YYYY-MM-DD)",
                    required: true,
                },
                ToolParam {
                    name: "end_date",
                    param_type: "string",
                    description: "Last date included (ISO YYYY-MM-DD)",
                    required: true,
                },
            ]),
        },
        McpToolDefinition {
            name: names::SUMMARIZE.to_string(),
            description: Some(
                "Summarize expenses by category within an inclusive date range.".to_string(),
            ),
            input_schema: input_schema(&[
                ToolParam {
                    name: "start_date",
                    param_type: "string",
                    description: "First date included (ISO YYYY-MM-DD)",
                    required: true,
                },
                ToolParam {
                    name: "end_date",
                    param_type: "string",
                    description: "Last date included (ISO YYYY-MM-DD)",
                    required: true,
                },
                ToolParam {
                    name: "category",
                    param_type: "string",
                    description: "Restrict the summary to one category",
                    required: false,
                },
            ]),
        },
        McpToolDefinition {
            name: names::EDIT_EXPENSE.to_string(),
            description: Some(
                "Edit an existing expense by id. Only provided fields are changed.".to_string(),
            ),
            input_schema: input_schema(&[
                ToolParam {
                    name: "expense_id",
                    param_type: "integer",
                    description: "Id of the expense to edit",
                    required: true,
                },
                ToolParam {
                    name: "date",
                    param_type: "string",
                    description: "New date (ISO YYYY-MM-DD)",
                    required: false,
                },
                ToolParam {
                    name: "amount",
                    param_type: "number",
                    description: "New amount",
                    required: false,
                },
                ToolParam {
                    name: "category",
                    param_type: "string",
                    description: "New category label",
                    required: false,
                },
                ToolParam {
                    name: "subcategory",
                    param_type: "string",
                    description: "New subcategory label",
                    required: false,
                },
                ToolParam {
                    name: "note",
                    param_type: "string",
                    description: "New note",
                    required: false,
                },
            ]),
        },
        McpToolDefinition {
            name: names::DELETE_EXPENSE.to_string(),
            description: Some("Delete an expense by id.".to_string()),
            input_schema: input_schema(&[ToolParam {
                name: "expense_id",
                param_type: "integer",
                description: "Id of the expense to delete",
                required: true,
            }]),
        },
        McpToolDefinition {
            name: names::SEARCH_EXPENSES.to_string(),
            description: Some(
                "Search note, category and subcategory for a keyword, newest first.".to_string(),
            ),
            input_schema: input_schema(&[ToolParam {
                name: "keyword",
                param_type: "string",
                description: "Case-insensitive substring to look for",
                required: true,
            }]),
        },
        McpToolDefinition {
            name: names::MONTHLY_REPORT.to_string(),
            description: Some(
                "Per-month totals for one year; months without expenses are omitted.".to_string(),
            ),
            input_schema: input_schema(&[ToolParam {
                name: "year",
                param_type: "string",
                description: "Four-digit year, e.g. \"2024\" (a number is also accepted)",
                required: true,
            }]),
        },
    ]
}

/// Parses tool arguments into their declared shape.
fn parse_args<T: DeserializeOwned>(arguments: &Value) -> Result<T, ToolCallError> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| ToolCallError::InvalidArguments(e.to_string()))
}

/// Executes a tool by name against the repository.
///
/// Returns a protocol-level error only for unknown tools and malformed
/// arguments; repository outcomes, good or bad, land inside the result.
pub async fn execute(
    name: &str,
    arguments: &Value,
    repository: &dyn ExpenseRepository,
) -> Result<ToolsCallResult, ToolCallError> {
    let outcome = match name {
        names::ADD_EXPENSE => {
            let new_expense: NewExpense = parse_args(arguments)?;
            mutate::run_add(&new_expense, repository).await
        }
        names::LIST_EXPENSES => {
            let list_args: args::ListExpensesArgs = parse_args(arguments)?;
            query::run_list(&list_args, repository).await
        }
        names::SUMMARIZE => {
            let summarize_args: args::SummarizeArgs = parse_args(arguments)?;
            query::run_summarize(&summarize_args, repository).await
        }
        names::EDIT_EXPENSE => {
            let edit_args: args::EditExpenseArgs = parse_args(arguments)?;
            mutate::run_edit(&edit_args, repository).await
        }
        names::DELETE_EXPENSE => {
            let delete_args: args::DeleteExpenseArgs = parse_args(arguments)?;
            mutate::run_delete(&delete_args, repository).await
        }
        names::SEARCH_EXPENSES => {
            let search_args: args::SearchExpensesArgs = parse_args(arguments)?;
            query::run_search(&search_args, repository).await
        }
        names::MONTHLY_REPORT => {
            let report_args: args::MonthlyReportArgs = parse_args(arguments)?;
            query::run_monthly_report(&report_args, repository).await
        }
        other => return Err(ToolCallError::UnknownTool(other.to_string())),
    };

    Ok(into_call_result(outcome))
}

/// Folds a repository outcome into a tool result.
fn into_call_result(outcome: Result<Value, RepositoryError>) -> ToolsCallResult {
    match outcome {
        Ok(payload) => ToolsCallResult::text(payload.to_string(), false),
        Err(e) => {
            tracing::warn!(error = %e, "ledger tool failed");
            let payload = json!({ "status": "error", "message": e.to_string() });
            ToolsCallResult::text(payload.to_string(), true)
        }
    }
}
