//! End-to-end dispatch tests: JSON-RPC request in, JSON-RPC response out.

use std::sync::Arc;

use serde_json::{json, Value};

use kakeibo_mcp::{CategoriesStore, JsonRpcOutput, McpHandler};
use kakeibo_protocol::{JsonRpcRequest, RequestId};
use kakeibo_store_sqlite::SqliteExpenseRepository;

fn make_handler(dir: &std::path::Path) -> McpHandler {
    let repo = Arc::new(SqliteExpenseRepository::open_in_memory().expect("db"));
    McpHandler::new(repo, CategoriesStore::new(dir.join("categories.json")))
}

/// Dispatches one request and returns the success result value.
async fn call(handler: &McpHandler, method: &str, params: Value) -> Value {
    let req = JsonRpcRequest::new(RequestId::Number(1), method, Some(params));
    match handler.dispatch(&req).await {
        JsonRpcOutput::Success(resp) => resp.result,
        JsonRpcOutput::Error(err) => panic!("{method} failed: {}", err.error.message),
    }
}

/// Calls a ledger tool and parses the JSON text payload of the result.
async fn call_tool(handler: &McpHandler, name: &str, arguments: Value) -> (Value, bool) {
    let result = call(handler, "tools/call", json!({"name": name, "arguments": arguments})).await;
    let is_error = result["isError"].as_bool().expect("isError");
    let text = result["content"][0]["text"].as_str().expect("text");
    (serde_json::from_str(text).expect("payload json"), is_error)
}

#[tokio::test]
async fn initialize_handshake() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let result = call(
        &handler,
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test", "version": "0.0.1"}
        }),
    )
    .await;

    assert_eq!(result["serverInfo"]["name"], "kakeibo");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn add_then_list_roundtrip() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let (added, is_error) = call_tool(
        &handler,
        "add_expense",
        json!({"date": "2024-01-10", "amount": 42.0, "category": "Travel", "note": "taxi"}),
    )
    .await;
    assert!(!is_error);
    assert_eq!(added["status"], "ok");
    let id = added["id"].as_i64().expect("id");

    let (rows, _) = call_tool(
        &handler,
        "list_expenses",
        json!({"start_date": "2024-01-01", "end_date": "2024-01-31"}),
    )
    .await;
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id);
    assert_eq!(rows[0]["note"], "taxi");
}

#[tokio::test]
async fn edit_changes_only_the_provided_field() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let (added, _) = call_tool(
        &handler,
        "add_expense",
        json!({"date": "2024-02-02", "amount": 15.0, "category": "Shopping", "note": "socks"}),
    )
    .await;
    let id = added["id"].as_i64().expect("id");

    let (edited, is_error) = call_tool(
        &handler,
        "edit_expense",
        json!({"expense_id": id, "category": "Other"}),
    )
    .await;
    assert!(!is_error);
    assert_eq!(edited["rows_updated"], 1);

    let (rows, _) = call_tool(
        &handler,
        "list_expenses",
        json!({"start_date": "2024-02-01", "end_date": "2024-02-28"}),
    )
    .await;
    assert_eq!(rows[0]["category"], "Other");
    assert_eq!(rows[0]["note"], "socks");
    assert_eq!(rows[0]["amount"], 15.0);
}

#[tokio::test]
async fn edit_without_fields_is_an_in_band_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let (payload, is_error) =
        call_tool(&handler, "edit_expense", json!({"expense_id": 1})).await;
    assert!(is_error);
    assert_eq!(payload["status"], "error");
    assert!(payload["message"]
        .as_str()
        .expect("message")
        .contains("no fields provided"));
}

#[tokio::test]
async fn delete_twice_counts_one_then_zero() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let (added, _) = call_tool(
        &handler,
        "add_expense",
        json!({"date": "2024-03-03", "amount": 3.0, "category": "Other"}),
    )
    .await;
    let id = added["id"].as_i64().expect("id");

    let (first, _) = call_tool(&handler, "delete_expense", json!({"expense_id": id})).await;
    assert_eq!(first["rows_deleted"], 1);
    let (second, _) = call_tool(&handler, "delete_expense", json!({"expense_id": id})).await;
    assert_eq!(second["rows_deleted"], 0);
}

#[tokio::test]
async fn summarize_groups_and_filters() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    for (date, amount, category) in [
        ("2024-05-01", 10.0, "Food & Dining"),
        ("2024-05-02", 20.0, "Food & Dining"),
        ("2024-05-03", 99.0, "Travel"),
        ("2024-06-01", 1.0, "Travel"),
    ] {
        call_tool(
            &handler,
            "add_expense",
            json!({"date": date, "amount": amount, "category": category}),
        )
        .await;
    }

    let (groups, _) = call_tool(
        &handler,
        "summarize",
        json!({"start_date": "2024-05-01", "end_date": "2024-05-31"}),
    )
    .await;
    let groups = groups.as_array().expect("array");
    assert_eq!(groups.len(), 2);
    // Largest total first.
    assert_eq!(groups[0]["category"], "Travel");
    assert_eq!(groups[0]["total_amount"], 99.0);
    assert_eq!(groups[1]["total_amount"], 30.0);
    assert_eq!(groups[1]["count"], 2);

    let (filtered, _) = call_tool(
        &handler,
        "summarize",
        json!({"start_date": "2024-05-01", "end_date": "2024-05-31", "category": "Travel"}),
    )
    .await;
    let filtered = filtered.as_array().expect("array");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["count"], 1);
}

#[tokio::test]
async fn search_and_monthly_report() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    for (date, amount, category, note) in [
        ("2024-01-05", 7.5, "Food & Dining", "bento box"),
        ("2024-01-20", 30.0, "Transportation", "shinkansen"),
        ("2024-03-14", 12.0, "Entertainment", "cinema"),
    ] {
        call_tool(
            &handler,
            "add_expense",
            json!({"date": date, "amount": amount, "category": category, "note": note}),
        )
        .await;
    }

    let (hits, _) = call_tool(&handler, "search_expenses", json!({"keyword": "BENTO"})).await;
    let hits = hits.as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["note"], "bento box");

    let (months, _) = call_tool(&handler, "monthly_report", json!({"year": 2024})).await;
    let months = months.as_array().expect("array");
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "01");
    assert_eq!(months[0]["total_amount"], 37.5);
    assert_eq!(months[1]["month"], "03");
}

#[tokio::test]
async fn categories_resource_lifecycle() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(dir.path());

    let listed = call(&handler, "resources/list", json!({})).await;
    assert_eq!(listed["resources"][0]["uri"], "expense://categories");

    // First read materializes the default ten labels.
    let read = call(
        &handler,
        "resources/read",
        json!({"uri": "expense://categories"}),
    )
    .await;
    let text = read["contents"][0]["text"].as_str().expect("text");
    let doc: Value = serde_json::from_str(text).expect("doc");
    assert_eq!(doc["categories"].as_array().expect("labels").len(), 10);

    // An external edit is visible on the next read, without restart.
    std::fs::write(
        dir.path().join("categories.json"),
        r#"{"categories":["Rent","Groceries"]}"#,
    )
    .expect("edit");
    let read = call(
        &handler,
        "resources/read",
        json!({"uri": "expense://categories"}),
    )
    .await;
    let text = read["contents"][0]["text"].as_str().expect("text");
    assert!(text.contains("Groceries"));
}
