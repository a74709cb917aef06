//! The categories resource: a JSON document on disk.
//!
//! The document is re-read on every access so a hand edit to the file is
//! visible on the next request without a restart. If it does not exist it
//! is first materialized with the default label set.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use kakeibo_protocol::mcp::McpResourceDefinition;

/// URI under which the categories document is served.
pub const CATEGORIES_URI: &str = "expense://categories";

/// Labels written to a freshly created categories document.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Business",
    "Other",
];

/// File-backed provider for the categories document.
#[derive(Debug, Clone)]
pub struct CategoriesStore {
    path: PathBuf,
}

impl CategoriesStore {
    /// Creates a store serving the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path the document is stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resource definition advertised by `resources/list`.
    pub fn definition() -> McpResourceDefinition {
        McpResourceDefinition {
            uri: CATEGORIES_URI.to_string(),
            name: "categories".to_string(),
            description: Some("Known expense category labels".to_string()),
            mime_type: Some("application/json".to_string()),
        }
    }

    /// Returns the document verbatim, creating it with the default labels
    /// if absent.
    ///
    /// An unreadable or unwritable file yields a JSON payload with an
    /// `error` field rather than a failure, so the resource read itself
    /// still succeeds.
    pub fn read(&self) -> String {
        match self.read_or_init() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "categories unavailable");
                json!({ "error": e.to_string() }).to_string()
            }
        }
    }

    fn read_or_init(&self) -> std::io::Result<String> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let default_doc = json!({ "categories": DEFAULT_CATEGORIES });
            let pretty = serde_json::to_string_pretty(&default_doc)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            fs::write(&self.path, pretty)?;
            tracing::info!(path = %self.path.display(), "created default categories document");
        }
        fs::read_to_string(&self.path)
    }
}
