//! Configuration schema types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Returns the kakeibo data directory.
///
/// Uses `KAKEIBO_DATA_DIR` if set, otherwise `.kakeibo` in the working
/// directory.
pub fn data_dir() -> PathBuf {
    std::env::var("KAKEIBO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".kakeibo"))
}

/// Top-level kakeibo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Path to the categories JSON document.
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            categories_path: default_categories_path(),
        }
    }
}

fn default_database_path() -> String {
    data_dir().join("ledger.db").to_string_lossy().into_owned()
}

fn default_categories_path() -> String {
    data_dir()
        .join("categories.json")
        .to_string_lossy()
        .into_owned()
}

/// Server transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport mode: "stdio" or "http".
    #[serde(default = "default_transport")]
    pub transport: String,
    /// TCP port for the HTTP transport.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            port: default_port(),
        }
    }
}

fn default_transport() -> String {
    "stdio".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "kakeibo=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
