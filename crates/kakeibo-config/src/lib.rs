//! # kakeibo-config
//!
//! Configuration management for the kakeibo server.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{data_dir, LedgerConfig};
