//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::LedgerConfig;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`KAKEIBO_` prefix, `_` separated)
pub fn load_config(config_path: Option<&str>) -> Result<LedgerConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(LedgerConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("KAKEIBO_").split("_"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_without_file() {
        let config = load_config(None).expect("load");
        assert_eq!(config.server.transport, "stdio");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        // Toml::file silently skips nonexistent paths.
        let config = load_config(Some("/nonexistent/kakeibo.toml")).expect("load");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kakeibo.toml",
                r#"
                [server]
                transport = "http"
                port = 9000

                [logging]
                level = "debug"
                "#,
            )?;
            let config = load_config(Some("kakeibo.toml")).expect("load");
            assert_eq!(config.server.transport, "http");
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kakeibo.toml",
                r#"
                [server]
                port = 9000
                "#,
            )?;
            jail.set_env("KAKEIBO_SERVER_PORT", "9100");
            let config = load_config(Some("kakeibo.toml")).expect("load");
            assert_eq!(config.server.port, 9100);
            Ok(())
        });
    }
}
