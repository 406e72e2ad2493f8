//! Runtime configuration from environment variables.

use std::env;
use tradable_asset::config::parse_bool;
use tradable_asset::{ConfigError, ContractConfig};

/// Configuration for the asset runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Contract settings
    pub contract: ContractConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            contract: ContractConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TA_JSON_LOGS`: Enable JSON logs (default: false)
    /// - everything read by [`ContractConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            log_level: env::var("TA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: match env::var("TA_JSON_LOGS") {
                Ok(value) => parse_bool("TA_JSON_LOGS", &value)?,
                Err(_) => false,
            },

            contract: ContractConfig::from_env()?,
        })
    }
}
