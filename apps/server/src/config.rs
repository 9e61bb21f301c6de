//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub port: u16,

    /// Directory holding inventory.json, sales_history.json and reports
    pub data_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("KIBANDA_PORT")
                .unwrap_or_else(|_| "18080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KIBANDA_PORT".to_string()))?,

            data_dir: env::var("KIBANDA_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
