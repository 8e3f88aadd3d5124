//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PETSTORE_DATA_DIR` - Directory holding the store's JSON files
//!   (default: `./petstore-data`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./petstore-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Directory the file-backed store writes into.
    pub data_dir: PathBuf,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_env_or_default("PETSTORE_DATA_DIR", DEFAULT_DATA_DIR);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "PETSTORE_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            data_dir: PathBuf::from(raw),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
