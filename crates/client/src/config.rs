//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VERDE_API_BASE_URL` - Backend endpoint (default: `http://localhost:8000/api/v1`)
//! - `VERDE_DATA_DIR` - Directory holding the persisted auth token
//!   (default: `$HOME/.verde-market`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// File name of the single persisted credential slot.
pub const TOKEN_FILE_NAME: &str = "auth_token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint every request path is joined onto.
    pub base_url: Url,
    /// Path of the persisted auth token file.
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `VERDE_API_BASE_URL` is set but not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("VERDE_API_BASE_URL", DEFAULT_BASE_URL);
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("VERDE_API_BASE_URL".to_owned(), e.to_string())
        })?;

        let data_dir = std::env::var("VERDE_DATA_DIR").map_or_else(
            |_| default_data_dir(),
            PathBuf::from,
        );

        Ok(Self {
            base_url,
            token_path: data_dir.join(TOKEN_FILE_NAME),
        })
    }

    /// Build a configuration directly, bypassing the environment.
    #[must_use]
    pub const fn new(base_url: Url, token_path: PathBuf) -> Self {
        Self {
            base_url,
            token_path,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Token directory under the user's home, falling back to the working
/// directory when no home is set (containers, CI).
fn default_data_dir() -> PathBuf {
    std::env::var("HOME").map_or_else(|_| PathBuf::from(".verde-market"), |home| {
        PathBuf::from(home).join(".verde-market")
    })
}
