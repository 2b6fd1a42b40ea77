//! Runtime configuration from environment variables.
//!
//! Environment variables must be set by the runtime environment
//! (e.g. `set -a; . ./.env; set +a` for local runs).

use std::env;

use crate::error::AppError;

const DEFAULT_API_URL: &str = "https://koodipahkina.monad.fi/api/game";

/// Connection settings for the game API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the game endpoint (games are created by POSTing here).
    pub base_url: String,
    /// Bearer value for the `Authorization` header.
    pub api_key: String,
}

impl ApiConfig {
    /// Build the config from `API_KEY` (required) and `GAME_API_URL`
    /// (optional, defaults to the public server).
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = must_var("API_KEY")?;
        let base_url = env::var("GAME_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(Self { base_url, api_key })
    }
}

/// Get a required environment variable with a helpful error message
fn must_var(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::config(format!("{key} must be set")))
}
