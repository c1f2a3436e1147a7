//! Environment configuration
//!
//! The API key is never a source literal; it comes from `TAVILY_API_KEY`.
//! Endpoint, timeout, and the fallback query have defaults and can be
//! overridden per environment.

use crate::handler::DEFAULT_QUERY;
use crate::search::{TavilyConfig, DEFAULT_BASE_URL};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Tavily API key.
pub const API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Optional override of the Tavily endpoint.
pub const BASE_URL_ENV: &str = "TAVILY_BASE_URL";

/// Optional request timeout override, in whole seconds.
pub const TIMEOUT_ENV: &str = "TAVILY_TIMEOUT_SECS";

/// Optional override of the fallback query.
pub const DEFAULT_QUERY_ENV: &str = "DEFAULT_QUERY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{API_KEY_ENV} environment variable is not set")]
    MissingApiKey,

    #[error("invalid {TIMEOUT_ENV} value '{value}': {reason}")]
    InvalidTimeout { value: String, reason: String },
}

/// Adapter configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub tavily: TavilyConfig,
    pub default_query: String,
}

impl AdapterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidTimeout {
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => TavilyConfig::default().timeout,
        };

        let default_query =
            env::var(DEFAULT_QUERY_ENV).unwrap_or_else(|_| DEFAULT_QUERY.to_string());

        Ok(Self {
            tavily: TavilyConfig {
                api_key,
                base_url,
                timeout,
            },
            default_query,
        })
    }
}
