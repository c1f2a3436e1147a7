//! Tavily search client
//!
//! One POST to `{base_url}/search` per query. The request body carries the
//! API key plus a fixed parameter set (`search_depth = "advanced"`,
//! `include_answer = true`, `max_results = 5`); only the `answer` field of
//! the response is consumed.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default Tavily API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Fixed search depth sent with every request.
pub const SEARCH_DEPTH: &str = "advanced";

/// Fixed result cap sent with every request.
pub const MAX_RESULTS: u32 = 5;

/// Errors from one search call, tagged by cause.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("API key is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Network(String),

    #[error("Tavily API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("response has no answer field")]
    MissingAnswer,
}

/// Tavily client configuration.
#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Search request body. All fields except `query` are constants.
#[derive(Debug, Serialize)]
pub struct SearchRequest {
    api_key: String,
    query: String,
    search_depth: &'static str,
    include_answer: bool,
    max_results: u32,
}

impl SearchRequest {
    pub fn new(api_key: &str, query: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            query: query.to_string(),
            search_depth: SEARCH_DEPTH,
            include_answer: true,
            max_results: MAX_RESULTS,
        }
    }
}

/// The slice of the Tavily response the adapter reads.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    answer: Option<String>,
}

/// Tavily search client.
pub struct TavilyClient {
    config: TavilyConfig,
    client: Client,
}

impl TavilyClient {
    /// Create a new client. Fails when the API key is empty or the HTTP
    /// client cannot be built.
    pub fn new(config: TavilyConfig) -> Result<Self, SearchError> {
        if config.api_key.is_empty() {
            return Err(SearchError::NotConfigured);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Run one search and return the synthesized answer.
    pub async fn search(&self, query: &str) -> Result<String, SearchError> {
        let request = SearchRequest::new(&self.config.api_key, query);

        let response = self
            .client
            .post(format!("{}/search", self.config.base_url))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        debug!(answer_present = search_response.answer.is_some(), "Tavily response decoded");

        search_response.answer.ok_or(SearchError::MissingAnswer)
    }
}
