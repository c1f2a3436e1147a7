//! Search adapter for the Tavily API
//!
//! A thin adapter between an invocation event and the Tavily web-search
//! endpoint: extract a query from `node.inputs[0].value` (falling back to a
//! default when the event carries none), run one search with a fixed
//! parameter set, and report either the synthesized answer or a
//! `{statusCode: 500, body}` error value. The handler absorbs every failure;
//! it never propagates an error to its caller.
//!
//! # Quick start
//!
//! ```no_run
//! use search_adapter::config::AdapterConfig;
//! use search_adapter::handler::SearchQueryAdapter;
//! use search_adapter::search::TavilyClient;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AdapterConfig::from_env()?;
//! let client = TavilyClient::new(config.tavily)?;
//! let adapter = SearchQueryAdapter::new(client, config.default_query);
//!
//! let event = json!({"node": {"inputs": [{"value": "quantum computing"}]}});
//! let outcome = adapter.handle(&event).await;
//! println!("{}", outcome.into_value());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod event;
pub mod handler;
pub mod logging;
pub mod search;

pub use config::{AdapterConfig, ConfigError};
pub use event::{extract_query, ExtractedQuery};
pub use handler::{ErrorResponse, HandlerOutcome, SearchQueryAdapter, DEFAULT_QUERY};
pub use search::{SearchError, TavilyClient, TavilyConfig};
