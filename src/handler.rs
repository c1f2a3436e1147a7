//! Search query adapter
//!
//! The handler boundary absorbs every failure: extraction problems fall back
//! to the default query, remote-call problems become a `statusCode: 500`
//! value. `handle` always returns an outcome, never an `Err` and never a
//! panic.

use crate::event::{query_or_default, ExtractedQuery};
use crate::search::{SearchError, TavilyClient};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Fallback query substituted when the event carries none.
pub const DEFAULT_QUERY: &str = "What is AWS Lambda?";

/// Error value reported to the caller in place of a raised failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ErrorResponse {
    fn internal(body: String) -> Self {
        Self {
            status_code: 500,
            body,
        }
    }
}

/// Discriminated result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// The `answer` field of the search response.
    Answer(String),
    /// Any remote-call failure, flattened to a 500 value.
    Error(ErrorResponse),
}

impl HandlerOutcome {
    /// Render the legacy wire shape: a bare JSON string on success, a
    /// `{"statusCode": 500, "body": ...}` object on error. Callers of the
    /// wire form distinguish the two structurally.
    pub fn into_value(self) -> Value {
        match self {
            HandlerOutcome::Answer(answer) => Value::String(answer),
            HandlerOutcome::Error(error) => {
                serde_json::to_value(error).unwrap_or_else(|_| Value::Null)
            }
        }
    }
}

/// Forwards one invocation event to the Tavily API and reports the answer.
pub struct SearchQueryAdapter {
    client: TavilyClient,
    default_query: String,
}

impl SearchQueryAdapter {
    pub fn new(client: TavilyClient, default_query: impl Into<String>) -> Self {
        Self {
            client,
            default_query: default_query.into(),
        }
    }

    /// Handle one invocation event.
    ///
    /// Holds no state across calls; concurrent invocations are independent.
    pub async fn handle(&self, event: &Value) -> HandlerOutcome {
        debug!(%event, "invocation received");

        let query = query_or_default(event, &self.default_query);
        match &query {
            ExtractedQuery::Provided(q) => info!(query = %q, "query extracted from event"),
            ExtractedQuery::Default(q) => {
                warn!(query = %q, "event carried no query, using fallback")
            }
        }

        match self.client.search(query.as_str()).await {
            Ok(answer) => {
                info!(answer_len = answer.len(), "search completed");
                HandlerOutcome::Answer(answer)
            }
            Err(error) => {
                warn!(%error, "search failed");
                HandlerOutcome::Error(self.map_error(error))
            }
        }
    }

    fn map_error(&self, error: SearchError) -> ErrorResponse {
        ErrorResponse::internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_wire_shape_is_bare_string() {
        let outcome = HandlerOutcome::Answer("42".to_string());
        assert_eq!(outcome.into_value(), json!("42"));
    }

    #[test]
    fn test_error_wire_shape_is_status_object() {
        let outcome = HandlerOutcome::Error(ErrorResponse::internal("boom".to_string()));
        assert_eq!(
            outcome.into_value(),
            json!({"statusCode": 500, "body": "boom"})
        );
    }

    #[test]
    fn test_error_response_serialization_uses_camel_case_status() {
        let error = ErrorResponse::internal("request failed".to_string());
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["statusCode"], 500);
        assert_eq!(value["body"], "request failed");
        assert!(value.get("status_code").is_none());
    }

    #[test]
    fn test_every_search_error_flattens_to_500() {
        let errors = vec![
            SearchError::Network("connection refused".to_string()),
            SearchError::Api {
                status: 429,
                body: "rate limited".to_string(),
            },
            SearchError::Decode("expected value".to_string()),
            SearchError::MissingAnswer,
        ];

        for error in errors {
            let message = error.to_string();
            let response = ErrorResponse::internal(message.clone());
            assert_eq!(response.status_code, 500);
            assert_eq!(response.body, message);
            assert!(!response.body.is_empty());
        }
    }
}
