//! Invocation event decoding
//!
//! Events arrive as loosely structured JSON; the only path the adapter reads
//! is `node.inputs[0].value`. Extraction is explicit optional chaining: any
//! structural mismatch yields `None`, and the handler substitutes the
//! configured fallback query. Absence is a value here, not an error.

use serde_json::Value;

/// Query text for one invocation, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedQuery {
    /// Extracted from `node.inputs[0].value`.
    Provided(String),
    /// Event did not carry a usable query; the fallback applies.
    Default(String),
}

impl ExtractedQuery {
    /// The query text to send, regardless of source.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedQuery::Provided(q) | ExtractedQuery::Default(q) => q,
        }
    }

}

/// Read `node.inputs[0].value` from an invocation event.
///
/// Returns `None` for every failure mode identically: missing keys, wrong
/// types, an empty `inputs` list, or a non-string `value`.
pub fn extract_query(event: &Value) -> Option<&str> {
    event
        .get("node")?
        .get("inputs")?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()
}

/// Extract the query or fall back to `default_query`.
pub fn query_or_default(event: &Value, default_query: &str) -> ExtractedQuery {
    match extract_query(event) {
        Some(q) => ExtractedQuery::Provided(q.to_string()),
        None => ExtractedQuery::Default(default_query.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "What is AWS Lambda?";

    #[test]
    fn test_extract_query_happy_path() {
        let event = json!({"node": {"inputs": [{"value": "quantum computing"}]}});
        assert_eq!(extract_query(&event), Some("quantum computing"));
    }

    #[test]
    fn test_extract_query_ignores_extra_inputs() {
        let event = json!({
            "node": {"inputs": [{"value": "first"}, {"value": "second"}]}
        });
        assert_eq!(extract_query(&event), Some("first"));
    }

    #[test]
    fn test_extract_query_missing_node() {
        assert_eq!(extract_query(&json!({})), None);
        assert_eq!(extract_query(&json!({"other": 1})), None);
    }

    #[test]
    fn test_extract_query_missing_inputs() {
        let event = json!({"node": {}});
        assert_eq!(extract_query(&event), None);
    }

    #[test]
    fn test_extract_query_empty_inputs() {
        let event = json!({"node": {"inputs": []}});
        assert_eq!(extract_query(&event), None);
    }

    #[test]
    fn test_extract_query_inputs_not_a_list() {
        let event = json!({"node": {"inputs": {"value": "x"}}});
        assert_eq!(extract_query(&event), None);
    }

    #[test]
    fn test_extract_query_missing_value() {
        let event = json!({"node": {"inputs": [{"name": "query"}]}});
        assert_eq!(extract_query(&event), None);
    }

    #[test]
    fn test_extract_query_non_string_value() {
        let event = json!({"node": {"inputs": [{"value": 42}]}});
        assert_eq!(extract_query(&event), None);
    }

    #[test]
    fn test_extract_query_event_not_an_object() {
        assert_eq!(extract_query(&json!("just a string")), None);
        assert_eq!(extract_query(&json!(null)), None);
        assert_eq!(extract_query(&json!([1, 2, 3])), None);
    }

    #[test]
    fn test_query_or_default_provided() {
        let event = json!({"node": {"inputs": [{"value": "rust async"}]}});
        let query = query_or_default(&event, FALLBACK);
        assert_eq!(query, ExtractedQuery::Provided("rust async".to_string()));
        assert_eq!(query.as_str(), "rust async");
    }

    #[test]
    fn test_query_or_default_substitutes_fallback() {
        let query = query_or_default(&json!({}), FALLBACK);
        assert_eq!(query, ExtractedQuery::Default(FALLBACK.to_string()));
        assert_eq!(query.as_str(), FALLBACK);
    }

    #[test]
    fn test_query_or_default_is_stateless() {
        // Same malformed event twice must yield the same substitution.
        let event = json!({"node": {"inputs": []}});
        let first = query_or_default(&event, FALLBACK);
        let second = query_or_default(&event, FALLBACK);
        assert_eq!(first, second);
        assert_eq!(second.as_str(), FALLBACK);
    }
}
