// src/api/error.rs
// =============================================================================
// The single error type every check call can fail with.
//
// The analysis service can fail us in three ways and we keep them apart in
// the type (so logs can tell them apart) while the UI shows them all the same
// way: one error panel with one message string.
//
// Error body contract:
//   The service is FastAPI, which reports failures as {"detail": "..."}.
//   Some deployments answer {"message": "..."} instead. `detail` wins when
//   both are present; when neither is a string we show "API error".
// =============================================================================

use serde_json::Value;
use thiserror::Error;

/// Message shown when a non-2xx body carries neither `detail` nor `message`.
pub const FALLBACK_API_MESSAGE: &str = "API error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client itself could not be set up; no request was made
    #[error("Cannot create HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// Network/transport failure (connection refused, DNS, TLS, timeout...)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    /// Display is the bare message so the error panel shows it verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body was not JSON, or not the JSON shape we expected
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a `Status` error from a parsed error body.
    pub fn from_error_body(status: u16, body: &Value) -> Self {
        ApiError::Status {
            status,
            message: error_message(body).to_string(),
        }
    }
}

/// Picks the human-readable message out of an error body.
///
/// FastAPI validation errors put an array in `detail`; only string values
/// count, anything else falls through to `message` and then the fallback.
pub fn error_message(body: &Value) -> &str {
    ["detail", "message"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
        .unwrap_or(FALLBACK_API_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_is_used() {
        let body = json!({"detail": "Scraped content is empty"});
        assert_eq!(error_message(&body), "Scraped content is empty");
    }

    #[test]
    fn test_message_is_used_without_detail() {
        let body = json!({"message": "rate limited"});
        assert_eq!(error_message(&body), "rate limited");
    }

    #[test]
    fn test_detail_wins_over_message() {
        let body = json!({"detail": "from detail", "message": "from message"});
        assert_eq!(error_message(&body), "from detail");
    }

    #[test]
    fn test_non_string_detail_falls_through() {
        let body = json!({"detail": [{"loc": ["body", "url"], "msg": "field required"}]});
        assert_eq!(error_message(&body), FALLBACK_API_MESSAGE);

        let body = json!({"detail": [1, 2], "message": "bad request"});
        assert_eq!(error_message(&body), "bad request");
    }

    #[test]
    fn test_client_setup_is_not_a_network_error() {
        // RequestBuilder::build is the easy way to get a builder-kind reqwest::Error
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = ApiError::ClientSetup(source);

        assert!(err.to_string().starts_with("Cannot create HTTP client: "));
        assert!(!err.to_string().contains("Network error"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_error_displays_bare_message() {
        let err = ApiError::from_error_body(500, &json!({}));
        assert_eq!(err.to_string(), "API error");
        assert_eq!(err.status(), Some(500));
    }
}
