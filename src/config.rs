// src/config.rs
// =============================================================================
// Settings for talking to the analysis service.
//
// The base URL is handed to the client when it is built; nothing reads a
// global. It may carry a path prefix ("http://host:8000/v1"), endpoint paths
// are appended to it as-is.
// =============================================================================

use std::time::Duration;

/// Default service location (the FastAPI dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the base URL
pub const BASE_URL_ENV: &str = "TRUSTLENS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, optionally with a path prefix
    pub base_url: String,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
