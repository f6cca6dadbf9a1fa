// src/api/client.rs
// =============================================================================
// Thin client for the content-analysis service.
//
// Every check is the same round trip:
// 1. POST {base_url}{endpoint} with body {"url": "..."}
// 2. Parse the body as JSON (whatever the status code)
// 3. 2xx -> hand back the JSON, anything else -> ApiError::Status
//
// There are no retries and no cancellation here. Superseding an in-flight
// request is the view controller's job.
// =============================================================================

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::ApiError;
use super::types::{CheckRequest, Endpoint};
use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct ApiClient {
    // Stored without a trailing slash so endpoint paths can be appended
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Builds a client for the service described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let parsed = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(ApiError::ClientSetup)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Runs one check and returns the raw JSON payload.
    ///
    /// `url` is forwarded untouched; the service decides whether it is valid.
    pub async fn call(&self, endpoint: Endpoint, url: &str) -> Result<Value, ApiError> {
        let target = self.endpoint_url(endpoint);
        debug!(endpoint = %target, url = %url, "Sending check request");

        let response = self
            .client
            .post(&target)
            .json(&CheckRequest { url: url.to_string() })
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if status.is_success() {
            debug!(endpoint = %target, status = status.as_u16(), "Check request succeeded");
            Ok(body)
        } else {
            let err = ApiError::from_error_body(status.as_u16(), &body);
            debug!(endpoint = %target, status = status.as_u16(), error = %err, "Check request rejected");
            Err(err)
        }
    }

    /// Runs one check and decodes the payload into `R`.
    ///
    /// Returns the raw payload too, so callers can print it as received.
    pub async fn check<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
    ) -> Result<(R, Value), ApiError> {
        let raw = self.call(endpoint, url).await?;
        let typed = serde_json::from_value(raw.clone())?;
        Ok((typed, raw))
    }
}
