//! The single outbound call to the downstream service.
//!
//! # Responsibilities
//! - Build the downstream URL as `<base><matched path>`
//! - Issue exactly one GET with a bounded timeout
//! - Classify failures (URL construction, transport, body read)
//!
//! # Design Decisions
//! - The base URL is concatenated with the inbound path, not resolved with
//!   relative-reference semantics, so a base carrying its own path segment is
//!   preserved
//! - No retries: a failure is terminal for the current request
//! - One shared client across requests; the timeout applies per attempt

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

use crate::relay::envelope::DownstreamPayload;

/// Failure modes of one relay attempt. Each maps to an HTTP 500 error
/// envelope on the inbound side.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to create request: invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to send request to API2: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response from API2: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issues the outbound GET for each inbound request.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder targeting `base_url` with a per-call `timeout`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// The downstream URL for an inbound path.
    pub fn target_for(&self, path: &str) -> Result<Url, RelayError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| RelayError::InvalidUrl { url: raw, source })
    }

    /// Forward one inbound request: a single GET, awaited to completion.
    pub async fn fetch(&self, path: &str) -> Result<DownstreamPayload, RelayError> {
        let url = self.target_for(path)?;

        tracing::info!(url = %url, "Forwarding request to API2");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(RelayError::Request)?;

        let body = response.text().await.map_err(RelayError::Body)?;

        tracing::debug!(bytes = body.len(), "Received response from API2");
        Ok(DownstreamPayload::from_body(&body))
    }
}
