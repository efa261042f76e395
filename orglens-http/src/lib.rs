//! Outbound page fetcher with safe logging and a fixed timeout.
//!
//! One invocation issues exactly one GET request: there is no retry loop and
//! no backoff. A network failure, a timeout, or a non-success status all
//! surface immediately as [`FetchError`], which callers fold into a generic
//! processing failure.
//!
//! Observability: structured `tracing` events are emitted for request start
//! (`fetch.request.start`), completion (`fetch.response`), and failures
//! (`fetch.error`), keyed by a per-request id.

use std::time::Duration;

use reqwest::{Client, StatusCode, redirect};
use thiserror::Error;
use url::Url;

/// Total budget for the single outbound GET.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REDIRECT_LIMIT: usize = 5;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; orglens/0.1)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Fetches raw HTML for a caller-supplied URL.
#[derive(Clone)]
pub struct PageFetcher {
    inner: Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let inner = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            timeout: FETCH_TIMEOUT,
        })
    }

    /// Override the default timeout; integration tests use short budgets.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.timeout = dur;
        self
    }

    /// Issue one GET and return the response body as text.
    ///
    /// Any non-success status is an error; partial or degraded responses are
    /// never returned.
    pub async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        let req_id = format!(
            "f{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );

        tracing::debug!(
            req_id = %req_id,
            host = url.domain().unwrap_or("-"),
            path = url.path(),
            timeout_ms = self.timeout.as_millis() as u64,
            "fetch.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = self
            .inner
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(req_id = %req_id, message = %e, "fetch.error");
                FetchError::Network {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(req_id = %req_id, %status, "fetch.error");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::warn!(req_id = %req_id, message = %e, "fetch.error");
            FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            req_id = %req_id,
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = body.len(),
            "fetch.response"
        );
        Ok(body)
    }
}
