//! HTTP fetch seam for the manifest loader.
//!
//! [`ManifestFetch`] is the injectable "GET this URL and give me JSON"
//! capability. [`HttpFetch`] is the production implementation over
//! [`reqwest`]; tests substitute in-memory fakes.

use std::time::Duration;

use async_trait::async_trait;

/// HTTP request timeout for a single manifest fetch, so a hung fetch
/// cannot stall a dispatch cycle indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the fetch layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx, non-404 status code.
    #[error("Fetch returned HTTP {0}")]
    HttpStatus(u16),
}

/// Injectable HTTP GET capability.
///
/// Implementations report "resource does not exist" as `Ok(None)` so the
/// loader can distinguish an absent manifest (tolerated) from a failed
/// fetch (propagated).
#[async_trait]
pub trait ManifestFetch: Send + Sync {
    /// GET `url` and parse the response body as JSON.
    ///
    /// Returns `Ok(None)` when the resource does not exist.
    async fn get_json(&self, url: &str) -> Result<Option<serde_json::Value>, FetchError>;
}

/// Production fetch over a pooled [`reqwest::Client`].
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// Create a fetcher reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestFetch for HttpFetch {
    async fn get_json(&self, url: &str) -> Result<Option<serde_json::Value>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(url, "Resource not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        Ok(Some(response.json().await?))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
