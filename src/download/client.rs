//! HTTP client wrapper for fetching text documents.
//!
//! This module provides the `HttpClient` struct which performs a single GET
//! per call with the scraper's User-Agent and fixed timeouts, returning the
//! body as strict UTF-8 text.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, instrument};

use super::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use super::error::FetchError;
use crate::user_agent;

/// HTTP client for fetching index files, the docs map, and documents.
///
/// Created once per run and reused for every request, taking advantage of
/// connection pooling. No retries are attempted.
///
/// # Example
///
/// ```no_run
/// use docs_scraper_core::download::HttpClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new()?;
/// let index = client.fetch_text("https://modelcontextprotocol.io/llms.txt").await?;
/// println!("{} bytes", index.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the default 30 second timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend or resolver cannot
    /// be initialized.
    pub fn new() -> Result<Self, FetchError> {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the client cannot be built.
    pub fn new_with_timeouts(
        connect_timeout_secs: u64,
        request_timeout_secs: u64,
    ) -> Result<Self, FetchError> {
        let client = base_client_builder(connect_timeout_secs, request_timeout_secs)
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self { client })
    }

    /// Fetches `url` with one GET request and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The request fails (network error, timeout)
    /// - The server returns a non-success status
    /// - The body is not valid UTF-8
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "non-success response");
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url, e))?;
        let text = String::from_utf8(body.to_vec()).map_err(|e| FetchError::decode(url, e))?;

        debug!(bytes = text.len(), "fetch complete");
        Ok(text)
    }
}

fn base_client_builder(connect_timeout_secs: u64, request_timeout_secs: u64) -> ClientBuilder {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(request_timeout_secs))
        .gzip(true)
        .user_agent(user_agent::scraper_user_agent())
}
