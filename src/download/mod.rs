//! HTTP fetching of index files and documents.
//!
//! # Features
//!
//! - One GET per call, no retries
//! - Fixed identifying User-Agent
//! - 30 second connect and request timeouts
//! - Strict UTF-8 decoding of response bodies
//! - Structured error types with the failing URL
//!
//! # Example
//!
//! ```no_run
//! use docs_scraper_core::download::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let text = client
//!     .fetch_text("https://code.claude.com/docs/llms.txt")
//!     .await?;
//! println!("Fetched {} bytes", text.len());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod error;

pub use client::HttpClient;
pub use error::FetchError;

use async_trait::async_trait;

/// Source of document text, keyed by URL.
///
/// [`HttpClient`] is the production implementation; the scraper is generic
/// over this trait so runs can be driven without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the resource cannot be retrieved or decoded.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl Fetcher for HttpClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        HttpClient::fetch_text(self, url).await
    }
}
