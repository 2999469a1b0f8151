//! Error types for the download module.
//!
//! Every variant carries the URL it concerns so a failure line printed by the
//! scraper can be diagnosed without re-running.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while fetching a text resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request did not complete within the fixed timeout.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-success HTTP response (redirects are followed by the transport).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body is not valid UTF-8.
    #[error("invalid UTF-8 in response from {url}: {source}")]
    Decode {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying decode error.
        #[source]
        source: FromUtf8Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error, promoting timeouts.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url: url.into() }
        } else {
            Self::Network {
                url: url.into(),
                source,
            }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a UTF-8 decode error.
    pub fn decode(url: impl Into<String>, source: FromUtf8Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_timeout_display() {
        let error = FetchError::Timeout {
            url: "https://example.com/llms.txt".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(msg.contains("https://example.com/llms.txt"));
    }

    #[test]
    fn test_fetch_error_http_status_display() {
        let error = FetchError::http_status("https://example.com/doc.md", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(msg.contains("https://example.com/doc.md"), "Expected URL in: {msg}");
    }

    #[test]
    fn test_fetch_error_decode_display() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = FetchError::decode("https://example.com/bad.md", source);
        let msg = error.to_string();
        assert!(msg.contains("invalid UTF-8"), "Expected decode message in: {msg}");
        assert!(msg.contains("https://example.com/bad.md"), "Expected URL in: {msg}");
    }
}
