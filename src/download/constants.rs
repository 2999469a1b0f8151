//! Constants for the download module (timeouts).

/// Connect timeout for every request (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Whole-request timeout for every request (30 seconds).
///
/// Index files and documents are small text files, so the same bound covers
/// connect, headers, and body.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
