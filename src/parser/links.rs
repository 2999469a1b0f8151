//! Markdown `.md` link extraction from index documents.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

/// Markdown link whose target is an absolute `https://` URL ending in `.md`.
///
/// The label is non-greedy (stops at the first `]`); the URL runs up to the
/// closing `)` and must end with `.md` right before it.
#[allow(clippy::expect_used)]
static MD_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]\((https://[^)]+\.md)\)").expect("markdown link regex is valid") // Static pattern, safe to panic
});

/// Extracts unique `.md` link targets from index text, preserving order.
///
/// Duplicates are compared by exact string equality; the first occurrence
/// keeps its position and later repeats are dropped.
///
/// # Examples
///
/// ```
/// use docs_scraper_core::parser::extract_links;
///
/// let text = "[a](https://x/y.md) [b](https://x/z.md) [again](https://x/y.md)";
/// assert_eq!(extract_links(text), vec!["https://x/y.md", "https://x/z.md"]);
/// ```
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
#[must_use]
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for captures in MD_LINK_PATTERN.captures_iter(text) {
        let Some(url) = captures.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if seen.insert(url) {
            trace!(url, "found link");
            links.push(url.to_string());
        }
    }

    debug!(count = links.len(), "extracted links");
    links
}
