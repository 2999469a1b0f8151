//! Documentation map parsing: document stem -> section directory.
//!
//! The map is a Markdown document where `## Section` headers open a section
//! and `### [stem](url)` entries list the documents in it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

/// Mapping from document stem to normalized section name.
pub type SectionMap = HashMap<String, String>;

/// Bracketed label at the start of a `### ` entry line.
#[allow(clippy::expect_used)]
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### \[([^\]]+)\]").expect("docs map entry regex is valid") // Static pattern, safe to panic
});

const SECTION_MARKER: &str = "## ";
const ENTRY_MARKER: &str = "### ";

/// Converts a section title into a directory name.
///
/// Lowercases, replaces spaces with hyphens, then drops every character
/// outside `[a-z0-9-]`.
///
/// ```
/// use docs_scraper_core::parser::normalize_section;
///
/// assert_eq!(normalize_section("Getting Started"), "getting-started");
/// assert_eq!(normalize_section("SDKs & Tools!"), "sdks--tools");
/// ```
#[must_use]
pub fn normalize_section(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Parses the documentation map into a stem -> section mapping.
///
/// Entries seen before any section header, or under a header whose title
/// normalizes to nothing, are ignored. A stem listed twice keeps the section
/// of its last occurrence.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
#[must_use]
pub fn parse_section_map(text: &str) -> SectionMap {
    let mut mapping = SectionMap::new();
    let mut section: Option<String> = None;

    for line in text.lines() {
        if line.starts_with(SECTION_MARKER) && !line.starts_with(ENTRY_MARKER) {
            let normalized = normalize_section(line[SECTION_MARKER.len()..].trim());
            trace!(section = %normalized, "section header");
            section = Some(normalized);
        } else if line.starts_with("### [") {
            let Some(current) = section.as_deref().filter(|s| !s.is_empty()) else {
                continue;
            };
            if let Some(name) = ENTRY_PATTERN.captures(line).and_then(|c| c.get(1)) {
                mapping.insert(name.as_str().to_string(), current.to_string());
            }
        }
    }

    debug!(entries = mapping.len(), "parsed docs map");
    mapping
}
