//! User-Agent string sent with every scraper request.
//!
//! Single source so index, docs map, and document traffic identify the tool
//! the same way.

/// Project URL advertised in the User-Agent (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/anthropics";

/// Product token and version advertised in the User-Agent.
const PRODUCT: &str = "AnthropicDocsScraper/1.0";

/// User-Agent for all scraper requests.
#[must_use]
pub(crate) fn scraper_user_agent() -> String {
    format!("{PRODUCT} ({PROJECT_UA_URL})")
}
