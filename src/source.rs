//! Documentation source descriptors and per-source path filters.

use std::sync::LazyLock;

use regex::Regex;

/// Documentation map used to sort Claude Code pages into sections.
pub const CLAUDE_CODE_DOCS_MAP_URL: &str =
    "https://code.claude.com/docs/en/claude_code_docs_map.md";

/// SDK reference languages excluded from the API source.
pub const SKIPPED_SDK_LANGUAGES: [&str; 4] = ["go", "java", "kotlin", "ruby"];

#[allow(clippy::expect_used)]
static SDK_LANGUAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^api/({})/", SKIPPED_SDK_LANGUAGES.join("|"));
    Regex::new(&pattern).expect("SDK language regex is valid") // Static pattern, safe to panic
});

/// Which derived paths a source refuses to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathFilter {
    /// Fetch every derived path.
    #[default]
    None,
    /// Skip `api/<lang>/...` pages for the languages in [`SKIPPED_SDK_LANGUAGES`].
    SkipSdkLanguages,
}

impl PathFilter {
    /// Returns true when `rel_path` must not be fetched.
    #[must_use]
    pub fn excludes(self, rel_path: &str) -> bool {
        match self {
            Self::None => false,
            Self::SkipSdkLanguages => SDK_LANGUAGE_PATTERN.is_match(rel_path),
        }
    }
}

/// One documentation origin: where its index lives and how its pages are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Directory name under the output root.
    pub name: String,
    /// URL of the `llms.txt` index listing every page.
    pub index_url: String,
    /// Prefix removed from page URLs to form relative paths.
    pub strip_prefix: String,
    /// Docs map that regroups pages into section directories, if any.
    pub section_map_url: Option<String>,
    /// Pages this source skips.
    pub filter: PathFilter,
}

impl Source {
    /// Creates a source with no docs map and no filter.
    pub fn new(
        name: impl Into<String>,
        index_url: impl Into<String>,
        strip_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            index_url: index_url.into(),
            strip_prefix: strip_prefix.into(),
            section_map_url: None,
            filter: PathFilter::None,
        }
    }

    /// Sets the docs map URL.
    #[must_use]
    pub fn with_section_map(mut self, url: impl Into<String>) -> Self {
        self.section_map_url = Some(url.into());
        self
    }

    /// Sets the path filter.
    #[must_use]
    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// The three documentation sources, in processing order.
#[must_use]
pub fn builtin_sources() -> Vec<Source> {
    vec![
        Source::new(
            "Claude-API-and-Agent-SDK",
            "https://platform.claude.com/llms.txt",
            "https://platform.claude.com/docs/en/",
        )
        .with_filter(PathFilter::SkipSdkLanguages),
        Source::new(
            "MCP",
            "https://modelcontextprotocol.io/llms.txt",
            "https://modelcontextprotocol.io/",
        ),
        Source::new(
            "Claude-Code",
            "https://code.claude.com/docs/llms.txt",
            "https://code.claude.com/docs/en/",
        )
        .with_section_map(CLAUDE_CODE_DOCS_MAP_URL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_filter_skips_listed_languages() {
        let filter = PathFilter::SkipSdkLanguages;
        assert!(filter.excludes("api/go/client.md"));
        assert!(filter.excludes("api/java/messages/create.md"));
        assert!(filter.excludes("api/kotlin/x.md"));
        assert!(filter.excludes("api/ruby/x.md"));
    }

    #[test]
    fn test_sdk_filter_keeps_other_paths() {
        let filter = PathFilter::SkipSdkLanguages;
        assert!(!filter.excludes("api/python/client.md"));
        assert!(!filter.excludes("api/golang/client.md"));
        assert!(!filter.excludes("api/go"));
        assert!(!filter.excludes("docs/api/go/client.md"));
        assert!(!filter.excludes("build-with-claude/overview.md"));
    }

    #[test]
    fn test_no_filter_excludes_nothing() {
        assert!(!PathFilter::None.excludes("api/go/client.md"));
    }

    #[test]
    fn test_builtin_sources_order_and_policies() {
        let sources = builtin_sources();
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Claude-API-and-Agent-SDK", "MCP", "Claude-Code"]);

        assert_eq!(sources[0].filter, PathFilter::SkipSdkLanguages);
        assert!(sources[0].section_map_url.is_none());
        assert_eq!(sources[1].filter, PathFilter::None);
        assert!(sources[1].section_map_url.is_none());
        assert_eq!(
            sources[2].section_map_url.as_deref(),
            Some(CLAUDE_CODE_DOCS_MAP_URL)
        );
    }

    #[test]
    fn test_builtin_prefixes_are_prefixes_of_their_hosts() {
        for source in builtin_sources() {
            let host = source
                .index_url
                .split('/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/");
            assert!(
                source.strip_prefix.starts_with(&host),
                "{} prefix {} should live on {host}",
                source.name,
                source.strip_prefix
            );
        }
    }
}
