//! Text parsing for index files and the documentation map.
//!
//! Both parsers are pure functions over Markdown text; neither touches the
//! network or the filesystem.
//!
//! # Example
//!
//! ```
//! use docs_scraper_core::parser::{extract_links, parse_section_map};
//!
//! let links = extract_links("- [Intro](https://example.com/docs/intro.md)");
//! assert_eq!(links, vec!["https://example.com/docs/intro.md".to_string()]);
//!
//! let map = parse_section_map("## Getting Started\n### [intro](https://example.com/intro.md)");
//! assert_eq!(map.get("intro").map(String::as_str), Some("getting-started"));
//! ```

mod links;
mod section_map;

pub use links::extract_links;
pub use section_map::{SectionMap, normalize_section, parse_section_map};
