//! Docs Scraper Core Library
//!
//! This library mirrors documentation published as linked Markdown files
//! (`llms.txt` indexes) into a navigable local directory tree, one
//! subdirectory per source.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Index link extraction and docs map parsing
//! - [`paths`] - Relative output path derivation
//! - [`source`] - Source descriptors and path filters
//! - [`download`] - HTTP fetching of text documents
//! - [`persist`] - Writing documents and purging previous output
//! - [`integrity`] - Zero-byte output detection
//! - [`scrape`] - The sequential run orchestrator

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod integrity;
pub mod parser;
pub mod paths;
pub mod persist;
pub mod scrape;
pub mod source;
mod user_agent;

// Re-export commonly used types
pub use download::{FetchError, Fetcher, HttpClient};
pub use parser::{SectionMap, extract_links, normalize_section, parse_section_map};
pub use paths::{FALLBACK_SECTION, derive_path};
pub use persist::{PersistError, save};
pub use scrape::{
    RunReport, RunTotals, ScrapeConfig, ScrapeError, ScrapeEvent, ScrapeObserver, Scraper,
    SilentObserver, SourceTally,
};
pub use source::{PathFilter, Source, builtin_sources};
