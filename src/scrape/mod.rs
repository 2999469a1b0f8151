//! Run orchestration: purge, then fetch and store every source in order.
//!
//! # Overview
//!
//! For each [`Source`] the scraper fetches its index, extracts `.md` links,
//! loads the docs map when the source has one, and then handles each link in
//! turn: derive the relative path, apply the source filter, fetch, and save
//! under `<output_root>/<source name>/`. Failures of single pages are counted
//! and never stop the run. After the last source the whole output tree is
//! scanned for zero-byte Markdown files.
//!
//! Work is strictly sequential: one source, one request at a time.
//!
//! # Example
//!
//! ```no_run
//! use docs_scraper_core::download::HttpClient;
//! use docs_scraper_core::scrape::{ScrapeConfig, Scraper, SilentObserver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = Scraper::new(HttpClient::new()?, ScrapeConfig::new("./docs"));
//! let report = scraper.run(&mut SilentObserver).await?;
//! println!("{} pages saved", report.totals().succeeded);
//! # Ok(())
//! # }
//! ```

mod events;
mod tally;

pub use events::{ScrapeEvent, ScrapeObserver, SilentObserver};
pub use tally::{DocumentOutcome, RunReport, RunTotals, SourceReport, SourceTally};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::download::{FetchError, Fetcher, HttpClient};
use crate::integrity::find_empty_markdown;
use crate::parser::{SectionMap, extract_links, parse_section_map};
use crate::paths::{derive_path, is_contained};
use crate::persist::{self, PersistError};
use crate::source::{Source, builtin_sources};

/// Where to write and which sources to mirror.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Root directory holding one subdirectory per source.
    pub output_root: PathBuf,
    /// Sources in processing order.
    pub sources: Vec<Source>,
}

impl ScrapeConfig {
    /// Mirrors the built-in sources into `output_root`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            sources: builtin_sources(),
        }
    }

    /// Replaces the source list.
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }
}

/// Failure that stops the whole run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A previous source directory could not be removed.
    #[error("failed to purge previous output: {0}")]
    Purge(#[source] PersistError),

    /// The output tree could not be scanned for empty files.
    #[error("failed to scan {root} for empty files: {source}")]
    Scan {
        /// Output root being scanned.
        root: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single page; counted, never fatal.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The page could not be fetched or decoded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page could not be written.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// The derived path would land outside the source directory.
    #[error("refusing to write outside the source directory: {path}")]
    UnsafePath {
        /// The offending relative path.
        path: String,
    },
}

/// Sequential documentation scraper.
#[derive(Debug)]
pub struct Scraper<F = HttpClient> {
    fetcher: F,
    config: ScrapeConfig,
}

impl<F: Fetcher> Scraper<F> {
    /// Creates a scraper using `fetcher` for every request.
    #[must_use]
    pub fn new(fetcher: F, config: ScrapeConfig) -> Self {
        Self { fetcher, config }
    }

    /// Returns the fetcher used for every request.
    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs every source and returns the tallies plus any empty files.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] only when a previous source directory cannot be
    /// purged or the output tree cannot be scanned. Index, docs map, and page
    /// failures are reported through `observer` and the returned report.
    pub async fn run(
        &self,
        observer: &mut impl ScrapeObserver,
    ) -> Result<RunReport, ScrapeError> {
        let root = &self.config.output_root;
        let names: Vec<&str> = self.config.sources.iter().map(|s| s.name.as_str()).collect();
        info!(root = %root.display(), sources = names.len(), "scrape starting");

        let purged = persist::purge_source_dirs(root, &names)
            .await
            .map_err(ScrapeError::Purge)?;
        for path in &purged {
            observer.on_event(&ScrapeEvent::Purged { path });
        }

        let total = self.config.sources.len();
        let mut sources = Vec::with_capacity(total);
        for (index, source) in self.config.sources.iter().enumerate() {
            observer.on_event(&ScrapeEvent::SourceStarted {
                position: index + 1,
                total,
                name: &source.name,
            });
            let tally = self.scrape_source(source, observer).await;
            sources.push(SourceReport {
                name: source.name.clone(),
                tally,
            });
        }

        let empty_files = find_empty_markdown(root).map_err(|source| ScrapeError::Scan {
            root: root.clone(),
            source,
        })?;

        let report = RunReport {
            sources,
            empty_files,
        };
        let totals = report.totals();
        info!(
            succeeded = totals.succeeded,
            failed = totals.failed,
            skipped = totals.skipped,
            empty_files = report.empty_files.len(),
            "scrape complete"
        );
        Ok(report)
    }

    #[instrument(skip(self, source, observer), fields(source = %source.name))]
    async fn scrape_source(
        &self,
        source: &Source,
        observer: &mut impl ScrapeObserver,
    ) -> SourceTally {
        let urls = match self.fetcher.fetch_text(&source.index_url).await {
            Ok(text) => extract_links(&text),
            Err(error) => {
                warn!(url = %source.index_url, error = %error, "index fetch failed");
                observer.on_event(&ScrapeEvent::IndexFailed {
                    name: &source.name,
                    error: &error,
                });
                return SourceTally::index_failure();
            }
        };
        observer.on_event(&ScrapeEvent::LinksFound {
            name: &source.name,
            count: urls.len(),
        });

        let section_map = match &source.section_map_url {
            Some(url) => Some(self.load_section_map(source, url, observer).await),
            None => None,
        };

        let source_dir = self.config.output_root.join(&source.name);
        let total = urls.len();
        let mut tally = SourceTally::new();
        for (index, url) in urls.iter().enumerate() {
            let position = index + 1;
            let rel_path = derive_path(url, &source.strip_prefix, section_map.as_ref());

            if source.filter.excludes(&rel_path) {
                debug!(url = %url, rel_path = %rel_path, "skipped by filter");
                observer.on_event(&ScrapeEvent::Skipped {
                    position,
                    total,
                    rel_path: &rel_path,
                });
                tally.record(DocumentOutcome::Skipped);
                continue;
            }

            match self.store_document(&source_dir, url, &rel_path).await {
                Ok(()) => {
                    observer.on_event(&ScrapeEvent::Saved {
                        position,
                        total,
                        rel_path: &rel_path,
                    });
                    tally.record(DocumentOutcome::Saved);
                }
                Err(error) => {
                    debug!(url = %url, rel_path = %rel_path, error = %error, "document failed");
                    observer.on_event(&ScrapeEvent::Failed {
                        position,
                        total,
                        rel_path: &rel_path,
                        error: &error,
                    });
                    tally.record(DocumentOutcome::Failed);
                }
            }
        }

        observer.on_event(&ScrapeEvent::SourceFinished {
            name: &source.name,
            tally: &tally,
        });
        tally
    }

    async fn load_section_map(
        &self,
        source: &Source,
        url: &str,
        observer: &mut impl ScrapeObserver,
    ) -> SectionMap {
        match self.fetcher.fetch_text(url).await {
            Ok(text) => parse_section_map(&text),
            Err(error) => {
                warn!(url = %url, error = %error, "docs map fetch failed, using misc");
                observer.on_event(&ScrapeEvent::SectionMapFailed {
                    name: &source.name,
                    error: &error,
                });
                SectionMap::new()
            }
        }
    }

    async fn store_document(
        &self,
        source_dir: &Path,
        url: &str,
        rel_path: &str,
    ) -> Result<(), DocumentError> {
        if !is_contained(rel_path) {
            return Err(DocumentError::UnsafePath {
                path: rel_path.to_string(),
            });
        }
        let content = self.fetcher.fetch_text(url).await?;
        persist::save(&source_dir.join(rel_path), &content).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_builtin_sources() {
        let config = ScrapeConfig::new("/tmp/out");
        assert_eq!(config.output_root, PathBuf::from("/tmp/out"));
        assert_eq!(config.sources, builtin_sources());
    }

    #[test]
    fn test_config_with_sources_replaces_list() {
        let config = ScrapeConfig::new("/tmp/out")
            .with_sources(vec![Source::new("Only", "https://h/llms.txt", "https://h/")]);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].name, "Only");
    }

    #[test]
    fn test_unsafe_path_error_names_path() {
        let error = DocumentError::UnsafePath {
            path: "../x.md".to_string(),
        };
        assert!(error.to_string().contains("../x.md"));
    }
}
