//! Progress events emitted while a run is in flight.

use std::path::Path;

use super::tally::SourceTally;

/// Something the scraper did that the operator may want to see.
///
/// Positions are 1-based.
#[derive(Debug)]
pub enum ScrapeEvent<'a> {
    /// A previous run's source directory was removed.
    Purged { path: &'a Path },
    /// Work on a source began.
    SourceStarted {
        position: usize,
        total: usize,
        name: &'a str,
    },
    /// The source's index could not be fetched; no documents were attempted.
    IndexFailed {
        name: &'a str,
        error: &'a dyn std::error::Error,
    },
    /// Links were extracted from the index.
    LinksFound { name: &'a str, count: usize },
    /// The docs map could not be fetched; pages fall back to `misc/`.
    SectionMapFailed {
        name: &'a str,
        error: &'a dyn std::error::Error,
    },
    /// The source filter excluded a page.
    Skipped {
        position: usize,
        total: usize,
        rel_path: &'a str,
    },
    /// A page was fetched and written.
    Saved {
        position: usize,
        total: usize,
        rel_path: &'a str,
    },
    /// A page could not be fetched or written.
    Failed {
        position: usize,
        total: usize,
        rel_path: &'a str,
        error: &'a dyn std::error::Error,
    },
    /// Every page of a source was processed.
    SourceFinished {
        name: &'a str,
        tally: &'a SourceTally,
    },
}

/// Receives [`ScrapeEvent`]s in the order they happen.
pub trait ScrapeObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &ScrapeEvent<'_>);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ScrapeObserver for SilentObserver {
    fn on_event(&mut self, _event: &ScrapeEvent<'_>) {}
}
