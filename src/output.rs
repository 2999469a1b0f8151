//! CLI output formatting and display helpers.
//!
//! Progress and summaries go to stdout, errors and warnings to stderr. Both
//! streams flush per line.

use std::path::Path;

use docs_scraper_core::scrape::{RunReport, ScrapeEvent, ScrapeObserver, SourceTally};

/// Tool name shown in the banner.
pub const BANNER: &str = "Anthropic Documentation Scraper";

/// Width of the rule above the summary.
const RULE_WIDTH: usize = 60;

/// How many empty files are listed before the rest are elided.
pub const EMPTY_FILE_LISTING_LIMIT: usize = 5;

/// Notice printed when the operator interrupts the run.
pub const INTERRUPT_NOTICE: &str = "Interrupted by user (CTRL-C)";

/// Formats the `<ok> OK, <fail> FAIL, <skip> SKIP` triple.
pub fn format_counts(succeeded: usize, failed: usize, skipped: usize) -> String {
    format!("{succeeded} OK, {failed} FAIL, {skipped} SKIP")
}

fn format_tally(tally: &SourceTally) -> String {
    format_counts(tally.succeeded(), tally.failed(), tally.skipped())
}

/// Formats one console line for a progress event, tagged with its stream.
pub fn format_event(event: &ScrapeEvent<'_>) -> ConsoleLine {
    match event {
        ScrapeEvent::Purged { path } => {
            ConsoleLine::Out(format!("Purging {}/...", path.display()))
        }
        ScrapeEvent::SourceStarted {
            position,
            total,
            name,
        } => ConsoleLine::Out(format!("[{position}/{total}] {name}")),
        ScrapeEvent::IndexFailed { error, .. } => {
            ConsoleLine::Err(format!("  ERROR: Failed to fetch index: {error}"))
        }
        ScrapeEvent::LinksFound { count, .. } => ConsoleLine::Out(format!("  Found {count} URLs")),
        ScrapeEvent::SectionMapFailed { error, .. } => ConsoleLine::Err(format!(
            "  WARNING: Failed to fetch docs map, using misc/: {error}"
        )),
        ScrapeEvent::Skipped {
            position,
            total,
            rel_path,
        } => ConsoleLine::Out(format!("  [{position}/{total}] SKIP {rel_path}")),
        ScrapeEvent::Saved {
            position,
            total,
            rel_path,
        } => ConsoleLine::Out(format!("  [{position}/{total}] OK   {rel_path}")),
        ScrapeEvent::Failed {
            position,
            total,
            rel_path,
            error,
        } => ConsoleLine::Err(format!("  [{position}/{total}] FAIL {rel_path}: {error}")),
        ScrapeEvent::SourceFinished { tally, .. } => {
            ConsoleLine::Out(format!("  -> {}\n", format_tally(tally)))
        }
    }
}

/// A line of console output and the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Standard output.
    Out(String),
    /// Standard error.
    Err(String),
}

impl ConsoleLine {
    fn print(&self) {
        match self {
            Self::Out(line) => println!("{line}"),
            Self::Err(line) => eprintln!("{line}"),
        }
    }
}

/// Prints scrape progress to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ScrapeObserver for ConsoleObserver {
    fn on_event(&mut self, event: &ScrapeEvent<'_>) {
        format_event(event).print();
    }
}

/// Prints the startup banner.
pub fn print_banner(output_root: &Path) {
    println!("{BANNER}");
    println!("Output: {}/\n", output_root.display());
}

/// Returns the per-source and total summary lines.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec!["=".repeat(RULE_WIDTH), "Summary:".to_string()];
    for source in &report.sources {
        lines.push(format!("  {}: {}", source.name, format_tally(&source.tally)));
    }
    let totals = report.totals();
    lines.push(String::new());
    lines.push(format!(
        "TOTAL: {}",
        format_counts(totals.succeeded, totals.failed, totals.skipped)
    ));
    lines
}

/// Prints the run summary to stdout.
pub fn print_summary(report: &RunReport) {
    for line in summary_lines(report) {
        println!("{line}");
    }
}

/// Returns the empty-file error lines, listing at most
/// [`EMPTY_FILE_LISTING_LIMIT`] paths. Empty when there is nothing to report.
pub fn empty_file_lines(empty_files: &[impl AsRef<Path>]) -> Vec<String> {
    if empty_files.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("\nERROR: {} empty files found:", empty_files.len())];
    for path in empty_files.iter().take(EMPTY_FILE_LISTING_LIMIT) {
        lines.push(format!("  {}", path.as_ref().display()));
    }
    if empty_files.len() > EMPTY_FILE_LISTING_LIMIT {
        lines.push(format!(
            "  ... and {} more",
            empty_files.len() - EMPTY_FILE_LISTING_LIMIT
        ));
    }
    lines
}

/// Prints the empty-file report to stderr.
pub fn print_empty_files(report: &RunReport) {
    for line in empty_file_lines(&report.empty_files) {
        eprintln!("{line}");
    }
}

/// Prints the closing line of a clean run.
pub fn print_done() {
    println!("\nDone!");
}
