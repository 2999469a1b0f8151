//! Per-source counters and the final run report.

use std::path::PathBuf;

/// Result of handling one linked page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Fetched and written.
    Saved,
    /// Excluded by the source filter.
    Skipped,
    /// Fetch or write failed.
    Failed,
}

/// Succeeded/failed/skipped counts for one source.
///
/// Counts only grow while a source is processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceTally {
    succeeded: usize,
    failed: usize,
    skipped: usize,
}

impl SourceTally {
    /// Creates a tally with zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally for a source whose index could not be fetched: one failure.
    #[must_use]
    pub fn index_failure() -> Self {
        Self {
            failed: 1,
            ..Self::default()
        }
    }

    /// Counts one page outcome.
    pub fn record(&mut self, outcome: DocumentOutcome) {
        match outcome {
            DocumentOutcome::Saved => self.succeeded += 1,
            DocumentOutcome::Skipped => self.skipped += 1,
            DocumentOutcome::Failed => self.failed += 1,
        }
    }

    /// Returns the number of pages written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Returns the number of failures, including an index failure.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Returns the number of pages excluded by the filter.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl FromIterator<DocumentOutcome> for SourceTally {
    fn from_iter<I: IntoIterator<Item = DocumentOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut tally, outcome| {
            tally.record(outcome);
            tally
        })
    }
}

/// Tally of one source, labelled with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Source directory name.
    pub name: String,
    /// Counts for the source.
    pub tally: SourceTally,
}

/// Sums of all source tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    /// Pages written.
    pub succeeded: usize,
    /// Page and index failures.
    pub failed: usize,
    /// Pages excluded by filters.
    pub skipped: usize,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Per-source tallies in processing order.
    pub sources: Vec<SourceReport>,
    /// Zero-byte `.md` files found under the output root after the run, sorted.
    pub empty_files: Vec<PathBuf>,
}

impl RunReport {
    /// Sums the per-source tallies.
    #[must_use]
    pub fn totals(&self) -> RunTotals {
        self.sources
            .iter()
            .fold(RunTotals::default(), |totals, report| RunTotals {
                succeeded: totals.succeeded + report.tally.succeeded(),
                failed: totals.failed + report.tally.failed(),
                skipped: totals.skipped + report.tally.skipped(),
            })
    }

    /// Returns the tally recorded for `name`, if that source ran.
    #[must_use]
    pub fn tally(&self, name: &str) -> Option<&SourceTally> {
        self.sources
            .iter()
            .find(|report| report.name == name)
            .map(|report| &report.tally)
    }

    /// True when nothing failed and no empty files were written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.totals().failed == 0 && self.empty_files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, tally: SourceTally) -> SourceReport {
        SourceReport {
            name: name.to_string(),
            tally,
        }
    }

    #[test]
    fn test_tally_collects_outcomes() {
        let tally: SourceTally = [
            DocumentOutcome::Saved,
            DocumentOutcome::Skipped,
            DocumentOutcome::Failed,
            DocumentOutcome::Saved,
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.succeeded(), 2);
        assert_eq!(tally.failed(), 1);
        assert_eq!(tally.skipped(), 1);
    }

    #[test]
    fn test_index_failure_counts_one_failure() {
        let tally = SourceTally::index_failure();
        assert_eq!(tally.succeeded(), 0);
        assert_eq!(tally.failed(), 1);
        assert_eq!(tally.skipped(), 0);
    }

    #[test]
    fn test_totals_sum_sources() {
        let run = RunReport {
            sources: vec![
                report("A", [DocumentOutcome::Saved, DocumentOutcome::Skipped].into_iter().collect()),
                report("B", SourceTally::index_failure()),
            ],
            empty_files: Vec::new(),
        };

        assert_eq!(
            run.totals(),
            RunTotals {
                succeeded: 1,
                failed: 1,
                skipped: 1
            }
        );
        assert_eq!(run.tally("B"), Some(&SourceTally::index_failure()));
        assert!(run.tally("C").is_none());
    }

    #[test]
    fn test_success_requires_no_failures_and_no_empty_files() {
        let clean = RunReport {
            sources: vec![report("A", [DocumentOutcome::Saved].into_iter().collect())],
            empty_files: Vec::new(),
        };
        assert!(clean.is_success());

        let with_empty = RunReport {
            empty_files: vec![PathBuf::from("out/A/x.md")],
            ..clean.clone()
        };
        assert!(!with_empty.is_success());

        let with_failure = RunReport {
            sources: vec![report("A", [DocumentOutcome::Failed].into_iter().collect())],
            empty_files: Vec::new(),
        };
        assert!(!with_failure.is_success());
    }

    #[test]
    fn test_empty_run_is_success() {
        assert!(RunReport::default().is_success());
    }
}
