//! Exit code logic for the scraper process.
//!
//! Single responsibility: map a run's outcome to the process exit status.

use std::process::ExitCode;

use docs_scraper_core::RunReport;

/// Process outcome, mapped 1:1 to an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Every page fetched, nothing empty.
    Success,
    /// A page or index failed, empty files were written, or the run aborted.
    Failure,
    /// The operator pressed Ctrl-C.
    Interrupted,
}

impl ProcessExit {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Interrupted => 130,
        }
    }
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Determines the process exit outcome from a finished run.
pub(crate) fn determine_exit_outcome(report: &RunReport) -> ProcessExit {
    if report.is_success() {
        ProcessExit::Success
    } else {
        ProcessExit::Failure
    }
}
