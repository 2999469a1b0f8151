use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use docs_scraper_core::{HttpClient, ScrapeConfig, Scraper};
use tracing::{debug, info};

use crate::app::exit_handler::{ProcessExit, determine_exit_outcome};
use crate::app::terminal;
use crate::cli::Args;
use crate::output::{self, ConsoleObserver, INTERRUPT_NOTICE};

pub(crate) async fn run_scraper() -> Result<ProcessExit> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return Ok(exit_for_parse_error(&err)),
    };

    terminal::init_tracing(args.log_level());
    debug!(?args, "CLI arguments parsed");

    output::print_banner(&args.output_path);

    let client = HttpClient::new().context("failed to initialize HTTP client")?;
    let scraper = Scraper::new(client, ScrapeConfig::new(&args.output_path));
    let mut observer = ConsoleObserver;

    let interrupt = tokio::signal::ctrl_c();
    let Some(result) = run_until_interrupted(scraper.run(&mut observer), interrupt).await else {
        println!("\n\n{INTERRUPT_NOTICE}");
        return Ok(ProcessExit::Interrupted);
    };
    let report = result.context("scrape aborted")?;

    output::print_summary(&report);

    if report.empty_files.is_empty() {
        output::print_done();
    } else {
        output::print_empty_files(&report);
    }

    let exit = determine_exit_outcome(&report);
    info!(?exit, "scraper finished");
    Ok(exit)
}

/// Drives `run` until it finishes or `interrupt` resolves successfully.
///
/// Returns `None` when interrupted; `run` is dropped at its current await
/// point. A failing `interrupt` (no signal handler) leaves `run` to finish.
async fn run_until_interrupted<T>(
    run: impl Future<Output = T>,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Option<T> {
    tokio::select! {
        output = run => Some(output),
        Ok(()) = interrupt => None,
    }
}

/// Prints clap's message and maps it to an exit status: help and version
/// succeed, every argument error is a general failure.
fn exit_for_parse_error(err: &clap::Error) -> ProcessExit {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ProcessExit::Success,
        _ => ProcessExit::Failure,
    }
}
