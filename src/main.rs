//! CLI entry point for the docs scraper.

use std::process::ExitCode;

mod app;
mod cli;
mod output;

use app::exit_handler::ProcessExit;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match app::runtime::run_scraper().await {
        Ok(exit) => exit.into(),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ProcessExit::Failure.into()
        }
    }
}
