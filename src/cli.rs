//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Mirror Anthropic documentation into a navigable directory tree.
///
/// Scrapes docs from platform.claude.com, modelcontextprotocol.io, and
/// code.claude.com. Each source's directory under OUTPUT_PATH is deleted and
/// rebuilt on every run; anything else in OUTPUT_PATH is left alone.
#[derive(Parser, Debug)]
#[command(name = "docs-scraper")]
#[command(author, version, about)]
pub struct Args {
    /// Output directory
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Increase diagnostic log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable diagnostic log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log filter implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "off"
        } else {
            match self.verbose {
                0 => "error",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
