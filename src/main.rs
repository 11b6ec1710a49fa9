//! # NPR Show Export
//!
//! Looks up an NPR show by (partial) name, pages through every story the
//! NPR API has for it and writes one CSV row per story.
//!
//! ## Usage
//!
//! ```sh
//! npr_show_export -k YOUR_KEY -s "fresh air" -f fresh_air.csv
//! ```
//!
//! ## Pipeline
//!
//! 1. **Resolve**: fetch the shows list and pick the first title containing the name
//! 2. **Page**: request stories in batches from offset 1 until a short batch
//! 3. **Extract**: title, short link, mini teaser, teaser, thumbnail, date
//! 4. **Write**: append each row to the CSV file (no header)
//!
//! Requests are made one at a time; any network, parse or extraction error
//! ends the run with a non-zero exit status.

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod error;
mod export;
mod extract;
mod models;
mod npr;
mod outputs;
mod utils;

#[cfg(test)]
mod test_support;

use api::HttpFetcher;
use cli::{Cli, Config};
use export::export_show;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    // Missing required arguments exit here, before any request is made.
    let args = Cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Export failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let config = Config::try_from(args)?;
    debug!(
        show_name = %config.show_name,
        filename = %config.filename.display(),
        batch_size = config.batch_size,
        skip_malformed = config.skip_malformed,
        "Parsed configuration"
    );

    let fetcher = HttpFetcher::new()?;
    let summary = export_show(&fetcher, &config).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        pages = summary.pages,
        stories = summary.stories,
        rows = summary.rows_written,
        skipped = summary.skipped,
        "Execution complete"
    );
    Ok(())
}
