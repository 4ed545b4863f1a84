//! # Feed Digest
//!
//! A daily pipeline that fetches configured RSS/Atom feeds, keeps the
//! articles published yesterday in a fixed time zone, and writes the JSON
//! digest the Yesterday in Design front end serves.
//!
//! ## Features
//!
//! - Fetches every configured source concurrently; a dead feed never sinks the run
//! - Filters items to yesterday's zone-local calendar day, honoring DST rules
//! - Archives a raw per-source snapshot of every run, errors included
//! - Writes the daily payload to a canonical and a published location
//! - Regenerates a stored day's summary via the `resummarize` subcommand
//!
//! ## Usage
//!
//! ```sh
//! feed_digest fetch
//! feed_digest resummarize 2025-05-06
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Configure**: Load the ordered source list and check output directories
//! 2. **Fetch**: Download all feeds concurrently and extract yesterday's items
//! 3. **Merge**: Flatten the survivors, compute stats, generate the summary
//! 4. **Output**: Write the raw snapshot and the daily payload files

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod aggregator;
mod cli;
mod config;
mod feed;
mod models;
mod outputs;
mod sanitize;
mod summary;
mod utils;
mod window;

use aggregator::OutputPaths;
use cli::{Cli, Command};
use summary::DigestSummary;
use utils::ensure_writable_dir;
use window::TimeWindow;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("feed_digest starting up");

    let args = Cli::parse();
    debug!(?args.command, "Parsed CLI arguments");

    let outcome = match args.command {
        Command::Fetch {
            sources,
            raw_dir,
            daily_dir,
            public_dir,
            timezone,
            timeout_secs,
        } => {
            let paths = OutputPaths {
                raw_dir,
                daily_dir,
                public_dir,
            };
            fetch(&sources, paths, timezone, timeout_secs).await
        }
        Command::Resummarize {
            date,
            daily_dir,
            timezone,
        } => resummarize(date, &daily_dir, timezone).await,
    };

    if let Err(e) = outcome {
        error!(error = %e, "Run failed");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// The `fetch` subcommand: the full daily pipeline run.
#[instrument(level = "info", skip_all, fields(timezone = %timezone))]
async fn fetch(
    sources_path: &str,
    paths: OutputPaths,
    timezone: Tz,
    timeout_secs: u64,
) -> Result<(), Box<dyn Error>> {
    // Early check: every output directory must be writable before any
    // network work happens.
    for dir in [&paths.raw_dir, &paths.daily_dir, &paths.public_dir] {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let sources = config::load_sources(Path::new(sources_path)).await?;

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("feed_digest/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let time_window = TimeWindow::new(timezone);
    let payload = aggregator::run(
        &client,
        &sources,
        &time_window,
        Utc::now(),
        &DigestSummary,
        &paths,
    )
    .await?;

    info!(
        date = %payload.date,
        articles = payload.stats.total_articles,
        sources = payload.stats.sources,
        "Daily fetch complete"
    );
    Ok(())
}

/// The `resummarize` subcommand: regenerate one stored day's summary.
#[instrument(level = "info", skip_all)]
async fn resummarize(
    date: Option<NaiveDate>,
    daily_dir: &str,
    timezone: Tz,
) -> Result<(), Box<dyn Error>> {
    let time_window = TimeWindow::new(timezone);
    let date = date.unwrap_or_else(|| time_window.yesterday_window(Utc::now()).date);

    let payload = aggregator::resummarize(date, &DigestSummary, daily_dir).await?;
    info!(date = %payload.date, "Resummarize complete");
    Ok(())
}
