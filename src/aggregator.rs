//! Pipeline orchestration: fetch every source, snapshot the results, merge
//! the survivors into the daily payload, and persist it.
//!
//! Per-source failures are isolated by construction. Fetches return plain
//! result values instead of errors, so one dead feed can never abort the
//! run; only the output writes at the end can.

use std::error::Error;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future::join_all;
use itertools::Itertools;
use reqwest::Client;
use tracing::{info, instrument};

use crate::feed::fetcher::fetch_feed;
use crate::models::{DailyPayload, Source, Stats};
use crate::outputs::json;
use crate::summary::SummaryGenerator;
use crate::window::TimeWindow;

/// Where a pipeline run writes its artifacts.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Raw per-source snapshots, keyed by run date.
    pub raw_dir: String,
    /// Canonical daily payloads, keyed by content date.
    pub daily_dir: String,
    /// Published payload copies the front end serves.
    pub public_dir: String,
}

/// Run the full daily pipeline at instant `now`.
///
/// All sources are fetched concurrently, one future per source, and the
/// results re-joined in source-list order, so output order is deterministic
/// regardless of network timing. The raw snapshot is keyed by today's
/// zone-local date; the merged payload by yesterday's, which is the date
/// the articles were published.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn run(
    client: &Client,
    sources: &[Source],
    time_window: &TimeWindow,
    now: DateTime<Utc>,
    generator: &dyn SummaryGenerator,
    paths: &OutputPaths,
) -> Result<DailyPayload, Box<dyn Error>> {
    let window = time_window.yesterday_window(now);
    info!(date = %window.date, start = %window.start, end = %window.end, "Digest window resolved");

    // ---- Fetch all sources concurrently ----
    let fetches = sources
        .iter()
        .map(|source| fetch_feed(client, source, &window));
    let results = join_all(fetches).await;

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(sources = results.len(), failed, "All fetches settled");

    json::write_raw_snapshot(&results, &paths.raw_dir, time_window.calendar_date(now)).await?;

    // ---- Merge into the daily payload ----
    let articles: Vec<_> = results
        .into_iter()
        .flat_map(|result| result.items)
        .collect();
    let distinct_sources = articles
        .iter()
        .map(|article| article.source.as_str())
        .unique()
        .count();
    let stats = Stats {
        total_articles: articles.len(),
        sources: distinct_sources,
    };
    let summary = generator.generate(&articles);

    let payload = DailyPayload {
        date: window.date.to_string(),
        summary,
        stats,
        articles,
    };

    json::write_daily_payload(&payload, &paths.daily_dir, &paths.public_dir).await?;
    info!(
        date = %payload.date,
        articles = payload.stats.total_articles,
        sources = payload.stats.sources,
        "Daily digest written"
    );
    Ok(payload)
}

/// Regenerate the summary of an already-written payload, in place.
///
/// Loads the canonical `{daily_dir}/{date}.json`, rebuilds `summary` from
/// the stored articles, and rewrites that file only; the published copy is
/// left alone. Fails when no payload exists for the date.
#[instrument(level = "info", skip_all, fields(date = %date))]
pub async fn resummarize(
    date: NaiveDate,
    generator: &dyn SummaryGenerator,
    daily_dir: &str,
) -> Result<DailyPayload, Box<dyn Error>> {
    let mut payload = json::load_daily_payload(daily_dir, date).await?;
    payload.summary = generator.generate(&payload.articles);
    json::rewrite_daily_payload(&payload, daily_dir).await?;
    info!(articles = payload.articles.len(), "Summary regenerated");
    Ok(payload)
}
