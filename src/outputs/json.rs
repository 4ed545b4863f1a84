//! JSON artifact writes and reads.
//!
//! All artifacts are pretty-printed with two-space indentation, the format
//! the front end and the stored history already use. The daily payload is
//! serialized once and written to both its locations so the published copy
//! is byte-identical to the canonical one.

use chrono::NaiveDate;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::{DailyPayload, RawFeedResult};

async fn write_dated_file(json: &str, dir: &str, date: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(dir).await {
        error!(%dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/{}.json", dir, date);
    fs::write(&path, json).await?;
    info!(path = %path, "Wrote JSON file");
    Ok(())
}

/// Write the per-source fetch results to `{raw_dir}/{date}.json`.
///
/// `date` is the run date, not the content date: the snapshot records what
/// every source returned on the day the pipeline executed, errors included.
#[instrument(level = "info", skip_all, fields(raw_dir = %raw_dir, date = %date))]
pub async fn write_raw_snapshot(
    results: &[RawFeedResult],
    raw_dir: &str,
    date: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(results)?;
    write_dated_file(&json, raw_dir, &date.to_string()).await
}

/// Write a [`DailyPayload`] to `{dir}/{payload.date}.json` in both the
/// canonical and the published directory.
///
/// Both writes must succeed; a failure on either propagates and fails the
/// run.
#[instrument(level = "info", skip_all, fields(date = %payload.date))]
pub async fn write_daily_payload(
    payload: &DailyPayload,
    daily_dir: &str,
    public_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(payload)?;
    write_dated_file(&json, daily_dir, &payload.date).await?;
    write_dated_file(&json, public_dir, &payload.date).await?;
    Ok(())
}

/// Rewrite a payload in the canonical directory only, leaving the
/// published copy alone.
#[instrument(level = "info", skip_all, fields(date = %payload.date))]
pub async fn rewrite_daily_payload(
    payload: &DailyPayload,
    daily_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(payload)?;
    write_dated_file(&json, daily_dir, &payload.date).await
}

/// Load the stored payload for a content date from the canonical
/// directory.
#[instrument(level = "info", skip_all, fields(daily_dir = %daily_dir, date = %date))]
pub async fn load_daily_payload(
    daily_dir: &str,
    date: NaiveDate,
) -> Result<DailyPayload, Box<dyn Error>> {
    let path = format!("{}/{}.json", daily_dir, date);
    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("no daily payload for {date} at {path}: {e}"))?;
    let payload = serde_json::from_str(&contents)
        .map_err(|e| format!("daily payload at {path} does not parse: {e}"))?;
    Ok(payload)
}
