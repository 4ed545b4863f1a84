//! Data models for feed sources, normalized articles, and the persisted artifacts.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`Source`]: One configured feed (display name + URL)
//! - [`RawFeedResult`]: Per-source fetch outcome, archived verbatim in the raw snapshot
//! - [`Article`]: Canonical unit of content after normalization
//! - [`DailyPayload`]: The merged daily artifact consumed by the front end
//!
//! JSON field names are camelCase (`publishedAt`, `totalArticles`) to match the
//! artifact schema the display layer already reads, hence the
//! `#[serde(rename_all = "camelCase")]` attributes.

use serde::{Deserialize, Serialize};

/// One configured feed source.
///
/// Supplied externally as an entry of the sources file; read once per run
/// and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// Display name, carried into every article this feed produces.
    pub name: String,
    /// Feed URL (RSS or Atom).
    pub url: String,
}

/// Why a source produced no items this run.
///
/// Serialized untagged so the snapshot carries a bare number (HTTP status)
/// or a bare string (transport failure), exactly the shape the archived
/// artifacts have always had.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FeedError {
    /// Non-success HTTP status from the feed server.
    Status(u16),
    /// Network, timeout, or body-read failure.
    Transport(String),
}

/// The outcome of fetching one source.
///
/// `error` is present iff the fetch or parse failed entirely for that
/// source; `items` is empty in that case. Written verbatim into the raw
/// snapshot file and never mutated after creation.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawFeedResult {
    /// Source display name.
    pub name: String,
    /// Articles that survived normalization, in document order.
    pub items: Vec<Article>,
    /// Set when the whole fetch failed; absent from the JSON otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FeedError>,
}

impl RawFeedResult {
    pub fn ok(name: &str, items: Vec<Article>) -> Self {
        Self {
            name: name.to_string(),
            items,
            error: None,
        }
    }

    pub fn failed(name: &str, error: FeedError) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
            error: Some(error),
        }
    }
}

/// A normalized article that was published yesterday.
///
/// An `Article` exists only if its item block carried a non-empty title, a
/// non-empty link, and a parseable publish date inside the digest window.
/// Immutable once constructed; owned by the daily payload that contains it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable display key: slugified source + title + calendar date.
    /// Not guaranteed globally unique if a source republishes a title.
    pub id: String,
    pub title: String,
    /// Source display name (not the feed URL).
    pub source: String,
    /// Zone-local calendar date of publication, `YYYY-MM-DD`.
    pub published_at: String,
    pub url: String,
    /// Sanitized plain-text excerpt, at most 220 characters.
    pub excerpt: String,
    /// Lower-cased, deduplicated category tags, at most 6.
    pub tags: Vec<String>,
}

/// The digest's headline and body text, produced by a summary generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Summary {
    pub title: String,
    pub text: String,
}

/// Aggregate counts over the surviving articles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_articles: usize,
    /// Distinct source names among the surviving articles. A configured
    /// source that errored or yielded nothing does not count.
    pub sources: usize,
}

/// The persisted daily artifact.
///
/// `date` is the content date (yesterday's zone-local calendar date at
/// generation time), distinct from the execution date that keys the raw
/// snapshot. Written to the canonical and published locations in one run;
/// the resummarize pass rewrites only `summary` in place.
#[derive(Debug, Deserialize, Serialize)]
pub struct DailyPayload {
    pub date: String,
    pub summary: Summary,
    pub stats: Stats,
    /// Absent from a stored file reads as an empty day.
    #[serde(default)]
    pub articles: Vec<Article>,
}
