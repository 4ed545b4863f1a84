//! Turns a raw item block into an [`Article`], or nothing.
//!
//! An item survives only when it has a non-empty title, a non-empty link,
//! and a parseable publication date that falls inside the target day
//! window. Everything else about the block is tolerated: missing
//! descriptions become empty excerpts and missing categories become empty
//! tag lists.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::feed::parser::{extract_categories, extract_first};
use crate::models::Article;
use crate::sanitize::strip_html;
use crate::window::DayWindow;

/// Cap on excerpt length, in characters.
pub const MAX_EXCERPT_CHARS: usize = 220;

static RE_NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lower-case a value and reduce it to hyphen-separated alphanumeric runs.
///
/// Every run of characters outside `[a-z0-9]` collapses to a single hyphen
/// and leading/trailing hyphens are dropped, so `"Café, Design & Co."`
/// becomes `"caf-design-co"`.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    RE_NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Parse a feed date permissively: RFC 2822 first (the RSS convention),
/// then RFC 3339 (Atom), then common naive datetime layouts assumed UTC,
/// then a bare date at UTC midnight.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&parsed.and_time(chrono::NaiveTime::MIN)));
    }
    None
}

/// Normalize one item block from the named source into an [`Article`].
///
/// Returns `None` when the item is missing a title or link, when its date
/// does not parse, or when the date falls outside `window`. The article id
/// is `<source-slug>-<title-slug>-<window date>`; duplicate ids from a
/// source repeating a title on the same day are accepted as-is.
pub fn normalize(block: &str, source_name: &str, window: &DayWindow) -> Option<Article> {
    let title = extract_first(block, "title");
    let link = extract_first(block, "link");

    let mut published = extract_first(block, "pubDate");
    if published.is_empty() {
        published = extract_first(block, "updated");
    }
    let mut description = extract_first(block, "description");
    if description.is_empty() {
        description = extract_first(block, "summary");
    }

    if title.is_empty() || link.is_empty() {
        debug!(source = source_name, "Item dropped: missing title or link");
        return None;
    }
    let Some(published_at) = parse_date(&published) else {
        debug!(source = source_name, value = %published, "Item dropped: missing or unparseable date");
        return None;
    };
    // Out-of-window items are the normal case, not a data-quality problem,
    // so they drop without a trace.
    if !window.contains(published_at) {
        return None;
    }

    // Any instant inside the window carries the window's own calendar date
    // in the pipeline time zone.
    let published_day = window.date.format("%Y-%m-%d").to_string();
    let id = format!("{}-{}-{}", slugify(source_name), slugify(&title), published_day);

    Some(Article {
        id,
        title,
        source: source_name.to_string(),
        published_at: published_day,
        url: link,
        excerpt: strip_html(&description)
            .chars()
            .take(MAX_EXCERPT_CHARS)
            .collect(),
        tags: extract_categories(block),
    })
}
