//! Downloads one feed and reduces it to a [`RawFeedResult`].
//!
//! `fetch_feed` never returns an error: a failed source must not be able to
//! abort the daily run, so every failure mode is folded into the result
//! shape the raw snapshot records.

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::feed::normalize::normalize;
use crate::feed::parser::extract_items;
use crate::models::{FeedError, RawFeedResult, Source};
use crate::window::DayWindow;

/// Cap on the number of surviving items kept per feed.
pub const MAX_ITEMS_PER_FEED: usize = 30;

/// Fetch one source and extract its in-window articles.
///
/// Transport failures (including timeouts) and body-read failures become
/// `FeedError::Transport`; a non-success HTTP status becomes
/// `FeedError::Status`. On success the body is scanned for item blocks,
/// each block is normalized against `window`, and the first
/// [`MAX_ITEMS_PER_FEED`] survivors are kept in document order.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn fetch_feed(client: &Client, source: &Source, window: &DayWindow) -> RawFeedResult {
    let response = match client.get(&source.url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, url = %source.url, "Feed request failed");
            return RawFeedResult::failed(&source.name, FeedError::Transport(e.to_string()));
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), url = %source.url, "Feed returned non-success status");
        return RawFeedResult::failed(&source.name, FeedError::Status(status.as_u16()));
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, url = %source.url, "Feed body read failed");
            return RawFeedResult::failed(&source.name, FeedError::Transport(e.to_string()));
        }
    };

    let items: Vec<_> = extract_items(&body)
        .filter_map(|block| normalize(block, &source.name, window))
        .take(MAX_ITEMS_PER_FEED)
        .collect();

    info!(items = items.len(), bytes = body.len(), "Fetched feed");
    RawFeedResult::ok(&source.name, items)
}
