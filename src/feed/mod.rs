//! Feed retrieval and item extraction.
//!
//! This module turns a configured source into the articles it published
//! inside the target day window:
//!
//! - [`fetcher`]: Downloads a feed over HTTP and converts every outcome,
//!   success or failure, into a [`crate::models::RawFeedResult`]
//! - [`parser`]: Regex-based extraction of `<item>` blocks and tag values
//!   from the raw document
//! - [`normalize`]: Builds [`crate::models::Article`] values out of item
//!   blocks, applying the day-window filter
//!
//! Extraction is deliberately tolerant: real-world feeds are often not
//! well-formed XML, so blocks and tags are matched with case-insensitive
//! regexes instead of a strict parser. Malformed markup degrades to fewer
//! extracted items, never to a failed run.

pub mod fetcher;
pub mod normalize;
pub mod parser;
