//! Command-line interface definitions for the feed digest pipeline.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Options with an `env` attribute can also be supplied via environment
//! variables, which is how the scheduled job configures them.

use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};

use crate::window::DEFAULT_TIME_ZONE;

/// Command-line arguments for the feed digest pipeline.
///
/// # Examples
///
/// ```sh
/// # Daily run with the default layout under the working directory
/// feed_digest fetch
///
/// # Regenerate the summary of an already-written day
/// feed_digest resummarize 2025-05-06
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all configured feeds and write yesterday's digest
    Fetch {
        /// Path to the JSON source list
        #[arg(short, long, default_value = "feeds/sources.json")]
        sources: String,

        /// Directory for raw per-source snapshots
        #[arg(long, default_value = "feeds/raw")]
        raw_dir: String,

        /// Directory for the canonical daily payloads
        #[arg(long, default_value = "feeds/daily")]
        daily_dir: String,

        /// Directory for the published payload copies
        #[arg(long, default_value = "public/feeds/daily")]
        public_dir: String,

        /// IANA time zone the digest day is computed in
        #[arg(short, long, env = "DIGEST_TZ", default_value = DEFAULT_TIME_ZONE)]
        timezone: Tz,

        /// Per-request timeout for feed fetches, in seconds
        #[arg(long, env = "DIGEST_FETCH_TIMEOUT_SECS", default_value_t = 30)]
        timeout_secs: u64,
    },

    /// Regenerate the summary of a stored daily payload
    Resummarize {
        /// Content date (YYYY-MM-DD); defaults to yesterday in the digest
        /// time zone
        date: Option<NaiveDate>,

        /// Directory for the canonical daily payloads
        #[arg(long, default_value = "feeds/daily")]
        daily_dir: String,

        /// IANA time zone the digest day is computed in
        #[arg(short, long, env = "DIGEST_TZ", default_value = DEFAULT_TIME_ZONE)]
        timezone: Tz,
    },
}
