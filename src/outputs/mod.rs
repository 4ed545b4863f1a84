//! Output generation for the digest's JSON artifacts.
//!
//! # Output Structure
//!
//! One pipeline run produces three files across two date keys:
//!
//! ```text
//! feeds/
//! ├── raw/
//! │   └── 2025-05-07.json      # per-source snapshot, keyed by run date
//! └── daily/
//!     └── 2025-05-06.json      # digest payload, keyed by content date
//! public/feeds/daily/
//! └── 2025-05-06.json          # byte-identical published copy
//! ```
//!
//! The raw snapshot records what every source returned on the day the
//! pipeline ran, errors included, for later inspection. The daily payload
//! is what the front end serves, named after the day the articles were
//! published.

pub mod json;
