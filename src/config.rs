//! Source-list configuration.

use std::error::Error;
use std::path::Path;

use tracing::{info, instrument};

use crate::models::Source;

/// Load the ordered source list from a JSON file.
///
/// The file holds a JSON array of `{name, url}` records. A missing or
/// malformed file is a fatal configuration error. An empty array is legal
/// and produces an empty digest for the day.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_sources(path: &Path) -> Result<Vec<Source>, Box<dyn Error>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("cannot read sources file {}: {e}", path.display()))?;
    let sources: Vec<Source> = serde_json::from_str(&contents)
        .map_err(|e| format!("malformed sources file {}: {e}", path.display()))?;
    info!(sources = sources.len(), "Loaded source list");
    Ok(sources)
}
