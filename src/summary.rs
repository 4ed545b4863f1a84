//! Digest summary generation.
//!
//! The module uses a trait-based design so the summary backend can change
//! without touching orchestration:
//!
//! - [`SummaryGenerator`]: Core trait turning an article list into a [`Summary`]
//! - [`DigestSummary`]: The deterministic placeholder implementation the
//!   pipeline ships with today

use itertools::Itertools;

use crate::models::{Article, Summary};

/// Title carried by every digest summary.
pub const SUMMARY_TITLE: &str = "Yesterday in design";

/// Trait for producing the digest's summary block.
///
/// Implementors receive the full day's article list and return the summary
/// stored in the daily payload. The pipeline holds generators as
/// `&dyn SummaryGenerator`, so a future backend (a generative model, an
/// editorial feed) slots in without orchestration changes.
pub trait SummaryGenerator {
    fn generate(&self, articles: &[Article]) -> Summary;
}

/// Deterministic placeholder generator.
///
/// A pure function of the article list: the same articles always produce
/// the same summary, which is what makes re-running summarization over a
/// stored payload idempotent.
pub struct DigestSummary;

impl SummaryGenerator for DigestSummary {
    fn generate(&self, articles: &[Article]) -> Summary {
        if articles.is_empty() {
            return Summary {
                title: SUMMARY_TITLE.to_string(),
                text: "No relevant articles were published yesterday.".to_string(),
            };
        }

        let top_sources = articles
            .iter()
            .map(|article| article.source.as_str())
            .unique()
            .take(3)
            .join(", ");

        Summary {
            title: SUMMARY_TITLE.to_string(),
            text: format!(
                "{} articles were published yesterday, with a focus on design, UX, and \
                 product. The most active sources include {top_sources}. The final \
                 summary will be refined in the daily pipeline.",
                articles.len()
            ),
        }
    }
}
