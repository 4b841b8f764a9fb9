// crates/scholar-core/src/contribution.rs
//
// Scored contribution units. One PaperContribution per authored paper, one
// ReviewContribution per authored review. `reputation` is an output field,
// always derivable from the others; it is 0 until the engine annotates it.

use serde::{Deserialize, Serialize};

/// A paper's contribution to its author's reputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperContribution {
    /// Protocol address of the paper.
    pub paper_address: String,
    /// Mean overall rating (0-10) from reviews referencing the paper.
    pub average_rating: f64,
    /// Number of works citing the paper.
    pub citations: u32,
    /// Paper age in 30-day months.
    pub age_months: f64,
    /// Decayed points contributed by this paper.
    pub reputation: f64,
}

impl PaperContribution {
    pub fn new(
        paper_address: impl Into<String>,
        average_rating: f64,
        citations: u32,
        age_months: f64,
    ) -> Self {
        Self {
            paper_address: paper_address.into(),
            average_rating,
            citations,
            age_months,
            reputation: 0.0,
        }
    }
}

/// A review's contribution to its author's reputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewContribution {
    pub review_event_id: String,
    /// Editor quality rating (1-5).
    pub quality_rating: f64,
    /// Review age in 30-day months.
    pub age_months: f64,
    /// Decayed points contributed by this review.
    pub reputation: f64,
}

impl ReviewContribution {
    pub fn new(review_event_id: impl Into<String>, quality_rating: f64, age_months: f64) -> Self {
        Self {
            review_event_id: review_event_id.into(),
            quality_rating,
            age_months,
            reputation: 0.0,
        }
    }
}
