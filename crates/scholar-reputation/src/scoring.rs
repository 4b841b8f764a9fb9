// crates/scholar-reputation/src/scoring.rs
//
// Per-contribution scoring and per-component aggregation for papers and
// reviews. Each contribution earns base points plus quality-weighted points,
// decayed by age; the sum is capped at the component maximum.

use scholar_core::{PaperContribution, ReviewContribution};

use crate::constants::{
    MAX_PAPER_RATING, MAX_PUBLICATION, MAX_REVIEW, MAX_REVIEW_QUALITY, MIN_PAPER_RATING,
    MIN_REVIEW_QUALITY, PAPER_BASE, PAPER_PER_CITATION, PAPER_PER_RATING, REVIEW_BASE,
    REVIEW_PER_QUALITY,
};
use crate::decay::decay_factor;

/// Decayed points earned by a single paper.
///
/// `50 + rating * 5 + citations * 2`, times the decay factor for its age.
/// The rating is clamped to 0-10.
pub fn paper_points(paper: &PaperContribution) -> f64 {
    let rating = bounded(paper.average_rating, MIN_PAPER_RATING, MAX_PAPER_RATING);
    let base_points =
        PAPER_BASE + rating * PAPER_PER_RATING + paper.citations as f64 * PAPER_PER_CITATION;
    base_points * decay_factor(paper.age_months)
}

/// Decayed points earned by a single review.
///
/// `10 + quality * 10`, times the decay factor for its age.
/// The quality rating is clamped to 1-5.
pub fn review_points(review: &ReviewContribution) -> f64 {
    let quality = bounded(review.quality_rating, MIN_REVIEW_QUALITY, MAX_REVIEW_QUALITY);
    let base_points = REVIEW_BASE + quality * REVIEW_PER_QUALITY;
    base_points * decay_factor(review.age_months)
}

/// Publication-quality component: summed paper points, capped at 400.
///
/// An empty slice scores 0.
pub fn calculate_paper_reputation(papers: &[PaperContribution]) -> f64 {
    total_points(papers.iter().map(paper_points)).min(MAX_PUBLICATION)
}

/// Review-quality component: summed review points, capped at 400.
pub fn calculate_review_reputation(reviews: &[ReviewContribution]) -> f64 {
    total_points(reviews.iter().map(review_points)).min(MAX_REVIEW)
}

/// Sum of points starting from +0.0.
///
/// `Iterator::sum` yields -0.0 for an empty iterator, which leaks into JSON
/// and formatted output as "-0".
pub(crate) fn total_points(points: impl Iterator<Item = f64>) -> f64 {
    points.fold(0.0, |acc, p| acc + p)
}

/// Fill in each paper's `reputation` output field.
pub fn annotate_papers(papers: &mut [PaperContribution]) {
    for paper in papers.iter_mut() {
        paper.reputation = paper_points(paper);
    }
}

/// Fill in each review's `reputation` output field.
pub fn annotate_reviews(reviews: &mut [ReviewContribution]) {
    for review in reviews.iter_mut() {
        review.reputation = review_points(review);
    }
}

/// Clamp `value` to [lo, hi]; NaN maps to `lo`.
pub(crate) fn bounded(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}
