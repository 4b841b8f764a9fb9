// crates/scholar-reputation/src/collect.rs
//
// Contribution collection from a ContributionSource.
//
// Turns a subject's raw paper and review records into scored contributions,
// derives account age, and fetches activity signals. Fetch failures never
// block scoring: a failed query is logged and treated as empty, yielding a
// lower but well-defined reputation.

use chrono::{DateTime, Utc};
use scholar_core::{
    months_since, ActivitySignals, ContributionSource, PaperContribution, PaperRecord, Pubkey,
    ReviewContribution, ReviewRecord, ScholarError,
};

use crate::components::AuxiliaryComponents;
use crate::constants::{DEFAULT_PAPER_RATING, DEFAULT_REVIEW_QUALITY};
use crate::engine::{assemble, ReputationData};
use crate::scoring::{annotate_papers, annotate_reviews};

/// Fallback values used when a contribution has not been rated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionPolicy {
    /// Average rating for a paper with no reviews.
    pub default_paper_rating: f64,
    /// Quality rating for a review with no editor rating.
    pub default_review_quality: f64,
}

impl Default for CollectionPolicy {
    fn default() -> Self {
        Self {
            default_paper_rating: DEFAULT_PAPER_RATING,
            default_review_quality: DEFAULT_REVIEW_QUALITY,
        }
    }
}

/// Everything the engine needs about one subject, materialized in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectContributions {
    /// Scored papers, with `reputation` filled in.
    pub papers: Vec<PaperContribution>,
    /// Scored reviews, with `reputation` filled in.
    pub reviews: Vec<ReviewContribution>,
    /// Months since the subject's earliest paper or review. 0 with no activity.
    pub account_age_months: f64,
    pub signals: ActivitySignals,
}

impl SubjectContributions {
    pub fn auxiliary_components(&self) -> AuxiliaryComponents {
        AuxiliaryComponents::from_signals(&self.signals, self.account_age_months)
    }
}

/// Fetch and score a subject's contributions.
pub async fn collect_contributions<S>(
    source: &S,
    pubkey: &Pubkey,
    policy: &CollectionPolicy,
    now: DateTime<Utc>,
) -> SubjectContributions
where
    S: ContributionSource + ?Sized,
{
    let paper_records = or_empty(source.authored_papers(pubkey).await, "authored papers", pubkey);
    let review_records = or_empty(source.authored_reviews(pubkey).await, "authored reviews", pubkey);

    let mut papers = Vec::with_capacity(paper_records.len());
    for record in &paper_records {
        let ratings = match source.ratings_for_paper(&record.address).await {
            Ok(ratings) => ratings,
            Err(e) => {
                tracing::warn!(paper = %record.address, "Failed to fetch paper ratings: {}", e);
                Vec::new()
            }
        };
        let average_rating = average_rating(&ratings).unwrap_or(policy.default_paper_rating);
        papers.push(PaperContribution::new(
            record.address.clone(),
            average_rating,
            record.citations,
            months_since(record.created_at, now),
        ));
    }
    annotate_papers(&mut papers);

    let mut reviews: Vec<ReviewContribution> = review_records
        .iter()
        .map(|record| {
            ReviewContribution::new(
                record.event_id.clone(),
                record.quality_rating.unwrap_or(policy.default_review_quality),
                months_since(record.created_at, now),
            )
        })
        .collect();
    annotate_reviews(&mut reviews);

    let account_age_months = earliest_activity(&paper_records, &review_records)
        .map(|first| months_since(first, now))
        .unwrap_or(0.0);

    let signals = match source.activity_signals(pubkey).await {
        Ok(signals) => signals,
        Err(e) => {
            tracing::warn!(pubkey = %pubkey, "Failed to fetch activity signals: {}", e);
            ActivitySignals::default()
        }
    };

    SubjectContributions {
        papers,
        reviews,
        account_age_months,
        signals,
    }
}

/// Collect a subject's contributions and compute its reputation.
///
/// Returns `None` for an empty pubkey without querying the source; pass the
/// result to [`permissions_for`](crate::engine::permissions_for), which grants
/// nothing in that case.
pub async fn score_subject<S>(
    source: &S,
    pubkey: &Pubkey,
    policy: &CollectionPolicy,
    now: DateTime<Utc>,
) -> Option<ReputationData>
where
    S: ContributionSource + ?Sized,
{
    if pubkey.is_empty() {
        tracing::debug!("Skipping scoring for empty pubkey");
        return None;
    }

    let subject = collect_contributions(source, pubkey, policy, now).await;
    Some(assemble(
        pubkey.clone(),
        &subject.papers,
        &subject.reviews,
        &subject.auxiliary_components(),
        now,
    ))
}

fn or_empty<T>(result: Result<Vec<T>, ScholarError>, what: &str, pubkey: &Pubkey) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(pubkey = %pubkey, "Failed to fetch {}: {}", what, e);
            Vec::new()
        }
    }
}

/// Mean of the finite ratings, or None if there are none.
fn average_rating(ratings: &[f64]) -> Option<f64> {
    let valid: Vec<f64> = ratings.iter().copied().filter(|r| r.is_finite()).collect();
    if valid.is_empty() {
        return None;
    }
    Some(valid.iter().sum::<f64>() / valid.len() as f64)
}

fn earliest_activity(papers: &[PaperRecord], reviews: &[ReviewRecord]) -> Option<DateTime<Utc>> {
    papers
        .iter()
        .map(|p| p.created_at)
        .chain(reviews.iter().map(|r| r.created_at))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;

    use crate::engine::permissions_for;
    use crate::memory::InMemoryContributionSource;
    use crate::tier::{Permissions, ReputationTier};

    /// A source whose every query fails.
    struct UnreachableSource;

    #[async_trait]
    impl ContributionSource for UnreachableSource {
        async fn authored_papers(&self, _: &Pubkey) -> Result<Vec<PaperRecord>, ScholarError> {
            Err(ScholarError::Source("relay unreachable".to_string()))
        }

        async fn authored_reviews(&self, _: &Pubkey) -> Result<Vec<ReviewRecord>, ScholarError> {
            Err(ScholarError::Source("relay unreachable".to_string()))
        }

        async fn ratings_for_paper(&self, _: &str) -> Result<Vec<f64>, ScholarError> {
            Err(ScholarError::Source("relay unreachable".to_string()))
        }

        async fn activity_signals(&self, _: &Pubkey) -> Result<ActivitySignals, ScholarError> {
            Err(ScholarError::Source("relay unreachable".to_string()))
        }
    }

    #[test]
    fn average_ignores_non_finite() {
        assert_eq!(average_rating(&[8.0, f64::NAN, 6.0]), Some(7.0));
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[f64::NAN]), None);
    }

    #[tokio::test]
    async fn unrated_paper_uses_default_rating() {
        let now = Utc::now();
        let author = Pubkey::new("author");
        let source = InMemoryContributionSource::new();
        source
            .add_paper(
                author.clone(),
                PaperRecord {
                    address: "32623:author:p1".to_string(),
                    created_at: now,
                    citations: 0,
                },
            )
            .unwrap();

        let subject =
            collect_contributions(&source, &author, &CollectionPolicy::default(), now).await;
        assert_eq!(subject.papers.len(), 1);
        assert_eq!(subject.papers[0].average_rating, DEFAULT_PAPER_RATING);
        // 50 + 5*5
        assert_eq!(subject.papers[0].reputation, 75.0);
    }

    #[tokio::test]
    async fn rated_paper_averages_review_ratings() {
        let now = Utc::now();
        let author = Pubkey::new("author");
        let reviewer = Pubkey::new("reviewer");
        let source = InMemoryContributionSource::new();
        source
            .add_paper(
                author.clone(),
                PaperRecord {
                    address: "32623:author:p1".to_string(),
                    created_at: now,
                    citations: 3,
                },
            )
            .unwrap();
        for (id, rating) in [("r1", 6.0), ("r2", 9.0)] {
            source
                .add_review(
                    reviewer.clone(),
                    ReviewRecord {
                        event_id: id.to_string(),
                        created_at: now,
                        quality_rating: None,
                    },
                    Some("32623:author:p1".to_string()),
                    Some(rating),
                )
                .unwrap();
        }

        let subject =
            collect_contributions(&source, &author, &CollectionPolicy::default(), now).await;
        assert_eq!(subject.papers[0].average_rating, 7.5);
        assert_eq!(subject.papers[0].citations, 3);
        assert!(subject.reviews.is_empty());

        let reviewer_subject =
            collect_contributions(&source, &reviewer, &CollectionPolicy::default(), now).await;
        assert_eq!(reviewer_subject.reviews.len(), 2);
        assert_eq!(reviewer_subject.reviews[0].quality_rating, DEFAULT_REVIEW_QUALITY);
        // 10 + 3.5*10
        assert_eq!(reviewer_subject.reviews[0].reputation, 45.0);
    }

    #[tokio::test]
    async fn account_age_from_earliest_event() {
        let now = Utc::now();
        let author = Pubkey::new("author");
        let source = InMemoryContributionSource::new();
        source
            .add_paper(
                author.clone(),
                PaperRecord {
                    address: "32623:author:p1".to_string(),
                    created_at: now - Duration::days(90),
                    citations: 0,
                },
            )
            .unwrap();
        source
            .add_review(
                author.clone(),
                ReviewRecord {
                    event_id: "r1".to_string(),
                    created_at: now - Duration::days(300),
                    quality_rating: Some(4.0),
                },
                None,
                None,
            )
            .unwrap();

        let subject =
            collect_contributions(&source, &author, &CollectionPolicy::default(), now).await;
        assert!((subject.account_age_months - 10.0).abs() < 1e-9);
        assert!((subject.auxiliary_components().time_investment - 20.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn failed_fetches_yield_empty_subject() {
        let now = Utc::now();
        let pubkey = Pubkey::new("anyone");
        let data = score_subject(&UnreachableSource, &pubkey, &CollectionPolicy::default(), now)
            .await
            .unwrap();
        assert_eq!(data.total_reputation, 0.0);
        assert_eq!(data.tier, ReputationTier::Newcomer);
        assert_eq!(data.last_calculated, now);
    }

    #[tokio::test]
    async fn custom_policy_overrides_defaults() {
        let now = Utc::now();
        let author = Pubkey::new("author");
        let source = InMemoryContributionSource::new();
        source
            .add_review(
                author.clone(),
                ReviewRecord {
                    event_id: "r1".to_string(),
                    created_at: now,
                    quality_rating: None,
                },
                None,
                None,
            )
            .unwrap();
        let policy = CollectionPolicy {
            default_paper_rating: 5.0,
            default_review_quality: 2.0,
        };
        let subject = collect_contributions(&source, &author, &policy, now).await;
        assert_eq!(subject.reviews[0].reputation, 30.0);
    }

    #[tokio::test]
    async fn empty_pubkey_is_not_scored() {
        let now = Utc::now();
        let nobody = Pubkey::new("");
        let source = InMemoryContributionSource::new();
        source
            .add_paper(
                nobody.clone(),
                PaperRecord {
                    address: "32623::p1".to_string(),
                    created_at: now,
                    citations: 0,
                },
            )
            .unwrap();

        let data = score_subject(&source, &nobody, &CollectionPolicy::default(), now).await;
        assert!(data.is_none());
        assert_eq!(permissions_for(data.as_ref()), Permissions::NONE);
    }
}
