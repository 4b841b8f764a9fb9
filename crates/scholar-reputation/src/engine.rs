// crates/scholar-reputation/src/engine.rs
//
// Caller-facing composition: score the contribution lists, merge in the
// auxiliary components, compose the total, and resolve the tier.
//
// Results are recomputed on every call. Caching and staleness policy belong
// to whoever holds the ReputationData.

use chrono::{DateTime, Utc};
use scholar_core::{PaperContribution, Pubkey, ReviewContribution};
use serde::{Deserialize, Serialize};

use crate::components::{calculate_total_reputation, AuxiliaryComponents, ReputationComponents};
use crate::scoring::{calculate_paper_reputation, calculate_review_reputation};
use crate::tier::{get_tier, tier_progress, Permissions, ReputationTier, TierConfig, TierProgress};

/// Computed reputation for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationData {
    pub pubkey: Pubkey,
    /// Always >= 0.
    pub total_reputation: f64,
    pub tier: ReputationTier,
    pub components: ReputationComponents,
    /// When this result was computed. Informational only.
    pub last_calculated: DateTime<Utc>,
}

impl ReputationData {
    /// Range and permissions of the subject's tier.
    pub fn tier_config(&self) -> &'static TierConfig {
        get_tier(self.total_reputation)
    }

    pub fn permissions(&self) -> Permissions {
        self.tier_config().permissions
    }

    pub fn progress(&self) -> TierProgress {
        tier_progress(self.total_reputation)
    }
}

/// Permissions for a subject whose reputation may not be available yet.
///
/// Missing data grants nothing.
pub fn permissions_for(data: Option<&ReputationData>) -> Permissions {
    data.map(ReputationData::permissions)
        .unwrap_or(Permissions::NONE)
}

/// Build a subject's ReputationData from its contributions and auxiliary
/// components.
pub fn assemble(
    pubkey: Pubkey,
    papers: &[PaperContribution],
    reviews: &[ReviewContribution],
    aux: &AuxiliaryComponents,
    now: DateTime<Utc>,
) -> ReputationData {
    let components = ReputationComponents {
        publication_quality: calculate_paper_reputation(papers),
        review_quality: calculate_review_reputation(reviews),
        community_trust: aux.community_trust,
        governance_participation: aux.governance_participation,
        economic_stake: aux.economic_stake,
        statistical_consistency: aux.statistical_consistency,
        time_investment: aux.time_investment,
        penalties: aux.penalties,
    };

    let total_reputation = calculate_total_reputation(&components);
    let tier = get_tier(total_reputation).tier;

    tracing::debug!(
        pubkey = %pubkey,
        papers = papers.len(),
        reviews = reviews.len(),
        total = total_reputation,
        tier = %tier,
        "Assembled reputation"
    );

    ReputationData {
        pubkey,
        total_reputation,
        tier,
        components,
        last_calculated: now,
    }
}
