// crates/scholar-reputation/src/components.rs
//
// Reputation components and the total composer.
//
// Publication and review quality come from the scoring module. The remaining
// components come from outside the contribution lists: endorsements,
// governance activity, stake, consistency checks, account age, and
// penalties. Each has its own accumulator with a documented cap.

use scholar_core::{ActivitySignals, ConsistencyOutcome, Endorsement};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCOUNT_AGE_PER_MONTH, ENDORSEMENT_BASE, GOVERNANCE_PER_PROPOSAL, GOVERNANCE_PER_VOTE,
    MAX_COMMUNITY_TRUST, MAX_ECONOMIC_STAKE, MAX_GOVERNANCE, MAX_PUBLICATION, MAX_REVIEW,
    MAX_TIME_INVESTMENT, STAKE_MULTIPLIER, STATISTICAL_CONSISTENCY_BONUS,
    STATISTICAL_CONSISTENCY_PENALTY,
};
use crate::scoring::total_points;

/// Per-subject breakdown of reputation by category.
///
/// All fields are non-negative except `statistical_consistency`, which is a
/// signed bonus/penalty. `penalties` is subtracted from the total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationComponents {
    /// 0-400, from authored papers.
    pub publication_quality: f64,
    /// 0-400, from authored reviews.
    pub review_quality: f64,
    /// 0-150, from endorsements.
    pub community_trust: f64,
    /// 0-100, from votes and proposals.
    pub governance_participation: f64,
    /// 0-50, from staked BTC.
    pub economic_stake: f64,
    pub statistical_consistency: f64,
    /// 0-100, from account age.
    pub time_investment: f64,
    pub penalties: f64,
}

impl ReputationComponents {
    /// Total reputation for these components. See [`calculate_total_reputation`].
    pub fn total(&self) -> f64 {
        calculate_total_reputation(self)
    }

    /// The capped components with their maxima, in display order.
    ///
    /// Consistency and penalties have no maximum and are not listed.
    pub fn breakdown(&self) -> Vec<ComponentShare> {
        vec![
            ComponentShare::new("Publication Quality", self.publication_quality, MAX_PUBLICATION),
            ComponentShare::new("Review Quality", self.review_quality, MAX_REVIEW),
            ComponentShare::new("Community Trust", self.community_trust, MAX_COMMUNITY_TRUST),
            ComponentShare::new("Governance", self.governance_participation, MAX_GOVERNANCE),
            ComponentShare::new("Economic Stake", self.economic_stake, MAX_ECONOMIC_STAKE),
            ComponentShare::new("Time Investment", self.time_investment, MAX_TIME_INVESTMENT),
        ]
    }
}

/// One capped component relative to its maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentShare {
    pub label: &'static str,
    pub value: f64,
    pub max: f64,
}

impl ComponentShare {
    fn new(label: &'static str, value: f64, max: f64) -> Self {
        Self { label, value, max }
    }

    /// How full this component is, in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }
}

/// Sum every component, subtract penalties, and floor at zero.
///
/// Components are taken as given; callers are responsible for the caps
/// (publication 400, review 400, trust 150, governance 100, stake 50,
/// time 100). Penalties can never push the total below 0.
pub fn calculate_total_reputation(components: &ReputationComponents) -> f64 {
    let total = components.publication_quality
        + components.review_quality
        + components.community_trust
        + components.governance_participation
        + components.economic_stake
        + components.statistical_consistency
        + components.time_investment
        - components.penalties;

    total.max(0.0)
}

/// Components that do not come from the paper and review lists.
///
/// Construct directly when the caller already holds capped scalars, or via
/// [`AuxiliaryComponents::from_signals`] to run the accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryComponents {
    pub community_trust: f64,
    pub governance_participation: f64,
    pub economic_stake: f64,
    pub statistical_consistency: f64,
    pub time_investment: f64,
    pub penalties: f64,
}

impl AuxiliaryComponents {
    /// Accumulate every auxiliary component from raw activity and account age.
    pub fn from_signals(signals: &ActivitySignals, account_age_months: f64) -> Self {
        Self {
            community_trust: community_trust(&signals.endorsements),
            governance_participation: governance_participation(signals.votes, signals.proposals),
            economic_stake: economic_stake(signals.staked_btc),
            statistical_consistency: statistical_consistency(signals.consistency),
            time_investment: time_investment(account_age_months),
            penalties: penalties(signals.penalty_points),
        }
    }
}

/// Endorsements weighted by endorser reputation, capped at 150.
pub fn community_trust(endorsements: &[Endorsement]) -> f64 {
    let total = total_points(
        endorsements
            .iter()
            .map(|e| ENDORSEMENT_BASE * non_negative(e.endorser_reputation)),
    );
    total.min(MAX_COMMUNITY_TRUST)
}

/// 0.5 per vote plus 5 per proposal, capped at 100.
pub fn governance_participation(votes: u32, proposals: u32) -> f64 {
    let total = votes as f64 * GOVERNANCE_PER_VOTE + proposals as f64 * GOVERNANCE_PER_PROPOSAL;
    total.min(MAX_GOVERNANCE)
}

/// 50 points per 0.01 BTC staked, capped at 50.
pub fn economic_stake(staked_btc: f64) -> f64 {
    (non_negative(staked_btc) * STAKE_MULTIPLIER).min(MAX_ECONOMIC_STAKE)
}

/// +100 for passing consistency checks, -50 for failing, 0 if never run.
pub fn statistical_consistency(outcome: ConsistencyOutcome) -> f64 {
    match outcome {
        ConsistencyOutcome::Passed => STATISTICAL_CONSISTENCY_BONUS,
        ConsistencyOutcome::Failed => STATISTICAL_CONSISTENCY_PENALTY,
        ConsistencyOutcome::NotRun => 0.0,
    }
}

/// 2 points per month of account age, capped at 100.
pub fn time_investment(account_age_months: f64) -> f64 {
    (non_negative(account_age_months) * ACCOUNT_AGE_PER_MONTH).min(MAX_TIME_INVESTMENT)
}

/// Penalty points, floored at 0 so they are always subtracted.
pub fn penalties(penalty_points: f64) -> f64 {
    non_negative(penalty_points)
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
