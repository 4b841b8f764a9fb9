// crates/scholar-reputation/src/tier.rs
//
// Permission tiers. Tiers are contiguous half-open reputation ranges
// [min, max) covering [0, ∞); the last tier is unbounded above. A tier is
// a pure function of the current score and carries no state of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named reputation band, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReputationTier {
    /// 0-10
    Newcomer,
    /// 10-100
    Contributor,
    /// 100-500
    Established,
    /// 500-1000
    Expert,
    /// 1000+
    Council,
}

impl ReputationTier {
    /// Canonical upper-case name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newcomer => "NEWCOMER",
            Self::Contributor => "CONTRIBUTOR",
            Self::Established => "ESTABLISHED",
            Self::Expert => "EXPERT",
            Self::Council => "COUNCIL",
        }
    }
}

impl fmt::Display for ReputationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Newcomer => "Newcomer",
            Self::Contributor => "Contributor",
            Self::Established => "Established",
            Self::Expert => "Expert",
            Self::Council => "Council",
        };
        write!(f, "{}", s)
    }
}

/// Platform actions a tier grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_publish: bool,
    pub can_review: bool,
    pub can_comment: bool,
    pub can_vote_minor: bool,
    pub can_vote_major: bool,
    pub can_edit: bool,
    pub can_investigate: bool,
}

impl Permissions {
    /// No permissions at all; used when a subject has no reputation data.
    pub const NONE: Permissions = Permissions {
        can_publish: false,
        can_review: false,
        can_comment: false,
        can_vote_minor: false,
        can_vote_major: false,
        can_edit: false,
        can_investigate: false,
    };

    /// Human-readable names of the granted permissions.
    pub fn granted(&self) -> Vec<&'static str> {
        [
            (self.can_publish, "Publish Papers"),
            (self.can_review, "Write Reviews"),
            (self.can_comment, "Comment"),
            (self.can_vote_minor, "Vote (Minor)"),
            (self.can_vote_major, "Vote (Major)"),
            (self.can_edit, "Edit Content"),
            (self.can_investigate, "Investigate Fraud"),
        ]
        .into_iter()
        .filter_map(|(granted, name)| granted.then_some(name))
        .collect()
    }
}

/// A tier's reputation range and permission set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    pub tier: ReputationTier,
    /// Inclusive lower bound.
    pub min_reputation: f64,
    /// Exclusive upper bound; infinite for the top tier.
    pub max_reputation: f64,
    #[serde(flatten)]
    pub permissions: Permissions,
}

const fn perms(
    review: bool,
    vote_minor: bool,
    vote_major: bool,
    edit: bool,
    investigate: bool,
) -> Permissions {
    Permissions {
        can_publish: true,
        can_review: review,
        can_comment: true,
        can_vote_minor: vote_minor,
        can_vote_major: vote_major,
        can_edit: edit,
        can_investigate: investigate,
    }
}

/// The tier table, ordered by reputation range.
pub static REPUTATION_TIERS: [TierConfig; 5] = [
    TierConfig {
        tier: ReputationTier::Newcomer,
        min_reputation: 0.0,
        max_reputation: 10.0,
        permissions: perms(false, false, false, false, false),
    },
    TierConfig {
        tier: ReputationTier::Contributor,
        min_reputation: 10.0,
        max_reputation: 100.0,
        permissions: perms(true, true, false, false, false),
    },
    TierConfig {
        tier: ReputationTier::Established,
        min_reputation: 100.0,
        max_reputation: 500.0,
        permissions: perms(true, true, true, false, false),
    },
    TierConfig {
        tier: ReputationTier::Expert,
        min_reputation: 500.0,
        max_reputation: 1000.0,
        permissions: perms(true, true, true, true, false),
    },
    TierConfig {
        tier: ReputationTier::Council,
        min_reputation: 1000.0,
        max_reputation: f64::INFINITY,
        permissions: perms(true, true, true, true, true),
    },
];

/// Resolve the tier for a reputation score.
///
/// The first range with `min <= reputation < max` wins. Negative and NaN
/// scores resolve as 0; infinite scores land in the top tier.
pub fn get_tier(reputation: f64) -> &'static TierConfig {
    let reputation = if reputation.is_nan() { 0.0 } else { reputation.max(0.0) };

    REPUTATION_TIERS
        .iter()
        .find(|t| reputation >= t.min_reputation && reputation < t.max_reputation)
        .unwrap_or(&REPUTATION_TIERS[REPUTATION_TIERS.len() - 1])
}

/// Position of a score within its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    pub current: ReputationTier,
    /// None at the top tier.
    pub next: Option<ReputationTier>,
    /// Fraction of the current range covered, in [0.0, 1.0]. 1.0 at the top tier.
    pub fraction: f64,
}

/// How far a score has progressed towards the next tier.
pub fn tier_progress(reputation: f64) -> TierProgress {
    let config = get_tier(reputation);
    let next = REPUTATION_TIERS
        .iter()
        .find(|t| t.tier > config.tier)
        .map(|t| t.tier);

    let fraction = match next {
        Some(_) => {
            let span = config.max_reputation - config.min_reputation;
            let reputation = if reputation.is_nan() { 0.0 } else { reputation };
            ((reputation - config.min_reputation) / span).clamp(0.0, 1.0)
        }
        None => 1.0,
    };

    TierProgress {
        current: config.tier,
        next,
        fraction,
    }
}
