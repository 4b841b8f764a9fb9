// crates/scholar-reputation/src/lib.rs
//
// scholar-reputation: Multi-factor, decay-based reputation scoring and
// permission tiers for ScholarChains.
//
// Papers and reviews earn points that halve every five years. Points are
// aggregated per component, capped, summed with the externally supplied
// components (trust, governance, stake, consistency, account age), reduced by
// penalties, and mapped onto one of five permission tiers. Every function in
// the scoring path is pure; only `collect` touches a contribution source.

pub mod collect;
pub mod components;
pub mod constants;
pub mod decay;
pub mod engine;
pub mod memory;
pub mod scoring;
pub mod tier;

pub use collect::{collect_contributions, score_subject, CollectionPolicy, SubjectContributions};
pub use components::{
    calculate_total_reputation, AuxiliaryComponents, ComponentShare, ReputationComponents,
};
pub use decay::{apply_decay, decay_factor, half_life_decay};
pub use engine::{assemble, permissions_for, ReputationData};
pub use memory::InMemoryContributionSource;
pub use scoring::{
    annotate_papers, annotate_reviews, calculate_paper_reputation, calculate_review_reputation,
    paper_points, review_points,
};
pub use tier::{get_tier, tier_progress, Permissions, ReputationTier, TierConfig, TierProgress, REPUTATION_TIERS};
