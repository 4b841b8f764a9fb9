// crates/scholar-reputation/src/constants.rs
//
// Scoring constants. Point values are per contribution before decay;
// maxima cap each component before it enters the total.

/// Age at which a contribution is worth half its original points (5 years).
pub const HALF_LIFE_MONTHS: f64 = 60.0;

// --- Publications ---------------------------------------------------------

pub const PAPER_BASE: f64 = 50.0;
/// Multiplied by the paper's average rating (0-10).
pub const PAPER_PER_RATING: f64 = 5.0;
pub const PAPER_PER_CITATION: f64 = 2.0;
pub const MIN_PAPER_RATING: f64 = 0.0;
pub const MAX_PAPER_RATING: f64 = 10.0;
/// Rating assumed for a paper nobody has reviewed yet.
pub const DEFAULT_PAPER_RATING: f64 = 5.0;

// --- Reviews --------------------------------------------------------------

pub const REVIEW_BASE: f64 = 10.0;
/// Multiplied by the review's editor quality rating (1-5).
pub const REVIEW_PER_QUALITY: f64 = 10.0;
pub const MIN_REVIEW_QUALITY: f64 = 1.0;
pub const MAX_REVIEW_QUALITY: f64 = 5.0;
/// Quality assumed for a review no editor has rated yet.
pub const DEFAULT_REVIEW_QUALITY: f64 = 3.5;

// --- Other components -----------------------------------------------------

/// Per endorsement, multiplied by the endorser's reputation.
pub const ENDORSEMENT_BASE: f64 = 0.1;
pub const GOVERNANCE_PER_VOTE: f64 = 0.5;
pub const GOVERNANCE_PER_PROPOSAL: f64 = 5.0;
/// Points per staked BTC (50 points per 0.01 BTC).
pub const STAKE_MULTIPLIER: f64 = 5000.0;
pub const ACCOUNT_AGE_PER_MONTH: f64 = 2.0;
pub const STATISTICAL_CONSISTENCY_BONUS: f64 = 100.0;
pub const STATISTICAL_CONSISTENCY_PENALTY: f64 = -50.0;

// --- Component maxima -----------------------------------------------------

pub const MAX_PUBLICATION: f64 = 400.0;
pub const MAX_REVIEW: f64 = 400.0;
pub const MAX_COMMUNITY_TRUST: f64 = 150.0;
pub const MAX_GOVERNANCE: f64 = 100.0;
pub const MAX_ECONOMIC_STAKE: f64 = 50.0;
pub const MAX_TIME_INVESTMENT: f64 = 100.0;
