// crates/scholar-core/src/record.rs
//
// Raw records supplied by the event store and other external collaborators.
// These are the inputs the contribution collector turns into scored
// contributions; nothing here is computed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Pubkey;

/// A paper authored by a subject, as found on the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Protocol address of the paper (e.g., "32623:<pubkey>:<d-tag>").
    pub address: String,
    /// Creation time of the paper event.
    pub created_at: DateTime<Utc>,
    /// Number of works citing this paper. 0 when citations are not tracked.
    #[serde(default)]
    pub citations: u32,
}

/// A review authored by a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Event id of the review.
    pub event_id: String,
    /// Creation time of the review event.
    pub created_at: DateTime<Utc>,
    /// Editor quality rating (1-5), when one has been given.
    #[serde(default)]
    pub quality_rating: Option<f64>,
}

/// A Web of Trust endorsement received by a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endorsement {
    pub endorser: Pubkey,
    /// Total reputation of the endorser at the time of scoring.
    pub endorser_reputation: f64,
}

/// Result of the automated statistical consistency checks on a subject's work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyOutcome {
    /// Checks ran and found nothing suspicious.
    Passed,
    /// Checks flagged inconsistencies.
    Failed,
    /// No checks have been run.
    #[default]
    NotRun,
}

/// Non-contribution activity of a subject.
///
/// Every field defaults to "no activity", so a subject with no recorded
/// signals contributes nothing beyond papers, reviews, and account age.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySignals {
    pub endorsements: Vec<Endorsement>,
    /// Governance votes cast.
    pub votes: u32,
    /// Governance proposals submitted.
    pub proposals: u32,
    /// Bitcoin staked as a commitment to platform integrity.
    pub staked_btc: f64,
    pub consistency: ConsistencyOutcome,
    /// Penalty points from fraud or misconduct investigations.
    pub penalty_points: f64,
}
