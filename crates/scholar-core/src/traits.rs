// crates/scholar-core/src/traits.rs

use async_trait::async_trait;

use crate::error::ScholarError;
use crate::identity::Pubkey;
use crate::record::{ActivitySignals, PaperRecord, ReviewRecord};

/// Trait for the data-fetch layer feeding the reputation engine.
///
/// Implemented by event-store clients outside this workspace, and by
/// scholar-reputation's in-memory source for fixtures and tests.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Papers authored by `pubkey`.
    async fn authored_papers(&self, pubkey: &Pubkey) -> Result<Vec<PaperRecord>, ScholarError>;

    /// Reviews authored by `pubkey`.
    async fn authored_reviews(&self, pubkey: &Pubkey) -> Result<Vec<ReviewRecord>, ScholarError>;

    /// Overall ratings (0-10) given by reviews referencing the paper at `address`.
    async fn ratings_for_paper(&self, address: &str) -> Result<Vec<f64>, ScholarError>;

    /// Endorsements, governance activity, stake, consistency, and penalties.
    ///
    /// Sources that do not track these report no activity.
    async fn activity_signals(&self, _pubkey: &Pubkey) -> Result<ActivitySignals, ScholarError> {
        Ok(ActivitySignals::default())
    }
}
