// crates/scholar-core/src/lib.rs
//
// scholar-core: Core types, records, and source traits for ScholarChains.
//
// This is the leaf crate that the rest of the workspace depends on.
// It defines the subject identity, the raw records supplied by the event
// store, the scored contribution records consumed by the reputation engine,
// the shared error type, and the trait interface for contribution sources.

pub mod contribution;
pub mod error;
pub mod identity;
pub mod record;
pub mod time;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use scholar_core::PaperContribution;`

// Contribution types
pub use contribution::{PaperContribution, ReviewContribution};

// Raw record types
pub use record::{
    ActivitySignals, ConsistencyOutcome, Endorsement, PaperRecord, ReviewRecord,
};

// Identity types
pub use identity::Pubkey;

// Time helpers
pub use time::{months_since, SECONDS_PER_MONTH};

// Error type
pub use error::ScholarError;

// Traits
pub use traits::ContributionSource;
