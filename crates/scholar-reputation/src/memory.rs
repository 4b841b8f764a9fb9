// crates/scholar-reputation/src/memory.rs
//
// In-memory ContributionSource. Holds authored papers and reviews plus
// per-subject activity signals, and loads from the JSON fixture format used
// by the CLI and tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use scholar_core::{
    ActivitySignals, ContributionSource, PaperRecord, Pubkey, ReviewRecord, ScholarError,
};
use serde::{Deserialize, Serialize};

/// A paper together with its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredPaper {
    author: Pubkey,
    #[serde(flatten)]
    record: PaperRecord,
}

/// A review together with its author and the paper it rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredReview {
    author: Pubkey,
    /// Address of the reviewed paper, if the review references one.
    #[serde(default)]
    paper_address: Option<String>,
    /// Overall rating (0-10) the review gives that paper.
    #[serde(default)]
    overall_rating: Option<f64>,
    #[serde(flatten)]
    record: ReviewRecord,
}

/// Fixture contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SourceState {
    #[serde(default)]
    papers: Vec<StoredPaper>,
    #[serde(default)]
    reviews: Vec<StoredReview>,
    #[serde(default)]
    activity: HashMap<Pubkey, ActivitySignals>,
}

/// ContributionSource backed by in-process collections.
///
/// Uses `std::sync::RwLock`; every lock is released before returning, so
/// the async methods never hold it across an await point.
#[derive(Debug, Default)]
pub struct InMemoryContributionSource {
    state: RwLock<SourceState>,
}

impl InMemoryContributionSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SourceState::default()),
        }
    }

    /// Parse a source from a JSON fixture.
    ///
    /// The fixture is an object with optional `papers`, `reviews`, and
    /// `activity` members. Papers carry `author`, `address`, `created_at`,
    /// and `citations`; reviews carry `author`, `event_id`, `created_at`,
    /// and optionally `quality_rating`, `paper_address`, `overall_rating`.
    /// `activity` maps a pubkey to its activity signals.
    pub fn from_json(json: &str) -> Result<Self, ScholarError> {
        let state: SourceState = serde_json::from_str(json)?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Load a JSON fixture from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScholarError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ScholarError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Serialize the current contents back into the fixture format.
    pub fn to_json(&self) -> Result<String, ScholarError> {
        let state = self.read()?;
        Ok(serde_json::to_string_pretty(&*state)?)
    }

    pub fn add_paper(&self, author: Pubkey, record: PaperRecord) -> Result<(), ScholarError> {
        self.write()?.papers.push(StoredPaper { author, record });
        Ok(())
    }

    /// Record a review by `author`, optionally rating the paper at `paper_address`.
    pub fn add_review(
        &self,
        author: Pubkey,
        record: ReviewRecord,
        paper_address: Option<String>,
        overall_rating: Option<f64>,
    ) -> Result<(), ScholarError> {
        self.write()?.reviews.push(StoredReview {
            author,
            paper_address,
            overall_rating,
            record,
        });
        Ok(())
    }

    /// Replace the activity signals recorded for `pubkey`.
    pub fn set_activity(&self, pubkey: Pubkey, signals: ActivitySignals) -> Result<(), ScholarError> {
        self.write()?.activity.insert(pubkey, signals);
        Ok(())
    }

    /// Every distinct author of a paper or review, sorted.
    pub fn subjects(&self) -> Result<Vec<Pubkey>, ScholarError> {
        let state = self.read()?;
        let mut subjects: Vec<Pubkey> = state
            .papers
            .iter()
            .map(|p| p.author.clone())
            .chain(state.reviews.iter().map(|r| r.author.clone()))
            .collect();
        subjects.sort();
        subjects.dedup();
        Ok(subjects)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, SourceState>, ScholarError> {
        self.state
            .read()
            .map_err(|e| ScholarError::Source(format!("RwLock poisoned: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, SourceState>, ScholarError> {
        self.state
            .write()
            .map_err(|e| ScholarError::Source(format!("RwLock poisoned: {}", e)))
    }
}

#[async_trait]
impl ContributionSource for InMemoryContributionSource {
    async fn authored_papers(&self, pubkey: &Pubkey) -> Result<Vec<PaperRecord>, ScholarError> {
        let state = self.read()?;
        Ok(state
            .papers
            .iter()
            .filter(|p| &p.author == pubkey)
            .map(|p| p.record.clone())
            .collect())
    }

    async fn authored_reviews(&self, pubkey: &Pubkey) -> Result<Vec<ReviewRecord>, ScholarError> {
        let state = self.read()?;
        Ok(state
            .reviews
            .iter()
            .filter(|r| &r.author == pubkey)
            .map(|r| r.record.clone())
            .collect())
    }

    async fn ratings_for_paper(&self, address: &str) -> Result<Vec<f64>, ScholarError> {
        let state = self.read()?;
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.paper_address.as_deref() == Some(address))
            .filter_map(|r| r.overall_rating)
            .collect())
    }

    async fn activity_signals(&self, pubkey: &Pubkey) -> Result<ActivitySignals, ScholarError> {
        let state = self.read()?;
        Ok(state.activity.get(pubkey).cloned().unwrap_or_default())
    }
}
