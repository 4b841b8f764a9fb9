// crates/scholar-core/src/identity.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a subject whose reputation is computed.
///
/// Holds the subject's public key as published on the event store
/// (hex-encoded). The engine treats it as an opaque string; it is never
/// parsed or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pubkey(String);

impl Pubkey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty key identifies nobody; `score_subject` returns `None` for it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pubkey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Pubkey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
