use thiserror::Error;

/// Workspace-wide error types for ScholarChains reputation.
///
/// The scoring functions are total over their numeric domains and never
/// return these; they surface only at the data-fetch and CLI boundaries.
#[derive(Debug, Error)]
pub enum ScholarError {
    /// Contribution source error (event store query, lock poisoning).
    #[error("Source error: {0}")]
    Source(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (unreadable or malformed config file).
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ScholarError {
    fn from(e: serde_json::Error) -> Self {
        ScholarError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for ScholarError {
    fn from(e: std::io::Error) -> Self {
        ScholarError::Io(e.to_string())
    }
}
