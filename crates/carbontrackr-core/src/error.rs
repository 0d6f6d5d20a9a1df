//! Error types for the carbontrackr-core library.

use thiserror::Error;

/// Main error type for the carbontrackr library.
///
/// Bill extraction itself never produces an error: a text the parser cannot
/// make sense of degrades to an absent consumption value. The variants here
/// cover configuration invariants and file handling only.
#[derive(Error, Debug)]
pub enum TrackrError {
    /// Configuration invariant violation (bad factor table, bad config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the carbontrackr library.
pub type Result<T> = std::result::Result<T, TrackrError>;
