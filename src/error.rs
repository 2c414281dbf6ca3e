//! Claimmatch Error Types
//!
//! Centralized error handling for the I/O edges. The matching core itself is
//! total over its inputs and never produces an error; "no match" is data.

use thiserror::Error;

/// Central error type for claimmatch
#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for claimmatch operations
pub type ClaimResult<T> = Result<T, ClaimError>;
