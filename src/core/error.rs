//! Contract violations surfaced by the builder.
//!
//! Sparse data (small pools, missing lands, no colored symbols) is never an
//! error. Those cases come back as shortfall counts on the build results.

use thiserror::Error;

/// Errors raised when an input breaks the builder's contract.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("unknown color code {0:?}, expected one of W, U, B, R, G")]
    UnknownColor(String),

    #[error("invalid count {count} for {name:?}: counts must be at least 1")]
    InvalidCount { name: String, count: i64 },

    #[error("line {line}: count in {text:?} is not an integer")]
    MalformedCount { line: usize, text: String },

    #[error("malformed card {name:?}: missing {field}")]
    MalformedCard { name: String, field: &'static str },

    #[error("line {line}: expected \"<count> <name>\", got {text:?}")]
    MalformedPoolLine { line: usize, text: String },

    #[error("ratings payload has no JSON array: {0}")]
    RatingsPayload(String),

    #[error("rule {tag:?} references unknown custom predicate {name:?}")]
    UnknownPredicate { tag: String, name: String },

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
