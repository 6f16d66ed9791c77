//! Error types for Kinship.
//!
//! Every error is local to the call that produced it. Nothing here carries
//! shared state, so callers can simply propagate with `?`.

use thiserror::Error;

/// Errors returned by the library.
#[derive(Debug, Error)]
pub enum KinshipError {
    /// The comparator factory was asked for a field it cannot order by.
    #[error("`{0}` is not a supported sort field")]
    UnsupportedField(String),

    /// A sex tag outside the recognized categories (`m`, `f`).
    #[error("`{0}` is not a supported sex category")]
    UnsupportedCategory(String),

    /// The input collection could not be parsed.
    #[error("failed to parse person records: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input collection could not be read.
    #[error("failed to read person records: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Kinship operations.
pub type Result<T> = std::result::Result<T, KinshipError>;
