//! Persistence error types
//!
//! The high-score store is the only fallible boundary in the crate. Every
//! variant is recoverable: callers degrade to a zero record on read and drop
//! the write on save.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the high-score store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record file missing or unreadable
    #[error("failed to read high score record {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file present but not a valid `{"high_score": n}` object
    #[error("malformed high score record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Record could not be serialized
    #[error("failed to encode high score record: {0}")]
    Encode(#[source] serde_json::Error),

    /// Record could not be written
    #[error("failed to write high score record {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when no record file exists yet, the normal first-run case
    pub fn is_missing_record(&self) -> bool {
        matches!(
            self,
            StoreError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
