//! High score record
//!
//! Persisted to a JSON file as `{"high_score": n}`, rewritten in full
//! whenever a new best is confirmed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// On-disk shape of the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

/// Durable best score with an in-memory cache
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    /// Backing file (None = memory only, nothing persisted)
    path: Option<PathBuf>,
    /// Mirrors the last value loaded or recorded
    cached: u64,
}

impl HighScoreStore {
    /// Open a store backed by `path`, loading the current record.
    ///
    /// A missing or malformed file yields a high score of zero.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = match Self::read_record(&path) {
            Ok(record) => {
                log::info!("Loaded high score {} from {}", record.high_score, path.display());
                record.high_score
            }
            Err(err) if err.is_missing_record() => {
                log::info!("No high score record at {}, starting at 0", path.display());
                0
            }
            Err(err) => {
                log::warn!("Ignoring unusable high score record ({err}), starting at 0");
                0
            }
        };
        Self {
            path: Some(path),
            cached,
        }
    }

    /// Store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            path: None,
            cached: 0,
        }
    }

    /// Read the record at `path`
    pub fn read_record(path: &Path) -> Result<HighScoreRecord, StoreError> {
        let json = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reload from disk, degrading to zero on any failure
    pub fn load(&mut self) -> u64 {
        self.cached = match &self.path {
            Some(path) => Self::read_record(path)
                .map(|record| record.high_score)
                .unwrap_or(0),
            None => self.cached,
        };
        self.cached
    }

    /// Write `value` as the record (full overwrite)
    pub fn save(&self, value: u64) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let record = HighScoreRecord { high_score: value };
        let json = serde_json::to_string(&record).map_err(StoreError::Encode)?;
        fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })
    }

    /// Update the cache and persist it.
    ///
    /// The cache is updated even if the write fails, so the value holds for
    /// the rest of the session.
    pub fn record(&mut self, value: u64) -> Result<(), StoreError> {
        self.cached = value;
        self.save(value)
    }

    /// Cached best score
    pub fn high_score(&self) -> u64 {
        self.cached
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let store = HighScoreStore::open(&path);
        assert_eq!(store.high_score(), 0);

        let err = HighScoreStore::read_record(&path).unwrap_err();
        assert!(err.is_missing_record());
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(HighScoreStore::open(&path).high_score(), 0);

        // Negative values are not a valid record either
        fs::write(&path, r#"{"high_score": -5}"#).unwrap();
        assert_eq!(HighScoreStore::open(&path).high_score(), 0);

        let err = HighScoreStore::read_record(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(!err.is_missing_record());
    }

    #[test]
    fn test_record_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");

        let mut store = HighScoreStore::open(&path);
        store.record(1234).unwrap();
        assert_eq!(store.high_score(), 1234);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.high_score(), 1234);

        let json = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["high_score"], 1234);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let store = HighScoreStore::open(&path);
        store.save(900).unwrap();
        store.save(50).unwrap();
        assert_eq!(HighScoreStore::read_record(&path).unwrap().high_score, 50);
    }

    #[test]
    fn test_write_failure_keeps_cache() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the write must fail
        let path = dir.path().join("missing").join("highscore.json");
        let mut store = HighScoreStore::open(&path);

        let err = store.record(777).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!err.is_missing_record());
        assert_eq!(store.high_score(), 777);
    }

    #[test]
    fn test_load_refreshes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let mut store = HighScoreStore::open(&path);
        fs::write(&path, r#"{"high_score": 42}"#).unwrap();
        assert_eq!(store.load(), 42);
        fs::remove_file(&path).unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = HighScoreStore::in_memory();
        assert!(store.path().is_none());
        store.record(10).unwrap();
        assert_eq!(store.high_score(), 10);
        assert_eq!(store.load(), 10);
    }
}
