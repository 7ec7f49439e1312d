//! Sled-backed risk record persistence
//!
//! Key: evaluation timestamp in milliseconds as u64 big-endian bytes
//! (sorts chronologically). Value: JSON-serialized [`RiskRecord`].
//!
//! Writes do not flush individually; sled's background flushing is
//! sufficient for monitoring data that is regenerated every cycle.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Parameter, RiskLevel};

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal durable record of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRecord {
    pub timestamp: DateTime<Utc>,
    pub machine: String,
    /// Last reading per present parameter at evaluation time.
    pub snapshot: BTreeMap<Parameter, f64>,
    pub level: RiskLevel,
    pub score: u32,
}

/// History storage for risk records.
#[derive(Clone)]
pub struct RiskHistoryStorage {
    db: Arc<sled::Db>,
}

impl RiskHistoryStorage {
    /// Open or create the history database at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Append a risk record.
    pub fn store(&self, record: &RiskRecord) -> Result<(), StorageError> {
        let key = u64::try_from(record.timestamp.timestamp_millis().max(0))
            .unwrap_or(0)
            .to_be_bytes();
        let value = serde_json::to_vec(record)?;
        self.db.insert(key, value)?;
        Ok(())
    }

    /// The most recent `limit` records, newest first.
    ///
    /// Records that fail to deserialize (e.g. written by an older build)
    /// are skipped rather than failing the whole read.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<RiskRecord> {
        let mut records = Vec::with_capacity(limit.min(64));

        for item in self.db.iter().rev() {
            if records.len() >= limit {
                break;
            }
            if let Ok((_key, value)) = item {
                if let Ok(record) = serde_json::from_slice::<RiskRecord>(&value) {
                    records.push(record);
                }
            }
        }

        records
    }

    /// Total number of stored records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.db.len()
    }

    /// Remove all records.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.clear()?;
        self.db.flush()?;
        Ok(())
    }
}
