//! Risk History Storage
//!
//! Persistent storage for per-evaluation risk records using sled. The
//! engine itself needs no persistence; this is the caller-side durable
//! record (timestamp, snapshot, risk level, risk score) appended after
//! each evaluation and served back over the history endpoint.

mod history;

pub use history::{RiskHistoryStorage, RiskRecord, StorageError};
