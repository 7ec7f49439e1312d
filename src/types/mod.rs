//! Shared data structures for the machine-health reasoning pipeline
//!
//! One file per type family:
//! - sensor: monitored parameters and raw windows
//! - state: severity bands and per-parameter snapshots
//! - trend: fitted trend direction/strength
//! - model: external model outputs and their interpretation
//! - anomaly: locally detected spikes/drops/correlated findings
//! - correlation: cross-parameter Pearson results
//! - risk: fused risk assessment
//! - recommendation: prioritized action cards

mod anomaly;
mod correlation;
mod model;
mod recommendation;
mod risk;
mod sensor;
mod state;
mod trend;

pub use anomaly::*;
pub use correlation::*;
pub use model::*;
pub use recommendation::*;
pub use risk::*;
pub use sensor::*;
pub use state::*;
pub use trend::*;
