//! Locally detected anomalies (independent of the external anomaly model)

use serde::{Deserialize, Serialize};

use super::{AnomalySeverity, Parameter};

/// Kind of local discontinuity the detector flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    /// Last sample well above the local recent mean.
    Spike,
    /// Last sample well below the local recent mean.
    Drop,
    /// Temperature and vibration simultaneously elevated.
    Correlated,
}

/// A single detected anomaly, produced transiently per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedAnomaly {
    pub kind: AnomalyKind,
    /// One parameter for spike/drop, two for correlated findings.
    pub parameters: Vec<Parameter>,
    pub severity: AnomalySeverity,
    pub description: String,
    pub recommendation: String,
}
