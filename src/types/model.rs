//! External model outputs and their normalized interpretation
//!
//! The three models (sequence forecaster, condition classifier, anomaly
//! scorer) are black boxes invoked by the caller; the engine only ever sees
//! their outputs, supplied per request. Any of the three sections may be
//! absent when a model did not run — the interpreter then omits the matching
//! interpretation section instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Parameter;

/// Raw outputs of the three external models, consumed as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelOutputs {
    /// Next-cycle point forecast from the sequence model.
    #[serde(default)]
    pub forecast: Option<ForecastOutput>,
    /// Condition label from the multi-class classifier.
    #[serde(default)]
    pub classification: Option<ClassificationOutput>,
    /// Outlier flag + score from the anomaly scorer.
    #[serde(default)]
    pub anomaly: Option<AnomalyScoreOutput>,
}

/// Next-cycle forecast, one value per monitored parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastOutput {
    pub temperature: f64,
    pub vibration: f64,
    pub speed: f64,
}

impl ForecastOutput {
    #[must_use]
    pub const fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Vibration => self.vibration,
            Parameter::Speed => self.speed,
        }
    }
}

/// Machine condition label emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionLabel {
    Normal,
    Warning,
    Critical,
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Classifier output: label plus the raw class code for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutput {
    pub label: ConditionLabel,
    #[serde(default)]
    pub raw_code: Option<i64>,
}

/// Anomaly scorer output. Lower / more negative score = more anomalous.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnomalyScoreOutput {
    pub is_anomaly: bool,
    pub score: f64,
}

/// Severity bucket for anomaly signals (model-reported or detected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Normal,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Normalized, human-readable view of [`ModelOutputs`].
///
/// Sections mirror the raw outputs one-to-one; a missing raw section yields
/// a missing interpretation section, never a fabricated default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelInterpretation {
    pub forecast: Option<ForecastInterpretation>,
    pub classification: Option<ClassificationInterpretation>,
    pub anomaly: Option<AnomalyInterpretation>,
}

/// Forecast compared against current readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInterpretation {
    pub predicted: ForecastOutput,
    /// Forecast minus current, for parameters with a current reading.
    pub deltas: BTreeMap<Parameter, f64>,
    /// One entry per parameter whose forecast crosses its high threshold.
    pub concerns: Vec<String>,
    /// One-line "next cycle" summary.
    pub summary: String,
}

/// Classifier label restated as a risk statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationInterpretation {
    /// Mirrors the label directly; no re-derivation.
    pub risk: ConditionLabel,
    pub message: String,
}

/// Anomaly score bucketed into a severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyInterpretation {
    pub severity: AnomalySeverity,
    pub flagged: bool,
    pub score: f64,
    pub message: String,
}
