//! Fused risk assessment

use serde::{Deserialize, Serialize};

/// Overall risk level derived from the fused 0-100 score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Normal,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Fused risk state for one evaluation.
///
/// The score is additive over every contributing input, clamped to
/// [0, 100], and a pure function of the evaluation inputs — identical
/// inputs always produce an identical assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u32,
    pub message: String,
    /// Human-readable reason per contributing input, in scoring order.
    pub factors: Vec<String>,
}
