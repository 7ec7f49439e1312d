//! Cross-parameter correlation results

use serde::{Deserialize, Serialize};

use super::Parameter;

/// Strength class of a Pearson coefficient: |r| > 0.7 strong,
/// |r| > 0.4 moderate, else weak (thresholds are configurable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Weak,
    Moderate,
    Strong,
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        };
        write!(f, "{s}")
    }
}

/// Sign of the correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    Positive,
    Negative,
}

impl std::fmt::Display for CorrelationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        };
        write!(f, "{s}")
    }
}

/// Pearson correlation for one unordered parameter pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairCorrelation {
    pub a: Parameter,
    pub b: Parameter,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl PairCorrelation {
    /// Whether this pair is both strong and positively correlated —
    /// the only combination that produces advisory patterns.
    #[must_use]
    pub fn is_strong_positive(&self) -> bool {
        self.strength == CorrelationStrength::Strong
            && self.direction == CorrelationDirection::Positive
    }
}

/// Result of the correlation analysis over the aligned recent windows.
///
/// Patterns are advisory text only; they do not feed the risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CorrelationReport {
    /// Fewer than 3 aligned samples were available.
    InsufficientData,
    Analyzed {
        pairs: Vec<PairCorrelation>,
        patterns: Vec<String>,
    },
}

impl CorrelationReport {
    /// Look up the coefficient for an unordered parameter pair.
    #[must_use]
    pub fn pair(&self, a: Parameter, b: Parameter) -> Option<&PairCorrelation> {
        match self {
            Self::InsufficientData => None,
            Self::Analyzed { pairs, .. } => pairs
                .iter()
                .find(|p| (p.a == a && p.b == b) || (p.a == b && p.b == a)),
        }
    }
}
