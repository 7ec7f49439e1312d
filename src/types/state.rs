//! Derived per-parameter state snapshots and severity bands

use serde::{Deserialize, Serialize};

/// Severity band a parameter value falls into.
///
/// Classification uses at-or-above semantics: a value exactly equal to a
/// band's lower bound belongs to that band, not the one below. Ordering is
/// by severity, so `band >= SeverityBand::High` reads naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    #[default]
    Normal,
    Warning,
    High,
    Critical,
}

impl SeverityBand {
    /// Anything above normal warrants at least a mention in responses.
    #[must_use]
    pub fn is_elevated(self) -> bool {
        self > Self::Normal
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Immutable snapshot of one parameter's recent behavior.
///
/// Created fresh on every evaluation from the raw window; never mutated.
/// Statistics cover the last `recent_window` samples (default 10); the
/// volatility field is the population standard deviation over that same
/// sub-window, reported as 0.0 when fewer samples are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterState {
    /// Last sample in the window.
    pub current: f64,
    pub recent_average: f64,
    pub recent_max: f64,
    pub recent_min: f64,
    pub volatility: f64,
    pub band: SeverityBand,
}
