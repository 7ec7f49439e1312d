//! Trend analysis results

use serde::{Deserialize, Serialize};

/// Direction of a fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
    /// Window shorter than the minimum usable length (3 samples).
    Unknown,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Per-parameter trend over the recent window.
///
/// `strength` is `min(|slope| * 10, 10)` for rising/falling trends and 0
/// for stable/unknown ones; direction and strength are independent axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// 0-10 scale; 0 when stable or unknown.
    pub strength: f64,
    /// Signed least-squares slope per sample step.
    pub slope: f64,
    /// Templated one-sentence description.
    pub description: String,
}

impl TrendResult {
    /// Marker result for windows too short to fit a line.
    #[must_use]
    pub fn insufficient_data() -> Self {
        Self {
            direction: TrendDirection::Unknown,
            strength: 0.0,
            slope: 0.0,
            description: "Insufficient data".to_string(),
        }
    }
}
