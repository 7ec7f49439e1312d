//! Question intent routing
//!
//! Classifies a free-text operator question into one of thirteen topics by
//! keyword presence. Keyword sets may overlap; precedence is the fixed
//! declaration order below (temperature → vibration → speed → anomaly →
//! forecast → risk → recommendation → health → trend → why → comparison →
//! correlation), first match wins. Callers must preserve this order for
//! reproducible routing: "why is vibration high?" routes to vibration, not
//! why, because vibration is tested first.

use serde::{Deserialize, Serialize};

/// Topic a question routes to before response rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionIntent {
    Temperature,
    Vibration,
    Speed,
    Anomaly,
    Forecast,
    Risk,
    Recommendation,
    Health,
    Trend,
    Why,
    Comparison,
    Correlation,
    /// Fallback for empty or unmatched questions.
    Comprehensive,
}

const TEMPERATURE_KEYWORDS: &[&str] = &[
    "temperature", "temp", "hot", "heat", "overheat", "cooling", "thermal", "cold", "warm",
];
const VIBRATION_KEYWORDS: &[&str] = &[
    "vibration", "vibrate", "shake", "shaking", "mechanical", "bearing", "alignment", "balance",
];
const SPEED_KEYWORDS: &[&str] = &[
    "speed", "rpm", "fast", "slow", "motor", "rotation", "velocity",
];
const ANOMALY_KEYWORDS: &[&str] = &[
    "anomaly", "abnormal", "unusual", "strange", "weird", "wrong", "issue", "problem", "error",
];
const FORECAST_KEYWORDS: &[&str] = &[
    "forecast", "predict", "future", "next", "will", "going to", "expect", "anticipate",
];
const RISK_KEYWORDS: &[&str] = &[
    "risk", "failure", "fail", "breakdown", "danger", "safe", "critical", "emergency",
];
const RECOMMENDATION_KEYWORDS: &[&str] = &[
    "recommend", "suggest", "should", "what to do", "action", "fix", "solve", "help", "repair",
];
const HEALTH_KEYWORDS: &[&str] = &[
    "health", "status", "condition", "how is", "overall", "summary", "report", "state",
];
const TREND_KEYWORDS: &[&str] = &[
    "trend", "trending", "pattern", "changing", "increasing", "decreasing", "rising", "falling",
];
const WHY_KEYWORDS: &[&str] = &["why", "explain", "reason", "cause", "because", "how come"];
const COMPARISON_KEYWORDS: &[&str] = &[
    "compare", "difference", "vs", "versus", "between", "which",
];
const CORRELATION_KEYWORDS: &[&str] = &[
    "correlation", "related", "connection", "relationship", "linked",
];

/// Ordered (keywords, intent) table; the order IS the routing contract.
const ROUTES: &[(&[&str], QuestionIntent)] = &[
    (TEMPERATURE_KEYWORDS, QuestionIntent::Temperature),
    (VIBRATION_KEYWORDS, QuestionIntent::Vibration),
    (SPEED_KEYWORDS, QuestionIntent::Speed),
    (ANOMALY_KEYWORDS, QuestionIntent::Anomaly),
    (FORECAST_KEYWORDS, QuestionIntent::Forecast),
    (RISK_KEYWORDS, QuestionIntent::Risk),
    (RECOMMENDATION_KEYWORDS, QuestionIntent::Recommendation),
    (HEALTH_KEYWORDS, QuestionIntent::Health),
    (TREND_KEYWORDS, QuestionIntent::Trend),
    (WHY_KEYWORDS, QuestionIntent::Why),
    (COMPARISON_KEYWORDS, QuestionIntent::Comparison),
    (CORRELATION_KEYWORDS, QuestionIntent::Correlation),
];

/// Route a question to its intent. Pure, stateless, case-insensitive.
#[must_use]
pub fn classify_intent(question: &str) -> QuestionIntent {
    let question = question.to_lowercase();
    if question.trim().is_empty() {
        return QuestionIntent::Comprehensive;
    }

    for (keywords, intent) in ROUTES {
        if keywords.iter().any(|keyword| question.contains(keyword)) {
            return *intent;
        }
    }

    QuestionIntent::Comprehensive
}
