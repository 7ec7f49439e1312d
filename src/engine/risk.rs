//! Multi-source risk fusion
//!
//! Fuses parameter states, trends, model interpretations, and detected
//! anomalies into a single additive 0-100 score and a discrete risk level.
//! The score is a pure function of its inputs: no clock, no hidden state,
//! and strictly non-decreasing in the severity of every contributing input.
//!
//! Falling trends currently contribute nothing, mirroring the rising-only
//! behavior of the fielded system. The increment is a named config value so
//! a per-parameter "dangerous direction" table can replace the check without
//! touching this function's shape.

use std::collections::BTreeMap;

use crate::config::{ScoringConfig, TuningConfig};
use crate::types::{
    AnomalySeverity, ConditionLabel, DetectedAnomaly, ModelInterpretation, Parameter,
    ParameterState, RiskAssessment, RiskLevel, SeverityBand, TrendDirection, TrendResult,
};

/// Fuse all analysis results into one risk assessment.
#[must_use]
pub fn assess_risk(
    states: &BTreeMap<Parameter, ParameterState>,
    trends: &BTreeMap<Parameter, TrendResult>,
    interpretation: &ModelInterpretation,
    anomalies: &[DetectedAnomaly],
    scoring: &ScoringConfig,
    tuning: &TuningConfig,
) -> RiskAssessment {
    let mut score: u32 = 0;
    let mut factors = Vec::new();

    for (parameter, state) in states {
        match state.band {
            SeverityBand::Critical => {
                factors.push(format!("Critical {parameter}: {:.1}", state.current));
                score += scoring.band_critical;
            }
            SeverityBand::High => {
                factors.push(format!("High {parameter}: {:.1}", state.current));
                score += scoring.band_high;
            }
            SeverityBand::Warning => {
                factors.push(format!("Elevated {parameter}: {:.1}", state.current));
                score += scoring.band_warning;
            }
            SeverityBand::Normal => {}
        }
    }

    for (parameter, trend) in trends {
        if trend.direction == TrendDirection::Rising
            && trend.strength > tuning.rapid_trend_strength
        {
            factors.push(format!("{} rising rapidly", parameter.label()));
            score += scoring.rapid_rise;
        }
    }

    if let Some(classification) = &interpretation.classification {
        match classification.risk {
            ConditionLabel::Critical => {
                factors.push("Condition model predicts critical failure risk".to_string());
                score += scoring.classifier_critical;
            }
            ConditionLabel::Warning => {
                factors.push("Condition model shows warning signs".to_string());
                score += scoring.classifier_warning;
            }
            ConditionLabel::Normal => {}
        }
    }

    if let Some(anomaly) = &interpretation.anomaly {
        match anomaly.severity {
            AnomalySeverity::Critical => {
                factors.push("Critical anomaly detected".to_string());
                score += scoring.model_anomaly_critical;
            }
            AnomalySeverity::High | AnomalySeverity::Medium => {
                factors.push("Anomaly detected".to_string());
                score += scoring.model_anomaly_elevated;
            }
            AnomalySeverity::Normal => {}
        }
    }

    // Medium local findings appear in the output but carry no score weight.
    for anomaly in anomalies {
        match anomaly.severity {
            AnomalySeverity::Critical => score += scoring.detected_anomaly_critical,
            AnomalySeverity::High => score += scoring.detected_anomaly_high,
            AnomalySeverity::Medium | AnomalySeverity::Normal => {}
        }
    }

    let score = score.min(100);
    let (level, message) = if score >= scoring.level_critical {
        (RiskLevel::Critical, "CRITICAL: Immediate action required")
    } else if score >= scoring.level_high {
        (RiskLevel::High, "HIGH RISK: Urgent attention needed")
    } else if score >= scoring.level_medium {
        (RiskLevel::Medium, "MEDIUM RISK: Schedule inspection soon")
    } else if score >= scoring.level_low {
        (RiskLevel::Low, "LOW RISK: Monitor closely")
    } else {
        (RiskLevel::Normal, "Normal operation")
    };

    RiskAssessment {
        level,
        score,
        message: message.to_string(),
        factors,
    }
}
