//! Sensor Health Reasoning & Risk-Fusion Engine
//!
//! Takes raw multi-parameter sensor windows plus the three external model
//! outputs and produces a quantified risk state, ranked recommendations,
//! and a natural-language answer to an optional operator question.
//!
//! ## Pipeline
//!
//! State extraction, trend fitting, correlation analysis, and local anomaly
//! detection run independently over the same windows; the model interpreter
//! normalizes the external outputs; the risk assessor fuses everything into
//! one score; the recommendation engine expands the risk picture into action
//! cards; and the response composer renders the answer for the routed
//! question intent.
//!
//! Evaluation is synchronous, allocation-light, and stateless: identical
//! inputs produce identical output. The models are injected per call — the
//! engine never reaches into ambient globals and never performs I/O.

pub mod anomaly;
pub mod conversation;
pub mod correlation;
pub mod intent;
pub mod interpretation;
pub mod recommendations;
pub mod response;
pub mod risk;
pub mod state;
pub mod trend;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MachineConfig;
use crate::types::{
    CorrelationReport, DetectedAnomaly, ModelInterpretation, ModelOutputs, Parameter,
    ParameterState, Recommendation, RiskAssessment, SensorWindows, TrendResult,
};

pub use conversation::{ConversationEntry, ConversationLog};
pub use intent::QuestionIntent;

/// Complete result of one evaluation: the rendered answer plus every
/// structured sub-result, so callers (HTTP handlers, report generators,
/// alerting jobs) can consume fields independently of the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub response: String,
    pub intent: QuestionIntent,
    pub current_state: BTreeMap<Parameter, ParameterState>,
    pub trends: BTreeMap<Parameter, TrendResult>,
    pub interpretation: ModelInterpretation,
    pub anomalies: Vec<DetectedAnomaly>,
    pub risk: RiskAssessment,
    pub recommendations: Vec<Recommendation>,
    pub correlations: CorrelationReport,
}

/// The reasoning engine. Holds only configuration; safe to share across
/// any number of concurrent evaluations without synchronization.
#[derive(Debug, Clone)]
pub struct HealthReasoner {
    config: MachineConfig,
}

impl HealthReasoner {
    #[must_use]
    pub fn new(config: MachineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Run the full reasoning pipeline over one set of inputs.
    ///
    /// Degrades gracefully: missing parameters and missing model outputs
    /// shrink the result, they never fail it.
    #[must_use]
    pub fn evaluate(
        &self,
        sensors: &SensorWindows,
        models: &ModelOutputs,
        question: Option<&str>,
    ) -> EvaluationReport {
        let thresholds = &self.config.thresholds;
        let tuning = &self.config.tuning;

        let current_state = state::extract_states(sensors, thresholds, tuning);
        let trends = trend::analyze_trends(sensors, tuning);
        let correlations = correlation::analyze_correlations(sensors, tuning);
        let anomalies = anomaly::detect_anomalies(sensors, thresholds, tuning);
        let interpretation =
            interpretation::interpret_models(models, &current_state, thresholds, tuning);

        let risk = risk::assess_risk(
            &current_state,
            &trends,
            &interpretation,
            &anomalies,
            &self.config.scoring,
            tuning,
        );
        let recommendations = recommendations::generate_recommendations(
            &risk,
            &current_state,
            &trends,
            thresholds,
            tuning,
        );

        let intent = question.map_or(QuestionIntent::Comprehensive, intent::classify_intent);

        debug!(
            ?intent,
            risk_level = %risk.level,
            risk_score = risk.score,
            anomalies = anomalies.len(),
            recommendations = recommendations.len(),
            "evaluation complete"
        );

        let response = response::compose(
            intent,
            &response::ResponseContext {
                states: &current_state,
                trends: &trends,
                interpretation: &interpretation,
                anomalies: &anomalies,
                risk: &risk,
                recommendations: &recommendations,
                correlations: &correlations,
            },
        );

        EvaluationReport {
            response,
            intent,
            current_state,
            trends,
            interpretation,
            anomalies,
            risk,
            recommendations,
            correlations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_inputs_still_answers() {
        let reasoner = HealthReasoner::new(MachineConfig::default());
        let report = reasoner.evaluate(
            &SensorWindows::default(),
            &ModelOutputs::default(),
            None,
        );
        assert!(!report.response.is_empty());
        assert!(report.current_state.is_empty());
        assert!(report.trends.is_empty());
        assert_eq!(report.risk.score, 0);
        assert_eq!(report.intent, QuestionIntent::Comprehensive);
    }

    #[test]
    fn test_question_routes_and_is_reflected() {
        let reasoner = HealthReasoner::new(MachineConfig::default());
        let sensors = SensorWindows {
            vibration: vec![2.0; 10],
            ..SensorWindows::default()
        };
        let report = reasoner.evaluate(
            &sensors,
            &ModelOutputs::default(),
            Some("why is vibration high?"),
        );
        assert_eq!(report.intent, QuestionIntent::Vibration);
        assert!(report.response.contains("Vibration"));
    }
}
