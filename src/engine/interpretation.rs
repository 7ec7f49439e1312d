//! Normalization of external model outputs
//!
//! Turns the raw forecaster/classifier/anomaly-scorer outputs into a
//! [`ModelInterpretation`] with deltas, concern lists, and human-readable
//! messages. A model that did not run simply produces no section; the risk
//! assessor then skips that model's contribution rather than inventing one.

use std::collections::BTreeMap;

use crate::config::{ThresholdConfig, TuningConfig};
use crate::types::{
    AnomalyInterpretation, AnomalySeverity, ClassificationInterpretation, ConditionLabel,
    ForecastInterpretation, ForecastOutput, ModelInterpretation, ModelOutputs, Parameter,
    ParameterState,
};

/// Normalize whatever model outputs are present.
#[must_use]
pub fn interpret_models(
    models: &ModelOutputs,
    states: &BTreeMap<Parameter, ParameterState>,
    thresholds: &ThresholdConfig,
    tuning: &TuningConfig,
) -> ModelInterpretation {
    ModelInterpretation {
        forecast: models
            .forecast
            .as_ref()
            .map(|f| interpret_forecast(f, states, thresholds)),
        classification: models.classification.as_ref().map(|c| {
            let message = match c.label {
                ConditionLabel::Critical => "Machine signature matches critical failure patterns",
                ConditionLabel::Warning => "Machine signature shows warning signs",
                ConditionLabel::Normal => "Machine signature is healthy",
            };
            ClassificationInterpretation {
                risk: c.label,
                message: message.to_string(),
            }
        }),
        anomaly: models.anomaly.as_ref().map(|a| {
            let severity = if !a.is_anomaly {
                // An unflagged reading is normal regardless of score sign.
                AnomalySeverity::Normal
            } else if a.score < tuning.anomaly_score_critical {
                AnomalySeverity::Critical
            } else if a.score < tuning.anomaly_score_high {
                AnomalySeverity::High
            } else {
                AnomalySeverity::Medium
            };
            let message = match severity {
                AnomalySeverity::Critical => {
                    "Severe anomaly detected - immediate investigation required"
                }
                AnomalySeverity::High => "Significant anomaly detected - inspect soon",
                AnomalySeverity::Medium => "Anomaly detected - monitor closely",
                AnomalySeverity::Normal => "No anomalies detected",
            };
            AnomalyInterpretation {
                severity,
                flagged: a.is_anomaly,
                score: a.score,
                message: message.to_string(),
            }
        }),
    }
}

fn interpret_forecast(
    forecast: &ForecastOutput,
    states: &BTreeMap<Parameter, ParameterState>,
    thresholds: &ThresholdConfig,
) -> ForecastInterpretation {
    let deltas: BTreeMap<Parameter, f64> = states
        .iter()
        .map(|(&parameter, state)| (parameter, forecast.value(parameter) - state.current))
        .collect();

    let mut concerns = Vec::new();
    for parameter in Parameter::ALL {
        let predicted = forecast.value(parameter);
        let high = thresholds.for_parameter(parameter).high;
        if predicted >= high {
            concerns.push(format!(
                "{parameter} will reach {predicted:.1} {} (high threshold {high:.1})",
                parameter.unit()
            ));
        }
    }

    let summary = format!(
        "Next cycle: Temp {:.1} °C, Vib {:.1} mm/s, Speed {:.0} RPM",
        forecast.temperature, forecast.vibration, forecast.speed
    );

    ForecastInterpretation {
        predicted: *forecast,
        deltas,
        concerns,
        summary,
    }
}
