//! Engine Regression Tests
//!
//! End-to-end scenarios through `HealthReasoner::evaluate`, pinning the
//! fused behavior of all components: the healthy baseline, the critical
//! fusion case, intent precedence, determinism, and the graceful
//! degradation rules for missing inputs.

use sentinel_pm::config::MachineConfig;
use sentinel_pm::engine::{HealthReasoner, QuestionIntent};
use sentinel_pm::types::{
    AnomalyScoreOutput, ClassificationOutput, ConditionLabel, ForecastOutput, ModelOutputs,
    Parameter, Priority, RiskLevel, SensorWindows, SeverityBand, TrendDirection,
};

fn reasoner() -> HealthReasoner {
    HealthReasoner::new(MachineConfig::default())
}

fn healthy_sensors() -> SensorWindows {
    SensorWindows {
        temperature: vec![66.0; 20],
        vibration: vec![3.2; 20],
        speed: vec![1100.0; 20],
    }
}

fn healthy_models() -> ModelOutputs {
    ModelOutputs {
        forecast: Some(ForecastOutput {
            temperature: 66.1,
            vibration: 3.2,
            speed: 1101.0,
        }),
        classification: Some(ClassificationOutput {
            label: ConditionLabel::Normal,
            raw_code: Some(0),
        }),
        anomaly: Some(AnomalyScoreOutput {
            is_anomaly: false,
            score: 0.05,
        }),
    }
}

fn critical_sensors() -> SensorWindows {
    SensorWindows {
        temperature: vec![85.0, 90.0, 95.0, 100.0, 105.0],
        vibration: vec![7.0, 8.75, 10.5, 12.25, 14.0],
        speed: vec![1100.0; 5],
    }
}

fn critical_models() -> ModelOutputs {
    ModelOutputs {
        forecast: None,
        classification: Some(ClassificationOutput {
            label: ConditionLabel::Critical,
            raw_code: Some(2),
        }),
        anomaly: Some(AnomalyScoreOutput {
            is_anomaly: true,
            score: -0.15,
        }),
    }
}

#[test]
fn test_healthy_scenario() {
    let report = reasoner().evaluate(&healthy_sensors(), &healthy_models(), None);

    assert_eq!(report.risk.level, RiskLevel::Normal);
    assert_eq!(report.risk.score, 0);
    assert!(report.risk.factors.is_empty());

    // Exactly one routine-maintenance card.
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].priority, Priority::Low);

    for parameter in Parameter::ALL {
        assert_eq!(
            report.current_state[&parameter].band,
            SeverityBand::Normal,
            "{parameter} should be normal"
        );
    }
}

#[test]
fn test_critical_fusion_scenario() {
    let report = reasoner().evaluate(&critical_sensors(), &critical_models(), None);

    assert_eq!(report.risk.level, RiskLevel::Critical);
    assert_eq!(report.risk.score, 100, "score must clamp at 100");

    let immediate: Vec<_> = report
        .recommendations
        .iter()
        .filter(|r| r.priority == Priority::Immediate)
        .collect();
    assert!(immediate
        .iter()
        .any(|r| r.action == "Emergency Shutdown Required"));
    assert!(immediate.iter().any(|r| r.action.contains("Temperature")));
    assert!(immediate.iter().any(|r| r.action.contains("Vibration")));

    // The standing emergency card leads the list.
    assert_eq!(report.recommendations[0].action, "Emergency Shutdown Required");

    // Both parameter states are critical and the correlated bearing
    // signature is among the detected anomalies.
    assert_eq!(
        report.current_state[&Parameter::Temperature].band,
        SeverityBand::Critical
    );
    assert_eq!(
        report.current_state[&Parameter::Vibration].band,
        SeverityBand::Critical
    );
    assert!(report
        .anomalies
        .iter()
        .any(|a| a.recommendation.contains("bearing")));
}

#[test]
fn test_intent_precedence_vibration_before_why() {
    let report = reasoner().evaluate(
        &healthy_sensors(),
        &healthy_models(),
        Some("why is vibration high?"),
    );
    assert_eq!(report.intent, QuestionIntent::Vibration);
}

#[test]
fn test_empty_question_is_comprehensive() {
    let report = reasoner().evaluate(&healthy_sensors(), &healthy_models(), Some(""));
    assert_eq!(report.intent, QuestionIntent::Comprehensive);
}

#[test]
fn test_determinism_of_repeated_evaluation() {
    let reasoner = reasoner();
    let sensors = critical_sensors();
    let models = critical_models();

    let first = reasoner.evaluate(&sensors, &models, Some("how bad is it?"));
    let second = reasoner.evaluate(&sensors, &models, Some("how bad is it?"));

    assert_eq!(first.risk.score, second.risk.score);
    assert_eq!(first.risk.level, second.risk.level);
    assert_eq!(first.risk.factors, second.risk.factors);
    assert_eq!(first.response, second.response);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_band_boundary_classifies_upward() {
    let sensors = SensorWindows {
        temperature: vec![85.0; 10],
        ..SensorWindows::default()
    };
    let report = reasoner().evaluate(&sensors, &ModelOutputs::default(), None);
    assert_eq!(
        report.current_state[&Parameter::Temperature].band,
        SeverityBand::Critical
    );
    assert!(report
        .risk
        .factors
        .iter()
        .any(|f| f.starts_with("Critical temperature")));
}

#[test]
fn test_trend_minimum_data_rule() {
    for len in [1, 2] {
        let sensors = SensorWindows {
            temperature: vec![70.0; len],
            ..SensorWindows::default()
        };
        let report = reasoner().evaluate(&sensors, &ModelOutputs::default(), None);
        assert_eq!(
            report.trends[&Parameter::Temperature].direction,
            TrendDirection::Unknown,
            "window of length {len} must be unknown"
        );
    }

    let sensors = SensorWindows {
        temperature: vec![70.0; 3],
        ..SensorWindows::default()
    };
    let report = reasoner().evaluate(&sensors, &ModelOutputs::default(), None);
    assert_ne!(
        report.trends[&Parameter::Temperature].direction,
        TrendDirection::Unknown
    );
}

#[test]
fn test_removing_parameter_preserves_other_contributions() {
    let full = reasoner().evaluate(&critical_sensors(), &critical_models(), None);

    let mut partial_sensors = critical_sensors();
    partial_sensors.vibration = Vec::new();
    let partial = reasoner().evaluate(&partial_sensors, &critical_models(), None);

    // Vibration disappears from the maps entirely.
    assert!(!partial.current_state.contains_key(&Parameter::Vibration));
    assert!(!partial.trends.contains_key(&Parameter::Vibration));

    // Temperature's factors keep their presence in both runs.
    for report in [&full, &partial] {
        assert!(report
            .risk
            .factors
            .iter()
            .any(|f| f.contains("temperature")));
    }
    assert!(!partial.risk.factors.iter().any(|f| f.contains("vibration")));
}

#[test]
fn test_missing_models_contribute_nothing() {
    // Flat high-band temperature, far from the 100-point clamp, so the
    // model contributions are visible in the score delta.
    let sensors = SensorWindows {
        temperature: vec![82.0; 10],
        ..SensorWindows::default()
    };
    let with_models = reasoner().evaluate(&sensors, &critical_models(), None);
    let without_models = reasoner().evaluate(&sensors, &ModelOutputs::default(), None);

    assert!(without_models.interpretation.classification.is_none());
    assert!(without_models.interpretation.anomaly.is_none());
    assert_eq!(without_models.risk.score, 20);
    // Classifier critical (+25) and model anomaly critical (+20) on top.
    assert_eq!(with_models.risk.score, 65);
}

#[test]
fn test_recommendation_priority_never_increases() {
    let scenarios = [
        (healthy_sensors(), healthy_models()),
        (critical_sensors(), critical_models()),
        (
            SensorWindows {
                temperature: vec![82.0; 10],
                vibration: vec![5.0; 10],
                speed: vec![1400.0; 10],
            },
            ModelOutputs::default(),
        ),
    ];

    for (sensors, models) in scenarios {
        let report = reasoner().evaluate(&sensors, &models, None);
        for pair in report.recommendations.windows(2) {
            assert!(
                pair[0].priority <= pair[1].priority,
                "priority order violated: {:?} before {:?}",
                pair[0].priority,
                pair[1].priority
            );
        }
    }
}

#[test]
fn test_response_text_mentions_risk_for_risk_questions() {
    let report = reasoner().evaluate(
        &critical_sensors(),
        &critical_models(),
        Some("is there a risk of failure?"),
    );
    assert_eq!(report.intent, QuestionIntent::Risk);
    assert!(report.response.contains("100/100"));
    assert!(report.response.contains("critical"));
}
