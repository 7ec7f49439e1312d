//! Tiered recommendation generation
//!
//! Expands the risk picture into hand-authored action cards: one standing
//! emergency card when overall risk is critical, one card per elevated
//! parameter band, an escalation card per rapidly rising trend, and a
//! routine-maintenance card when nothing is elevated. Cards are collected
//! additively and then stably sorted by priority, so the output is always
//! grouped immediate → high → medium → low with the emergency card leading
//! its group.
//!
//! Missing parameters simply contribute no card; generation never fails.

use std::collections::BTreeMap;

use crate::config::{ThresholdConfig, TuningConfig};
use crate::types::{
    ActionCategory, Parameter, ParameterState, Priority, Recommendation, RiskAssessment,
    RiskLevel, SeverityBand, TrendDirection, TrendResult,
};

/// Build the prioritized action plan for one evaluation.
#[must_use]
pub fn generate_recommendations(
    risk: &RiskAssessment,
    states: &BTreeMap<Parameter, ParameterState>,
    trends: &BTreeMap<Parameter, TrendResult>,
    thresholds: &ThresholdConfig,
    tuning: &TuningConfig,
) -> Vec<Recommendation> {
    let mut cards = Vec::new();

    if risk.level == RiskLevel::Critical {
        cards.push(emergency_card());
    }

    for parameter in Parameter::ALL {
        if let Some(state) = states.get(&parameter) {
            if let Some(card) = parameter_card(parameter, state, thresholds) {
                cards.push(card);
            }
        }
    }

    for (parameter, trend) in trends {
        if trend.direction == TrendDirection::Rising && trend.strength > tuning.trend_card_strength
        {
            cards.push(trend_card(*parameter, trend));
        }
    }

    if matches!(risk.level, RiskLevel::Normal | RiskLevel::Low) {
        cards.push(routine_card());
    }

    // Stable sort: grouping by priority while preserving authoring order
    // within each group (emergency card first among immediate cards).
    cards.sort_by_key(|card| card.priority);
    cards
}

fn card(
    priority: Priority,
    action: &str,
    reason: String,
    category: ActionCategory,
    icon: &str,
    steps: &[&str],
) -> Recommendation {
    Recommendation {
        priority,
        action: action.to_string(),
        reason,
        category,
        steps: steps.iter().map(ToString::to_string).collect(),
        icon: icon.to_string(),
    }
}

/// Standing card emitted whenever overall risk is critical, independent of
/// which parameter triggered it.
fn emergency_card() -> Recommendation {
    card(
        Priority::Immediate,
        "Emergency Shutdown Required",
        "Critical risk detected - machine failure imminent".to_string(),
        ActionCategory::Safety,
        "🚨",
        &[
            "Stop machine operation immediately",
            "Isolate power supply and lock out",
            "Tag machine as under maintenance",
            "Contact maintenance team urgently",
            "Do not restart until inspection is complete",
        ],
    )
}

fn parameter_card(
    parameter: Parameter,
    state: &ParameterState,
    thresholds: &ThresholdConfig,
) -> Option<Recommendation> {
    match parameter {
        Parameter::Temperature => temperature_card(state, thresholds),
        Parameter::Vibration => vibration_card(state, thresholds),
        Parameter::Speed => speed_card(state, thresholds),
    }
}

fn temperature_card(
    state: &ParameterState,
    thresholds: &ThresholdConfig,
) -> Option<Recommendation> {
    let bands = &thresholds.temperature;
    match state.band {
        SeverityBand::Critical => Some(card(
            Priority::Immediate,
            "Critical Temperature - Cooling System Failure",
            format!(
                "Temperature at {:.1} °C (critical threshold {:.1} °C)",
                state.current, bands.critical
            ),
            ActionCategory::CoolingSystem,
            "🌡️",
            &[
                "Shut down machine immediately to prevent damage",
                "Check coolant levels and refill if low",
                "Inspect cooling fans and replace any that are not spinning",
                "Check for blocked air vents and clean thoroughly",
                "Verify coolant pump operation",
                "Check for coolant leaks and seal any found",
                "Allow the machine to cool for at least 30 minutes",
                "Restart only after temperature drops below 40 °C",
            ],
        )),
        SeverityBand::High => Some(card(
            Priority::High,
            "High Temperature - Preventive Action Required",
            format!(
                "Temperature at {:.1} °C (high threshold {:.1} °C)",
                state.current, bands.high
            ),
            ActionCategory::CoolingSystem,
            "🌡️",
            &[
                "Reduce machine load by 20-30%",
                "Check coolant levels and top up if below minimum",
                "Clean air filters and cooling vents",
                "Verify cooling fan operation",
                "Check lubrication and add lubricant if needed",
                "Monitor temperature every 15 minutes",
                "Shut down if temperature continues to rise",
            ],
        )),
        SeverityBand::Warning => Some(card(
            Priority::Medium,
            "Elevated Temperature - Monitor Closely",
            format!(
                "Temperature at {:.1} °C (warning threshold {:.1} °C)",
                state.current, bands.warning
            ),
            ActionCategory::Monitoring,
            "🌡️",
            &[
                "Check ambient temperature and ensure adequate ventilation",
                "Verify the cooling system is functioning",
                "Monitor the temperature trend over the next hour",
                "Schedule a cooling system inspection within 24 hours",
            ],
        )),
        SeverityBand::Normal => None,
    }
}

fn vibration_card(state: &ParameterState, thresholds: &ThresholdConfig) -> Option<Recommendation> {
    let bands = &thresholds.vibration;
    match state.band {
        SeverityBand::Critical => Some(card(
            Priority::Immediate,
            "Critical Vibration - Mechanical Failure Risk",
            format!(
                "Vibration at {:.1} mm/s (critical threshold {:.1} mm/s)",
                state.current, bands.critical
            ),
            ActionCategory::MechanicalSystem,
            "⚙️",
            &[
                "Stop machine immediately - bearing failure likely",
                "Inspect bearings for wear, pitting, or damage",
                "Check shaft alignment with a dial indicator",
                "Inspect the coupling for wear or damage",
                "Check for loose mounting bolts and torque to spec",
                "Verify rotor balance and rebalance if needed",
                "Replace worn bearings before restart",
                "Test run at low speed before full operation",
            ],
        )),
        SeverityBand::High => Some(card(
            Priority::High,
            "High Vibration - Mechanical Inspection Needed",
            format!(
                "Vibration at {:.1} mm/s (high threshold {:.1} mm/s)",
                state.current, bands.high
            ),
            ActionCategory::MechanicalSystem,
            "⚙️",
            &[
                "Reduce machine speed by 20%",
                "Check all mounting bolts and tighten any loose ones",
                "Inspect bearings for unusual noise or heat",
                "Check shaft alignment and adjust if needed",
                "Verify belt tension on belt-driven stages",
                "Schedule bearing replacement within 48 hours",
                "Monitor vibration every 30 minutes",
            ],
        )),
        SeverityBand::Warning => Some(card(
            Priority::Medium,
            "Elevated Vibration - Preventive Check",
            format!(
                "Vibration at {:.1} mm/s (warning threshold {:.1} mm/s)",
                state.current, bands.warning
            ),
            ActionCategory::Monitoring,
            "⚙️",
            &[
                "Check for loose components",
                "Verify proper lubrication",
                "Schedule an alignment check within one week",
                "Monitor the vibration trend",
            ],
        )),
        SeverityBand::Normal => None,
    }
}

fn speed_card(state: &ParameterState, thresholds: &ThresholdConfig) -> Option<Recommendation> {
    let bands = &thresholds.speed;
    match state.band {
        SeverityBand::Critical => Some(card(
            Priority::Immediate,
            "Critical Speed - Runaway Condition",
            format!(
                "Speed at {:.0} RPM (critical threshold {:.0} RPM)",
                state.current, bands.critical
            ),
            ActionCategory::ControlSystem,
            "⚡",
            &[
                "Press the emergency stop",
                "Check the motor controller for malfunction",
                "Inspect the speed sensor and replace if faulty",
                "Verify control system settings",
                "Check for feedback loop errors",
                "Test the motor controller in manual mode",
                "Replace the controller if defective",
                "Recalibrate the speed control system",
            ],
        )),
        SeverityBand::High => Some(card(
            Priority::High,
            "High Speed - Load Adjustment Required",
            format!(
                "Speed at {:.0} RPM (high threshold {:.0} RPM)",
                state.current, bands.high
            ),
            ActionCategory::ControlSystem,
            "⚡",
            &[
                "Reduce machine load immediately",
                "Check motor controller settings",
                "Verify the speed setpoint is correct",
                "Inspect load distribution",
                "Check for control system errors",
                "Monitor speed for the next 30 minutes",
            ],
        )),
        SeverityBand::Warning => Some(card(
            Priority::Medium,
            "Elevated Speed - Verify Settings",
            format!(
                "Speed at {:.0} RPM (warning threshold {:.0} RPM)",
                state.current, bands.warning
            ),
            ActionCategory::Monitoring,
            "⚡",
            &[
                "Verify the speed setpoint matches requirements",
                "Check load conditions",
                "Monitor speed stability",
                "Schedule controller calibration",
            ],
        )),
        SeverityBand::Normal => None,
    }
}

fn trend_card(parameter: Parameter, trend: &TrendResult) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        action: format!("Rapidly Rising {} - Urgent Attention", parameter.label()),
        reason: format!(
            "{} increasing rapidly (trend strength {:.1}/10)",
            parameter.label(),
            trend.strength
        ),
        category: ActionCategory::TrendAnalysis,
        steps: vec![
            format!("Identify the root cause of the {parameter} increase"),
            "Take corrective action immediately".to_string(),
            format!("Monitor {parameter} every 10 minutes"),
            "Prepare for a potential shutdown".to_string(),
        ],
        icon: "📈".to_string(),
    }
}

fn routine_card() -> Recommendation {
    card(
        Priority::Low,
        "Routine Maintenance Schedule",
        "Machine operating normally - good time for preventive care".to_string(),
        ActionCategory::PreventiveMaintenance,
        "✅",
        &[
            "Continue standard monitoring procedures",
            "Schedule the next preventive maintenance window",
            "Check lubrication levels weekly",
            "Inspect for wear and tear monthly",
            "Keep maintenance logs updated",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::risk::assess_risk;
    use crate::engine::state::extract_states;
    use crate::engine::trend::analyze_trends;
    use crate::config::ScoringConfig;
    use crate::types::{ModelInterpretation, SensorWindows};

    fn generate(windows: &SensorWindows) -> Vec<Recommendation> {
        let thresholds = ThresholdConfig::default();
        let tuning = TuningConfig::default();
        let states = extract_states(windows, &thresholds, &tuning);
        let trends = analyze_trends(windows, &tuning);
        let risk = assess_risk(
            &states,
            &trends,
            &ModelInterpretation::default(),
            &[],
            &ScoringConfig::default(),
            &tuning,
        );
        generate_recommendations(&risk, &states, &trends, &thresholds, &tuning)
    }

    fn assert_priority_non_increasing(cards: &[Recommendation]) {
        for pair in cards.windows(2) {
            assert!(
                pair[0].priority <= pair[1].priority,
                "{:?} listed after {:?}",
                pair[1].priority,
                pair[0].priority
            );
        }
    }

    #[test]
    fn test_healthy_machine_gets_single_routine_card() {
        let windows = SensorWindows {
            temperature: vec![60.0; 10],
            vibration: vec![2.0; 10],
            speed: vec![1100.0; 10],
        };
        let cards = generate(&windows);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].priority, Priority::Low);
        assert_eq!(cards[0].category, ActionCategory::PreventiveMaintenance);
    }

    #[test]
    fn test_warning_band_gets_medium_card() {
        let windows = SensorWindows {
            temperature: vec![72.0; 10],
            vibration: vec![2.0; 10],
            speed: vec![1100.0; 10],
        };
        let cards = generate(&windows);
        // Warning band → 10 points → low risk level, so the routine card
        // still appears after the monitoring card.
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].priority, Priority::Medium);
        assert!(cards[0].action.contains("Elevated Temperature"));
        assert_eq!(cards[1].priority, Priority::Low);
    }

    #[test]
    fn test_critical_fusion_produces_grouped_plan() {
        // Critical temperature and vibration push overall risk critical:
        // emergency card + both parameter cards, all immediate, then the
        // rapid-rise trend cards.
        let windows = SensorWindows {
            temperature: (0..5).map(|i| 85.0 + 5.0 * f64::from(i)).collect(),
            vibration: (0..5).map(|i| 7.0 + 1.75 * f64::from(i)).collect(),
            speed: vec![1100.0; 5],
        };
        let cards = generate(&windows);

        assert_priority_non_increasing(&cards);
        assert_eq!(cards[0].action, "Emergency Shutdown Required");

        let immediate: Vec<_> = cards
            .iter()
            .filter(|c| c.priority == Priority::Immediate)
            .collect();
        assert!(immediate.iter().any(|c| c.action.contains("Temperature")));
        assert!(immediate.iter().any(|c| c.action.contains("Vibration")));
        // No routine card under critical risk.
        assert!(!cards.iter().any(|c| c.priority == Priority::Low));
    }

    #[test]
    fn test_trend_escalation_card() {
        // Steep rise that stays in the normal band: strength 10 > 7.
        let windows = SensorWindows {
            temperature: (0..10).map(|i| 30.0 + 2.0 * f64::from(i)).collect(),
            vibration: vec![2.0; 10],
            speed: vec![1100.0; 10],
        };
        let cards = generate(&windows);
        let trend = cards
            .iter()
            .find(|c| c.category == ActionCategory::TrendAnalysis)
            .unwrap();
        assert_eq!(trend.priority, Priority::High);
        assert!(trend.action.contains("Rapidly Rising Temperature"));
    }

    #[test]
    fn test_missing_parameters_contribute_no_card() {
        let windows = SensorWindows {
            temperature: vec![90.0; 10],
            ..SensorWindows::default()
        };
        let cards = generate(&windows);
        assert!(!cards.iter().any(|c| c.action.contains("Vibration")));
        assert!(!cards.iter().any(|c| c.action.contains("Speed")));
    }

    #[test]
    fn test_reason_carries_configured_threshold() {
        let windows = SensorWindows {
            vibration: vec![8.0; 10],
            ..SensorWindows::default()
        };
        let cards = generate(&windows);
        let vibration = cards
            .iter()
            .find(|c| c.action.contains("Vibration"))
            .unwrap();
        assert!(vibration.reason.contains("7.1"));
    }
}
