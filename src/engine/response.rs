//! Intent-keyed response composition
//!
//! Renders the natural-language answer from the structured analysis
//! results. Each intent has one rendering function, dispatched through an
//! exhaustive match so a new intent cannot ship without a renderer. Every
//! per-intent answer is a strict subset of the comprehensive rendering —
//! no intent surfaces information the comprehensive answer lacks.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::types::{
    AnomalySeverity, CorrelationReport, DetectedAnomaly, ModelInterpretation, Parameter,
    ParameterState, Priority, Recommendation, RiskAssessment, RiskLevel, SeverityBand,
    TrendDirection, TrendResult,
};

use super::intent::QuestionIntent;

/// Borrowed view of every analysis result a renderer may need.
pub struct ResponseContext<'a> {
    pub states: &'a BTreeMap<Parameter, ParameterState>,
    pub trends: &'a BTreeMap<Parameter, TrendResult>,
    pub interpretation: &'a ModelInterpretation,
    pub anomalies: &'a [DetectedAnomaly],
    pub risk: &'a RiskAssessment,
    pub recommendations: &'a [Recommendation],
    pub correlations: &'a CorrelationReport,
}

/// Render the answer for a routed intent.
#[must_use]
pub fn compose(intent: QuestionIntent, ctx: &ResponseContext<'_>) -> String {
    match intent {
        QuestionIntent::Temperature => parameter_answer(Parameter::Temperature, ctx),
        QuestionIntent::Vibration => parameter_answer(Parameter::Vibration, ctx),
        QuestionIntent::Speed => parameter_answer(Parameter::Speed, ctx),
        QuestionIntent::Anomaly => anomaly_answer(ctx),
        QuestionIntent::Forecast => forecast_answer(ctx),
        QuestionIntent::Risk => risk_answer(ctx),
        QuestionIntent::Recommendation => recommendation_answer(ctx),
        QuestionIntent::Health => health_answer(ctx),
        QuestionIntent::Trend => trend_answer(ctx),
        QuestionIntent::Why => why_answer(ctx),
        QuestionIntent::Comparison => comparison_answer(ctx),
        QuestionIntent::Correlation => correlation_answer(ctx),
        QuestionIntent::Comprehensive => comprehensive_answer(ctx),
    }
}

/// Value formatted with the precision conventional for the parameter.
fn format_value(parameter: Parameter, value: f64) -> String {
    match parameter {
        Parameter::Temperature => format!("{value:.1} °C"),
        Parameter::Vibration => format!("{value:.2} mm/s"),
        Parameter::Speed => format!("{value:.0} RPM"),
    }
}

fn parameter_answer(parameter: Parameter, ctx: &ResponseContext<'_>) -> String {
    let mut out = format!("{} analysis:\n", parameter.label());

    let Some(state) = ctx.states.get(&parameter) else {
        let _ = writeln!(
            out,
            "No {parameter} readings were provided, so there is nothing to assess."
        );
        return out;
    };

    let _ = writeln!(
        out,
        "- Current: {} ({})",
        format_value(parameter, state.current),
        state.band
    );
    if let Some(trend) = ctx.trends.get(&parameter) {
        let _ = writeln!(out, "- Trend: {}", trend.description);
    }
    if let Some(forecast) = &ctx.interpretation.forecast {
        let _ = writeln!(
            out,
            "- Forecast: {} next cycle",
            format_value(parameter, forecast.predicted.value(parameter))
        );
    }

    out.push('\n');
    out.push_str(band_guidance(parameter, state.band));
    out.push('\n');
    out
}

/// Band-specific guidance line per parameter, used by the parameter answers.
const fn band_guidance(parameter: Parameter, band: SeverityBand) -> &'static str {
    match (parameter, band) {
        (Parameter::Temperature, SeverityBand::Critical) => {
            "CRITICAL: Temperature is dangerously high. Shut down and inspect the cooling system immediately."
        }
        (Parameter::Temperature, SeverityBand::High) => {
            "WARNING: Temperature is elevated. Check coolant and lubrication, and consider reducing load."
        }
        (Parameter::Temperature, SeverityBand::Warning) => {
            "Temperature is approaching the high threshold. Keep monitoring and verify the cooling system."
        }
        (Parameter::Temperature, SeverityBand::Normal) => {
            "Temperature is within the normal range. Continue standard monitoring."
        }
        (Parameter::Vibration, SeverityBand::Critical) => {
            "CRITICAL: Vibration is extremely high. Stop the machine and inspect bearings, alignment, and balance."
        }
        (Parameter::Vibration, SeverityBand::High) => {
            "WARNING: Vibration is elevated. Schedule an urgent inspection of bearings and alignment."
        }
        (Parameter::Vibration, SeverityBand::Warning) => {
            "Vibration is approaching the high threshold. Monitor closely and plan an inspection."
        }
        (Parameter::Vibration, SeverityBand::Normal) => {
            "Vibration is within the normal range. The machine is mechanically stable."
        }
        (Parameter::Speed, SeverityBand::Critical) => {
            "CRITICAL: Speed is dangerously high. Reduce load and check the motor controller for a runaway condition."
        }
        (Parameter::Speed, SeverityBand::High) => {
            "WARNING: Speed is elevated. Reduce machine load and verify motor settings."
        }
        (Parameter::Speed, SeverityBand::Warning) => {
            "Speed is approaching the high threshold. Monitor load conditions and verify the setpoint."
        }
        (Parameter::Speed, SeverityBand::Normal) => {
            "Speed is within the normal range, operating at the intended RPM."
        }
    }
}

fn anomaly_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Anomaly check:\n");

    let model_flagged = ctx
        .interpretation
        .anomaly
        .as_ref()
        .is_some_and(|a| a.severity > AnomalySeverity::Normal);

    if let Some(anomaly) = &ctx.interpretation.anomaly {
        let _ = writeln!(out, "- {} (score {:.3})", anomaly.message, anomaly.score);
    }

    if ctx.anomalies.is_empty() && !model_flagged {
        out.push_str(
            "All sensor readings are within expected patterns. Continue standard monitoring.\n",
        );
        return out;
    }

    if !ctx.anomalies.is_empty() {
        out.push_str("\nSpecific findings:\n");
        for anomaly in ctx.anomalies {
            let _ = writeln!(out, "- [{}] {}", anomaly.severity, anomaly.description);
            let _ = writeln!(out, "  Action: {}", anomaly.recommendation);
        }
    } else {
        out.push_str(
            "The anomaly model flagged unusual patterns; check sensor calibration and recent operating changes.\n",
        );
    }

    out
}

fn forecast_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Forecast (next cycle):\n");

    let Some(forecast) = &ctx.interpretation.forecast else {
        out.push_str("Unable to generate a forecast - no forecaster output was provided.\n");
        return out;
    };

    for parameter in Parameter::ALL {
        let _ = writeln!(
            out,
            "- {}: {}",
            parameter.label(),
            format_value(parameter, forecast.predicted.value(parameter))
        );
    }

    if forecast.concerns.is_empty() {
        out.push_str("\nForecast looks normal; no concerning levels predicted.\n");
    } else {
        out.push_str("\nConcerns:\n");
        for concern in &forecast.concerns {
            let _ = writeln!(out, "- {concern}");
        }
        out.push_str("Take preventive action now to avoid these conditions.\n");
    }

    out
}

fn risk_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Risk assessment:\n");
    let _ = writeln!(out, "- Level: {}", ctx.risk.level);
    let _ = writeln!(out, "- Score: {}/100", ctx.risk.score);
    let _ = writeln!(out, "- Status: {}", ctx.risk.message);

    if !ctx.risk.factors.is_empty() {
        out.push_str("\nRisk factors:\n");
        for factor in &ctx.risk.factors {
            let _ = writeln!(out, "- {factor}");
        }
    }

    if let Some(classification) = &ctx.interpretation.classification {
        let _ = writeln!(out, "\nModel view: {}", classification.message);
    }

    let urgent: Vec<&Recommendation> = ctx
        .recommendations
        .iter()
        .filter(|r| matches!(r.priority, Priority::Immediate | Priority::High))
        .take(3)
        .collect();
    if !urgent.is_empty() {
        out.push_str("\nMost urgent actions:\n");
        for rec in urgent {
            let _ = writeln!(out, "- {} ({})", rec.action, rec.reason);
        }
    }

    out
}

fn render_group(out: &mut String, header: &str, cards: &[&Recommendation]) {
    if cards.is_empty() {
        return;
    }
    let _ = writeln!(out, "{header}");
    for rec in cards {
        let _ = writeln!(out, "{} {} [{}]", rec.icon, rec.action, rec.category);
        let _ = writeln!(out, "Why: {}", rec.reason);
        for (i, step) in rec.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
        out.push('\n');
    }
}

fn recommendation_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Recommendations and solutions:\n\n");

    let by_priority = |priority: Priority| -> Vec<&Recommendation> {
        ctx.recommendations
            .iter()
            .filter(|r| r.priority == priority)
            .collect()
    };

    let immediate = by_priority(Priority::Immediate);
    let high = by_priority(Priority::High);
    let medium = by_priority(Priority::Medium);
    let low = by_priority(Priority::Low);

    render_group(&mut out, "IMMEDIATE ACTIONS (do this now):", &immediate);
    render_group(&mut out, "HIGH PRIORITY (within 1 hour):", &high);
    render_group(&mut out, "MEDIUM PRIORITY (within 24 hours):", &medium);
    render_group(&mut out, "ROUTINE:", &low);

    if immediate.is_empty() && high.is_empty() {
        if medium.is_empty() {
            out.push_str("The machine is healthy; follow the routine maintenance schedule.\n");
        } else {
            out.push_str("Schedule these actions soon to maintain machine performance.\n");
        }
    } else {
        out.push_str("Follow these steps promptly to prevent machine failure.\n");
    }

    out
}

fn health_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Machine health summary:\n");
    let _ = writeln!(
        out,
        "Overall status: {} (risk score {}/100)\n",
        ctx.risk.level, ctx.risk.score
    );

    out.push_str("Current readings:\n");
    for (parameter, state) in ctx.states {
        let _ = writeln!(
            out,
            "- {}: {} ({})",
            parameter.label(),
            format_value(*parameter, state.current),
            state.band
        );
    }

    out.push_str("\nTrends:\n");
    for trend in ctx.trends.values() {
        let _ = writeln!(out, "- {}", trend.description);
    }

    if let Some(classification) = &ctx.interpretation.classification {
        let _ = writeln!(out, "\nCondition model: {}", classification.message);
    }
    if let Some(anomaly) = &ctx.interpretation.anomaly {
        let _ = writeln!(out, "Anomaly model: {}", anomaly.message);
    }

    out
}

fn trend_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Trend analysis:\n");

    for (parameter, trend) in ctx.trends {
        let _ = writeln!(out, "\n{}:", parameter.label());
        if let Some(state) = ctx.states.get(parameter) {
            let _ = writeln!(out, "- Current: {}", format_value(*parameter, state.current));
        }
        let _ = writeln!(out, "- {}", trend.description);
        let _ = writeln!(out, "- Strength: {:.1}/10", trend.strength);

        if trend.strength > 5.0 {
            match trend.direction {
                TrendDirection::Rising => {
                    out.push_str("- Rapidly increasing; monitor closely\n");
                }
                TrendDirection::Falling => {
                    out.push_str("- Rapidly decreasing; investigate the cause\n");
                }
                _ => {}
            }
        } else {
            out.push_str("- Trend is manageable\n");
        }
    }

    out
}

/// Root-cause notes for the why-renderer, per parameter and band.
fn why_notes(parameter: Parameter, band: SeverityBand) -> Option<(&'static str, &'static str)> {
    match (parameter, band) {
        (Parameter::Temperature, SeverityBand::Critical) => Some((
            "Extreme heat causes component failure, warping, and accelerated wear",
            "Cooling system failure, excessive friction, or overload",
        )),
        (Parameter::Temperature, SeverityBand::High | SeverityBand::Warning) => Some((
            "Elevated temperature reduces efficiency and increases wear",
            "Insufficient cooling, high ambient temperature, or increased load",
        )),
        (Parameter::Vibration, SeverityBand::Critical) => Some((
            "Severe vibration indicates imminent mechanical failure",
            "Bearing failure, severe misalignment, or loose components",
        )),
        (Parameter::Vibration, SeverityBand::High | SeverityBand::Warning) => Some((
            "High vibration accelerates wear and can cause damage",
            "Misalignment, imbalance, or worn bearings",
        )),
        (Parameter::Speed, SeverityBand::Critical) => Some((
            "Excessive speed can cause mechanical failure or a runaway condition",
            "Controller malfunction, excessive load, or feedback error",
        )),
        (Parameter::Speed, SeverityBand::High | SeverityBand::Warning) => Some((
            "Operating above design speed reduces lifespan",
            "High demand, incorrect settings, or load imbalance",
        )),
        (_, SeverityBand::Normal) => None,
    }
}

fn why_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Here is what is happening:\n");

    let issues: Vec<(&Parameter, &ParameterState)> = ctx
        .states
        .iter()
        .filter(|(_, state)| state.band.is_elevated())
        .collect();

    if issues.is_empty() {
        out.push_str("\nThe machine is operating normally. All parameters are in safe ranges:\n");
        for (parameter, state) in ctx.states {
            let _ = writeln!(
                out,
                "- {}: {} (normal)",
                parameter.label(),
                format_value(*parameter, state.current)
            );
        }
        return out;
    }

    for (parameter, state) in issues {
        let _ = writeln!(out, "\n{} issue:", parameter.label());
        let _ = writeln!(
            out,
            "- Current value: {} ({})",
            format_value(*parameter, state.current),
            state.band
        );
        if let Some((matters, causes)) = why_notes(*parameter, state.band) {
            let _ = writeln!(out, "- Why it matters: {matters}");
            let _ = writeln!(out, "- Likely causes: {causes}");
        }
    }

    if let Some(classification) = &ctx.interpretation.classification {
        let _ = writeln!(out, "\nModel analysis: {}", classification.message);
    }

    if !ctx.anomalies.is_empty() {
        out.push_str("\nAnomalies detected:\n");
        for anomaly in ctx.anomalies.iter().take(2) {
            let _ = writeln!(out, "- {}", anomaly.description);
        }
    }

    out
}

fn comparison_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Parameter comparison:\n\nCurrent values:\n");

    // Most severe first; ties keep canonical parameter order.
    let mut ranked: Vec<(&Parameter, &ParameterState)> = ctx.states.iter().collect();
    ranked.sort_by(|a, b| b.1.band.cmp(&a.1.band));

    for (parameter, state) in &ranked {
        let _ = writeln!(
            out,
            "- {}: {} ({})",
            parameter.label(),
            format_value(**parameter, state.current),
            state.band
        );
    }

    out.push_str("\nTrends:\n");
    for trend in ctx.trends.values() {
        let _ = writeln!(out, "- {}", trend.description);
    }

    let worst: Vec<&str> = ranked
        .iter()
        .take_while(|(_, s)| s.band == ranked[0].1.band)
        .filter(|(_, s)| s.band.is_elevated())
        .map(|(p, _)| p.name())
        .collect();

    if worst.is_empty() {
        out.push_str("\nAll parameters are within acceptable ranges.\n");
    } else {
        let _ = writeln!(
            out,
            "\nMost concerning: {} - these need the closest attention.",
            worst.join(", ")
        );
    }

    out
}

fn correlation_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Parameter correlation analysis:\n");

    let CorrelationReport::Analyzed { pairs, patterns } = ctx.correlations else {
        out.push_str(
            "Unable to analyze correlations - at least 3 aligned readings per parameter are needed.\n",
        );
        return out;
    };

    for pair in pairs {
        let _ = writeln!(
            out,
            "- {} / {}: {} {} (r = {:.2})",
            pair.a.label(),
            pair.b.label(),
            pair.strength,
            pair.direction,
            pair.coefficient
        );
    }

    if patterns.is_empty() {
        out.push_str("\nNo concerning correlation patterns detected.\n");
    } else {
        out.push_str("\nDetected patterns:\n");
        for pattern in patterns {
            let _ = writeln!(out, "- {pattern}");
        }
    }

    out
}

fn detected_anomaly_section(out: &mut String, anomalies: &[DetectedAnomaly]) {
    if anomalies.is_empty() {
        return;
    }
    out.push_str("\nDetected anomalies:\n");
    for anomaly in anomalies {
        let _ = writeln!(out, "- [{}] {}", anomaly.severity, anomaly.description);
        let _ = writeln!(out, "  Action: {}", anomaly.recommendation);
    }
}

fn comprehensive_answer(ctx: &ResponseContext<'_>) -> String {
    let mut out = String::from("Complete machine health analysis\n\n");

    out.push_str(match ctx.risk.level {
        RiskLevel::Critical => "URGENT: critical issues require immediate action.\n",
        RiskLevel::High => "WARNING: concerning patterns need attention.\n",
        RiskLevel::Medium => "NOTICE: some areas are worth monitoring.\n",
        RiskLevel::Low | RiskLevel::Normal => {
            "GOOD NEWS: the machine is operating within normal parameters.\n"
        }
    });

    // Overall status
    let _ = writeln!(
        out,
        "\nOverall status: {} (risk score {}/100)\n{}",
        ctx.risk.level, ctx.risk.score, ctx.risk.message
    );
    if !ctx.risk.factors.is_empty() {
        out.push_str("Risk factors:\n");
        for factor in &ctx.risk.factors {
            let _ = writeln!(out, "- {factor}");
        }
    }

    // Current readings
    out.push_str("\nCurrent readings:\n");
    for (parameter, state) in ctx.states {
        let _ = writeln!(
            out,
            "- {}: {} ({}) | avg {:.1}, max {:.1}, min {:.1}, volatility {:.2}",
            parameter.label(),
            format_value(*parameter, state.current),
            state.band,
            state.recent_average,
            state.recent_max,
            state.recent_min,
            state.volatility
        );
    }

    // Trends
    out.push_str("\nTrends:\n");
    for (parameter, trend) in ctx.trends {
        let _ = writeln!(
            out,
            "- {}: {} (strength {:.1}/10, slope {:.4})",
            parameter.label(),
            trend.description,
            trend.strength,
            trend.slope
        );
    }

    // Model insights
    out.push_str("\nModel insights:\n");
    if let Some(forecast) = &ctx.interpretation.forecast {
        let _ = writeln!(out, "- {}", forecast.summary);
        for concern in &forecast.concerns {
            let _ = writeln!(out, "  Concern: {concern}");
        }
    }
    if let Some(classification) = &ctx.interpretation.classification {
        let _ = writeln!(out, "- Condition model: {}", classification.message);
    }
    if let Some(anomaly) = &ctx.interpretation.anomaly {
        let _ = writeln!(
            out,
            "- Anomaly model: {} (score {:.3})",
            anomaly.message, anomaly.score
        );
    }

    detected_anomaly_section(&mut out, ctx.anomalies);

    out.push('\n');
    out.push_str(&recommendation_answer(ctx));

    out.push('\n');
    out.push_str(match ctx.risk.level {
        RiskLevel::Critical | RiskLevel::High => {
            "Verdict: act now - machine safety is at risk."
        }
        RiskLevel::Medium => "Verdict: schedule maintenance soon to prevent escalation.",
        RiskLevel::Low => "Verdict: the machine is operational; keep monitoring closely.",
        RiskLevel::Normal => "Verdict: the machine is healthy; continue routine monitoring.",
    });
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScoringConfig, ThresholdConfig, TuningConfig};
    use crate::engine::anomaly::detect_anomalies;
    use crate::engine::correlation::analyze_correlations;
    use crate::engine::interpretation::interpret_models;
    use crate::engine::recommendations::generate_recommendations;
    use crate::engine::risk::assess_risk;
    use crate::engine::state::extract_states;
    use crate::engine::trend::analyze_trends;
    use crate::types::{ModelOutputs, SensorWindows};

    struct Fixture {
        states: BTreeMap<Parameter, ParameterState>,
        trends: BTreeMap<Parameter, TrendResult>,
        interpretation: ModelInterpretation,
        anomalies: Vec<DetectedAnomaly>,
        risk: RiskAssessment,
        recommendations: Vec<Recommendation>,
        correlations: CorrelationReport,
    }

    impl Fixture {
        fn build(windows: &SensorWindows, models: &ModelOutputs) -> Self {
            let thresholds = ThresholdConfig::default();
            let tuning = TuningConfig::default();
            let scoring = ScoringConfig::default();
            let states = extract_states(windows, &thresholds, &tuning);
            let trends = analyze_trends(windows, &tuning);
            let correlations = analyze_correlations(windows, &tuning);
            let anomalies = detect_anomalies(windows, &thresholds, &tuning);
            let interpretation = interpret_models(models, &states, &thresholds, &tuning);
            let risk = assess_risk(&states, &trends, &interpretation, &anomalies, &scoring, &tuning);
            let recommendations =
                generate_recommendations(&risk, &states, &trends, &thresholds, &tuning);
            Self {
                states,
                trends,
                interpretation,
                anomalies,
                risk,
                recommendations,
                correlations,
            }
        }

        fn ctx(&self) -> ResponseContext<'_> {
            ResponseContext {
                states: &self.states,
                trends: &self.trends,
                interpretation: &self.interpretation,
                anomalies: &self.anomalies,
                risk: &self.risk,
                recommendations: &self.recommendations,
                correlations: &self.correlations,
            }
        }
    }

    fn healthy() -> Fixture {
        Fixture::build(
            &SensorWindows {
                temperature: vec![60.0; 10],
                vibration: vec![2.0; 10],
                speed: vec![1100.0; 10],
            },
            &ModelOutputs::default(),
        )
    }

    #[test]
    fn test_every_intent_renders_nonempty_text() {
        let fixture = healthy();
        let intents = [
            QuestionIntent::Temperature,
            QuestionIntent::Vibration,
            QuestionIntent::Speed,
            QuestionIntent::Anomaly,
            QuestionIntent::Forecast,
            QuestionIntent::Risk,
            QuestionIntent::Recommendation,
            QuestionIntent::Health,
            QuestionIntent::Trend,
            QuestionIntent::Why,
            QuestionIntent::Comparison,
            QuestionIntent::Correlation,
            QuestionIntent::Comprehensive,
        ];
        for intent in intents {
            let text = compose(intent, &fixture.ctx());
            assert!(!text.trim().is_empty(), "empty answer for {intent:?}");
        }
    }

    #[test]
    fn test_parameter_answer_includes_reading_and_band() {
        let fixture = healthy();
        let text = compose(QuestionIntent::Temperature, &fixture.ctx());
        assert!(text.contains("60.0 °C"));
        assert!(text.contains("normal"));
    }

    #[test]
    fn test_missing_parameter_answer_degrades_gracefully() {
        let fixture = Fixture::build(
            &SensorWindows {
                vibration: vec![2.0; 10],
                ..SensorWindows::default()
            },
            &ModelOutputs::default(),
        );
        let text = compose(QuestionIntent::Temperature, &fixture.ctx());
        assert!(text.contains("No temperature readings"));
    }

    #[test]
    fn test_forecast_answer_without_forecaster() {
        let fixture = healthy();
        let text = compose(QuestionIntent::Forecast, &fixture.ctx());
        assert!(text.contains("no forecaster output"));
    }

    #[test]
    fn test_recommendation_groups_render_in_priority_order() {
        let fixture = Fixture::build(
            &SensorWindows {
                temperature: vec![90.0; 10],
                vibration: vec![8.0; 10],
                speed: vec![1250.0; 10],
            },
            &ModelOutputs::default(),
        );
        let text = compose(QuestionIntent::Recommendation, &fixture.ctx());
        let immediate = text.find("IMMEDIATE ACTIONS").unwrap();
        let high = text.find("HIGH PRIORITY").unwrap();
        let medium = text.find("MEDIUM PRIORITY").unwrap();
        assert!(immediate < high && high < medium);
        // Steps are numbered at render time.
        assert!(text.contains("  1. "));
    }

    #[test]
    fn test_comprehensive_contains_all_sections() {
        let fixture = healthy();
        let text = compose(QuestionIntent::Comprehensive, &fixture.ctx());
        for section in [
            "Overall status",
            "Current readings",
            "Trends",
            "Model insights",
            "Recommendations",
            "Verdict",
        ] {
            assert!(text.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn test_correlation_answer_reports_insufficient_data() {
        let fixture = Fixture::build(
            &SensorWindows {
                temperature: vec![60.0, 61.0],
                ..SensorWindows::default()
            },
            &ModelOutputs::default(),
        );
        let text = compose(QuestionIntent::Correlation, &fixture.ctx());
        assert!(text.contains("Unable to analyze correlations"));
    }
}
