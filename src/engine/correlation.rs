//! Cross-parameter correlation analysis
//!
//! Computes Pearson correlation for each unordered parameter pair over the
//! aligned recent windows and flags mechanically meaningful patterns
//! (strong positive temperature/vibration correlation suggests friction or
//! a bearing issue, vibration/speed suggests imbalance or misalignment).
//! Patterns are advisory text only and never feed the risk score.

use crate::config::TuningConfig;
use crate::types::{
    CorrelationDirection, CorrelationReport, CorrelationStrength, PairCorrelation, Parameter,
    SensorWindows,
};

/// Minimum aligned samples for a meaningful coefficient.
const MIN_CORRELATION_SAMPLES: usize = 3;

/// Correlate the three parameter pairs over the recent windows.
///
/// Windows are truncated to their last `trend_window` samples, then aligned
/// to the shortest of the three. Below 3 aligned samples the result is an
/// explicit `insufficient_data` marker with no coefficients.
#[must_use]
pub fn analyze_correlations(windows: &SensorWindows, tuning: &TuningConfig) -> CorrelationReport {
    let tail = |window: &'_ [f64]| -> Vec<f64> {
        let take = tuning.trend_window.min(window.len());
        window[window.len() - take..].to_vec()
    };

    let temperature = tail(&windows.temperature);
    let vibration = tail(&windows.vibration);
    let speed = tail(&windows.speed);

    let aligned_len = temperature.len().min(vibration.len()).min(speed.len());
    if aligned_len < MIN_CORRELATION_SAMPLES {
        return CorrelationReport::InsufficientData;
    }

    let align = |series: &[f64]| series[series.len() - aligned_len..].to_vec();
    let temperature = align(&temperature);
    let vibration = align(&vibration);
    let speed = align(&speed);

    let pairs = vec![
        correlate(Parameter::Temperature, &temperature, Parameter::Vibration, &vibration, tuning),
        correlate(Parameter::Temperature, &temperature, Parameter::Speed, &speed, tuning),
        correlate(Parameter::Vibration, &vibration, Parameter::Speed, &speed, tuning),
    ];

    let patterns = detect_patterns(&pairs);

    CorrelationReport::Analyzed { pairs, patterns }
}

fn correlate(
    a: Parameter,
    x: &[f64],
    b: Parameter,
    y: &[f64],
    tuning: &TuningConfig,
) -> PairCorrelation {
    let coefficient = pearson(x, y);
    let strength = if coefficient.abs() > tuning.strong_correlation {
        CorrelationStrength::Strong
    } else if coefficient.abs() > tuning.moderate_correlation {
        CorrelationStrength::Moderate
    } else {
        CorrelationStrength::Weak
    };
    let direction = if coefficient > 0.0 {
        CorrelationDirection::Positive
    } else {
        CorrelationDirection::Negative
    };

    PairCorrelation {
        a,
        b,
        coefficient,
        strength,
        direction,
    }
}

/// Calculate the Pearson correlation coefficient.
///
/// Formula: r = Σ[(xi - x̄)(yi - ȳ)] / sqrt(Σ(xi - x̄)² × Σ(yi - ȳ)²)
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|a| a * a).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn detect_patterns(pairs: &[PairCorrelation]) -> Vec<String> {
    let mut patterns = Vec::new();

    for pair in pairs {
        if !pair.is_strong_positive() {
            continue;
        }
        match (pair.a, pair.b) {
            (Parameter::Temperature, Parameter::Vibration) => patterns.push(
                "Temperature and vibration are strongly correlated - possible friction or bearing issue"
                    .to_string(),
            ),
            (Parameter::Temperature, Parameter::Speed) => patterns.push(
                "Temperature increases with speed - normal but monitor cooling efficiency"
                    .to_string(),
            ),
            (Parameter::Vibration, Parameter::Speed) => patterns.push(
                "Vibration increases with speed - check balance and alignment".to_string(),
            ),
            _ => {}
        }
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_correlation() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = (0..20).map(|i| f64::from(i) * 2.0 + 5.0).collect();
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = (0..20).map(|i| 100.0 - f64::from(i)).collect();
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_yields_zero() {
        let x = vec![5.0; 10];
        let y: Vec<f64> = (0..10).map(f64::from).collect();
        assert!((pearson(&x, &y) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_data_below_three_aligned_samples() {
        let windows = SensorWindows {
            temperature: vec![60.0, 61.0, 62.0, 63.0],
            vibration: vec![2.0, 2.1],
            speed: vec![1100.0, 1101.0, 1102.0],
        };
        let report = analyze_correlations(&windows, &TuningConfig::default());
        assert!(matches!(report, CorrelationReport::InsufficientData));
    }

    #[test]
    fn test_missing_parameter_means_insufficient_data() {
        let windows = SensorWindows {
            temperature: vec![60.0; 10],
            vibration: vec![2.0; 10],
            speed: Vec::new(),
        };
        let report = analyze_correlations(&windows, &TuningConfig::default());
        assert!(matches!(report, CorrelationReport::InsufficientData));
    }

    #[test]
    fn test_friction_pattern_on_strong_positive_temp_vibration() {
        // Temperature and vibration both ramp; speed held constant.
        let windows = SensorWindows {
            temperature: (0..10).map(|i| 60.0 + f64::from(i)).collect(),
            vibration: (0..10).map(|i| 2.0 + 0.5 * f64::from(i)).collect(),
            speed: vec![1100.0; 10],
        };
        let report = analyze_correlations(&windows, &TuningConfig::default());

        let pair = report
            .pair(Parameter::Temperature, Parameter::Vibration)
            .unwrap();
        assert_eq!(pair.strength, CorrelationStrength::Strong);
        assert_eq!(pair.direction, CorrelationDirection::Positive);

        let CorrelationReport::Analyzed { patterns, .. } = report else {
            panic!("expected analyzed report");
        };
        assert!(patterns.iter().any(|p| p.contains("bearing")));
    }

    #[test]
    fn test_all_three_pairs_reported() {
        let windows = SensorWindows {
            temperature: (0..10).map(|i| 60.0 + f64::from(i)).collect(),
            vibration: (0..10).map(|i| 2.0 + 0.1 * f64::from(i)).collect(),
            speed: (0..10).map(|i| 1100.0 + f64::from(i)).collect(),
        };
        let report = analyze_correlations(&windows, &TuningConfig::default());
        let CorrelationReport::Analyzed { pairs, .. } = report else {
            panic!("expected analyzed report");
        };
        assert_eq!(pairs.len(), 3);
    }
}
