//! Trend analysis over recent sensor windows
//!
//! Fits a first-degree least-squares line to the last `trend_window`
//! samples of each parameter and classifies direction and strength.
//! Direction and strength are independent: a rising trend with strength
//! at or below `rapid_trend_strength` reads as "gradually increasing",
//! above it as "rising rapidly" — the same cutoff the risk assessor and
//! recommendation engine use for escalation.

use std::collections::BTreeMap;

use crate::config::TuningConfig;
use crate::types::{Parameter, SensorWindows, TrendDirection, TrendResult};

/// Minimum samples for a meaningful line fit.
const MIN_TREND_SAMPLES: usize = 3;

/// Analyze the trend of every present parameter.
///
/// Absent parameters are omitted; windows shorter than 3 samples yield an
/// explicit `unknown` result rather than a computed-but-meaningless slope.
#[must_use]
pub fn analyze_trends(
    windows: &SensorWindows,
    tuning: &TuningConfig,
) -> BTreeMap<Parameter, TrendResult> {
    let mut trends = BTreeMap::new();

    for (parameter, window) in windows.iter() {
        if window.is_empty() {
            continue;
        }
        if window.len() < MIN_TREND_SAMPLES {
            trends.insert(parameter, TrendResult::insufficient_data());
            continue;
        }

        let take = tuning.trend_window.min(window.len());
        let recent = &window[window.len() - take..];
        let slope = least_squares_slope(recent);

        trends.insert(parameter, classify(parameter, slope, tuning));
    }

    trends
}

/// Slope of the least-squares line through `(0, y0), (1, y1), ...`.
///
/// Formula: m = (n Σxy - Σx Σy) / (n Σx² - (Σx)²)
fn least_squares_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_x2 - sum_x.powi(2);
    if denominator == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    }
}

fn classify(parameter: Parameter, slope: f64, tuning: &TuningConfig) -> TrendResult {
    if slope.abs() < tuning.stable_slope {
        return TrendResult {
            direction: TrendDirection::Stable,
            strength: 0.0,
            slope,
            description: format!("{} is stable", parameter.label()),
        };
    }

    let strength = (slope.abs() * 10.0).min(10.0);
    let rapid = strength > tuning.rapid_trend_strength;

    if slope > 0.0 {
        TrendResult {
            direction: TrendDirection::Rising,
            strength,
            slope,
            description: if rapid {
                format!("{} is rising rapidly", parameter.label())
            } else {
                format!("{} is gradually increasing", parameter.label())
            },
        }
    } else {
        TrendResult {
            direction: TrendDirection::Falling,
            strength,
            slope,
            description: if rapid {
                format!("{} is dropping rapidly", parameter.label())
            } else {
                format!("{} is gradually decreasing", parameter.label())
            },
        }
    }
}
