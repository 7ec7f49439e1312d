//! Local anomaly detection
//!
//! Flags sudden spikes and drops by comparing each parameter's last sample
//! to the mean of the few samples before it. Deliberately independent of
//! the external anomaly-scoring model: that model is trained on broader
//! distributions and can under-weight a sharp local discontinuity.
//!
//! A separate check emits a critical `correlated` finding when temperature
//! and vibration are simultaneously at or above their high bands — the
//! classic bearing-failure / severe-friction signature.

use crate::config::{ThresholdConfig, TuningConfig};
use crate::types::{
    AnomalyKind, AnomalySeverity, DetectedAnomaly, Parameter, SensorWindows, SeverityBand,
};

/// Scan all windows for local discontinuities and correlated findings.
#[must_use]
pub fn detect_anomalies(
    windows: &SensorWindows,
    thresholds: &ThresholdConfig,
    tuning: &TuningConfig,
) -> Vec<DetectedAnomaly> {
    let mut anomalies = Vec::new();

    for (parameter, window) in windows.iter() {
        if window.len() < tuning.spike_window {
            continue;
        }

        let recent = &window[window.len() - tuning.spike_window..];
        let (current, baseline) = match recent.split_last() {
            Some((current, preceding)) if !preceding.is_empty() => {
                (*current, preceding.iter().sum::<f64>() / preceding.len() as f64)
            }
            _ => continue,
        };

        if current > baseline * tuning.spike_ratio {
            let severity = if current > baseline * tuning.severe_spike_ratio {
                AnomalySeverity::High
            } else {
                AnomalySeverity::Medium
            };
            anomalies.push(DetectedAnomaly {
                kind: AnomalyKind::Spike,
                parameters: vec![parameter],
                severity,
                description: format!(
                    "Sudden {parameter} spike: {current:.1} (recent average was {baseline:.1})"
                ),
                recommendation: format!("Investigate cause of sudden {parameter} increase"),
            });
        } else if current < baseline * tuning.drop_ratio {
            anomalies.push(DetectedAnomaly {
                kind: AnomalyKind::Drop,
                parameters: vec![parameter],
                severity: AnomalySeverity::Medium,
                description: format!(
                    "Sudden {parameter} drop: {current:.1} (recent average was {baseline:.1})"
                ),
                recommendation: format!("Check {parameter} sensor or system"),
            });
        }
    }

    if let Some(correlated) = detect_correlated(windows, thresholds, tuning) {
        anomalies.push(correlated);
    }

    anomalies
}

/// Temperature and vibration simultaneously at or above their high bands.
fn detect_correlated(
    windows: &SensorWindows,
    thresholds: &ThresholdConfig,
    tuning: &TuningConfig,
) -> Option<DetectedAnomaly> {
    if windows.temperature.len() < tuning.spike_window
        || windows.vibration.len() < tuning.spike_window
    {
        return None;
    }

    let temperature = windows.latest(Parameter::Temperature)?;
    let vibration = windows.latest(Parameter::Vibration)?;

    let temperature_elevated =
        thresholds.temperature.classify(temperature) >= SeverityBand::High;
    let vibration_elevated = thresholds.vibration.classify(vibration) >= SeverityBand::High;

    if temperature_elevated && vibration_elevated {
        Some(DetectedAnomaly {
            kind: AnomalyKind::Correlated,
            parameters: vec![Parameter::Temperature, Parameter::Vibration],
            severity: AnomalySeverity::Critical,
            description: "Both temperature and vibration are critically high".to_string(),
            recommendation:
                "Immediate shutdown recommended - possible bearing failure or severe friction"
                    .to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(windows: &SensorWindows) -> Vec<DetectedAnomaly> {
        detect_anomalies(
            windows,
            &ThresholdConfig::default(),
            &TuningConfig::default(),
        )
    }

    #[test]
    fn test_stable_windows_produce_nothing() {
        let windows = SensorWindows {
            temperature: vec![60.0, 61.0, 60.5, 60.2, 60.8],
            vibration: vec![2.0, 2.1, 2.0, 2.2, 2.1],
            speed: vec![1100.0; 5],
        };
        assert!(detect(&windows).is_empty());
    }

    #[test]
    fn test_moderate_spike_is_medium() {
        // Last sample 40% above the preceding mean: spike, not severe.
        let windows = SensorWindows {
            temperature: vec![50.0, 50.0, 50.0, 50.0, 70.0],
            ..SensorWindows::default()
        };
        let anomalies = detect(&windows);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].kind, AnomalyKind::Spike);
        assert_eq!(anomalies[0].severity, AnomalySeverity::Medium);
        assert_eq!(anomalies[0].parameters, vec![Parameter::Temperature]);
    }

    #[test]
    fn test_severe_spike_is_high() {
        // Last sample 60% above the preceding mean.
        let windows = SensorWindows {
            temperature: vec![50.0, 50.0, 50.0, 50.0, 80.0],
            ..SensorWindows::default()
        };
        let anomalies = detect(&windows);
        assert_eq!(anomalies[0].severity, AnomalySeverity::High);
        assert!(anomalies[0].description.contains("spike"));
    }

    #[test]
    fn test_drop_is_medium() {
        let windows = SensorWindows {
            speed: vec![1200.0, 1200.0, 1200.0, 1200.0, 600.0],
            ..SensorWindows::default()
        };
        let anomalies = detect(&windows);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].kind, AnomalyKind::Drop);
        assert_eq!(anomalies[0].severity, AnomalySeverity::Medium);
    }

    #[test]
    fn test_short_windows_are_skipped() {
        let windows = SensorWindows {
            temperature: vec![50.0, 50.0, 50.0, 80.0],
            ..SensorWindows::default()
        };
        assert!(detect(&windows).is_empty());
    }

    #[test]
    fn test_correlated_bearing_signature() {
        // Flat at elevated levels: no spike, but both parameters are in the
        // high band or above.
        let windows = SensorWindows {
            temperature: vec![82.0; 5],
            vibration: vec![8.0; 5],
            speed: vec![1100.0; 5],
        };
        let anomalies = detect(&windows);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].kind, AnomalyKind::Correlated);
        assert_eq!(anomalies[0].severity, AnomalySeverity::Critical);
        assert_eq!(
            anomalies[0].parameters,
            vec![Parameter::Temperature, Parameter::Vibration]
        );
        assert!(anomalies[0].recommendation.contains("bearing"));
    }

    #[test]
    fn test_no_correlated_finding_when_only_one_is_elevated() {
        let windows = SensorWindows {
            temperature: vec![82.0; 5],
            vibration: vec![2.0; 5],
            speed: vec![1100.0; 5],
        };
        assert!(detect(&windows).is_empty());
    }
}
