//! Monitored parameters and raw sensor windows

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A monitored machine parameter.
///
/// The enumeration order (temperature, vibration, speed) is load-bearing:
/// it is the iteration order of every per-parameter map in the engine and
/// the precedence order of the parameter-specific question intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Temperature,
    Vibration,
    Speed,
}

impl Parameter {
    /// All monitored parameters, in canonical order.
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Vibration, Self::Speed];

    /// Lowercase name as used in JSON payloads and response text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Vibration => "vibration",
            Self::Speed => "speed",
        }
    }

    /// Capitalized name for sentence starts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Vibration => "Vibration",
            Self::Speed => "Speed",
        }
    }

    /// Engineering unit for display.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Vibration => "mm/s",
            Self::Speed => "RPM",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw per-parameter time-series windows, most-recent-last.
///
/// The caller is responsible for resolving NaN/missing samples before
/// submission; the engine treats an empty window as "parameter absent"
/// and skips it rather than erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorWindows {
    #[serde(default)]
    pub temperature: Vec<f64>,
    #[serde(default)]
    pub vibration: Vec<f64>,
    #[serde(default)]
    pub speed: Vec<f64>,
}

impl SensorWindows {
    /// The window for one parameter (possibly empty).
    #[must_use]
    pub fn window(&self, parameter: Parameter) -> &[f64] {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::Vibration => &self.vibration,
            Parameter::Speed => &self.speed,
        }
    }

    /// Iterate `(parameter, window)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &[f64])> + '_ {
        Parameter::ALL.into_iter().map(move |p| (p, self.window(p)))
    }

    /// Most recent sample for a parameter, if any.
    #[must_use]
    pub fn latest(&self, parameter: Parameter) -> Option<f64> {
        self.window(parameter).last().copied()
    }

    /// Last reading per present parameter (absent parameters omitted).
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<Parameter, f64> {
        self.iter()
            .filter_map(|(p, w)| w.last().map(|v| (p, *v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_lookup_matches_field() {
        let windows = SensorWindows {
            temperature: vec![60.0, 61.0],
            vibration: vec![2.0],
            speed: vec![],
        };
        assert_eq!(windows.window(Parameter::Temperature), &[60.0, 61.0]);
        assert_eq!(windows.latest(Parameter::Vibration), Some(2.0));
        assert_eq!(windows.latest(Parameter::Speed), None);
    }

    #[test]
    fn test_snapshot_skips_absent_parameters() {
        let windows = SensorWindows {
            temperature: vec![60.0, 62.0],
            vibration: Vec::new(),
            speed: vec![1100.0],
        };
        let snapshot = windows.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(&Parameter::Temperature), Some(&62.0));
        assert!(!snapshot.contains_key(&Parameter::Vibration));
    }
}
