//! State extraction from raw sensor windows
//!
//! Reduces each parameter's window to a [`ParameterState`] snapshot:
//! current value, recent statistics, and a severity band. Parameters with
//! no samples are silently skipped — downstream components treat a missing
//! parameter as "no information", never as zero.

use std::collections::BTreeMap;

use statrs::statistics::Statistics;

use crate::config::{ThresholdConfig, TuningConfig};
use crate::types::{Parameter, ParameterState, SensorWindows};

/// Build the per-parameter state map for one evaluation.
///
/// Recent statistics cover the last `min(recent_window, len)` samples.
/// Volatility (population standard deviation) is only meaningful over the
/// full recent window and is reported as 0.0 when fewer samples exist.
#[must_use]
pub fn extract_states(
    windows: &SensorWindows,
    thresholds: &ThresholdConfig,
    tuning: &TuningConfig,
) -> BTreeMap<Parameter, ParameterState> {
    let mut states = BTreeMap::new();

    for (parameter, window) in windows.iter() {
        let Some(&current) = window.last() else {
            continue;
        };

        let take = tuning.recent_window.min(window.len());
        let recent = &window[window.len() - take..];

        let volatility = if window.len() >= tuning.recent_window {
            recent.population_std_dev()
        } else {
            0.0
        };

        states.insert(
            parameter,
            ParameterState {
                current,
                recent_average: recent.mean(),
                recent_max: Statistics::max(recent),
                recent_min: Statistics::min(recent),
                volatility,
                band: thresholds.for_parameter(parameter).classify(current),
            },
        );
    }

    states
}
