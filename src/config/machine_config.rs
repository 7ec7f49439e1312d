//! Machine Configuration - thresholds and engine tuning as operator-tunable TOML values
//!
//! Every numeric constant the reasoning engine depends on (severity band
//! boundaries, trend/spike/correlation cutoffs, risk score increments) is a
//! field here. Each struct implements `Default` with values matching the
//! built-in constants, so behavior is unchanged when no config file is
//! present. Risk thresholds are operator-facing; overriding them belongs in
//! a reviewed config file, never in code.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::types::{Parameter, SeverityBand};

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a monitored machine deployment.
///
/// Load with [`MachineConfig::load`], which searches:
/// 1. `$SENTINEL_CONFIG` env var
/// 2. `./machine_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Machine identification
    pub machine: MachineInfo,
    /// Severity band boundaries per parameter
    pub thresholds: ThresholdConfig,
    /// Engine tuning constants
    pub tuning: TuningConfig,
    /// Risk score increments and level cutoffs
    pub scoring: ScoringConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
}

impl MachineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$SENTINEL_CONFIG` environment variable
    /// 2. `./machine_config.toml` in the current working directory
    /// 3. Built-in defaults
    #[must_use]
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SENTINEL_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), machine = %config.machine.name, "Loaded machine config from SENTINEL_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from SENTINEL_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "SENTINEL_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("machine_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(machine = %config.machine.name, "Loaded machine config from ./machine_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./machine_config.toml, using defaults");
                }
            }
        }

        info!("No machine_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path. The result is validated.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all tunable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.tuning.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

/// Machine identification, used in logs and persisted risk records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineInfo {
    pub name: String,
    pub site: String,
}

impl Default for MachineInfo {
    fn default() -> Self {
        Self {
            name: "unnamed-machine".to_string(),
            site: "default-site".to_string(),
        }
    }
}

// ============================================================================
// Severity Band Thresholds
// ============================================================================

/// Lower bounds of the warning/high/critical bands for one parameter.
///
/// A value classifies into the highest band whose lower bound it meets or
/// exceeds; anything below `warning` is normal. Bounds must be strictly
/// ascending or classification becomes ambiguous.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThresholds {
    pub warning: f64,
    pub high: f64,
    pub critical: f64,
}

impl BandThresholds {
    /// Classify a value using at-or-above semantics.
    #[must_use]
    pub fn classify(&self, value: f64) -> SeverityBand {
        if value >= self.critical {
            SeverityBand::Critical
        } else if value >= self.high {
            SeverityBand::High
        } else if value >= self.warning {
            SeverityBand::Warning
        } else {
            SeverityBand::Normal
        }
    }

    fn validate(&self, parameter: Parameter) -> Result<(), ConfigError> {
        if self.warning < self.high && self.high < self.critical {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "{parameter} thresholds must be strictly ascending (warning {} < high {} < critical {})",
                self.warning, self.high, self.critical
            )))
        }
    }
}

/// Per-parameter severity band boundaries.
///
/// Defaults: NEMA Class B insulation limits for temperature, ISO 10816-3
/// zone boundaries for vibration, 4-pole motor practice for speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub temperature: BandThresholds,
    pub vibration: BandThresholds,
    pub speed: BandThresholds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            temperature: BandThresholds {
                warning: 70.0,
                high: 80.0,
                critical: 85.0,
            },
            vibration: BandThresholds {
                warning: 4.5,
                high: 7.1,
                critical: 11.2,
            },
            speed: BandThresholds {
                warning: 1200.0,
                high: 1350.0,
                critical: 1500.0,
            },
        }
    }
}

impl ThresholdConfig {
    /// Band boundaries for one parameter.
    #[must_use]
    pub const fn for_parameter(&self, parameter: Parameter) -> &BandThresholds {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::Vibration => &self.vibration,
            Parameter::Speed => &self.speed,
        }
    }

    /// Check that every parameter's bounds are strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for parameter in Parameter::ALL {
            self.for_parameter(parameter).validate(parameter)?;
        }
        Ok(())
    }
}

// ============================================================================
// Engine Tuning
// ============================================================================

/// Numeric constants of the analysis components.
///
/// The defaults were chosen empirically in the field; they are exposed here
/// so a deployment can adjust them without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Samples covered by recent-statistics (average/max/min/volatility).
    pub recent_window: usize,
    /// Samples covered by trend fitting and correlation analysis.
    pub trend_window: usize,
    /// Samples required for spike/drop detection (last vs preceding mean).
    pub spike_window: usize,
    /// |slope| below this counts as stable.
    pub stable_slope: f64,
    /// Trend strength above this reads as "rapid" and contributes to risk.
    pub rapid_trend_strength: f64,
    /// Trend strength above this additionally emits an escalation card.
    pub trend_card_strength: f64,
    /// Last sample above local mean by this ratio counts as a spike.
    pub spike_ratio: f64,
    /// Spike ratio above which severity escalates from medium to high.
    pub severe_spike_ratio: f64,
    /// Last sample below local mean by this ratio counts as a drop.
    pub drop_ratio: f64,
    /// |r| above this is a strong correlation.
    pub strong_correlation: f64,
    /// |r| above this (but not strong) is a moderate correlation.
    pub moderate_correlation: f64,
    /// Anomaly scores below this are critical.
    pub anomaly_score_critical: f64,
    /// Anomaly scores below this (but not critical) are high.
    pub anomaly_score_high: f64,
    /// Maximum retained conversation-log entries.
    pub conversation_capacity: usize,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            recent_window: 10,
            trend_window: 20,
            spike_window: 5,
            stable_slope: 0.1,
            rapid_trend_strength: 5.0,
            trend_card_strength: 7.0,
            spike_ratio: 1.3,
            severe_spike_ratio: 1.5,
            drop_ratio: 0.7,
            strong_correlation: 0.7,
            moderate_correlation: 0.4,
            anomaly_score_critical: -0.10,
            anomaly_score_high: -0.05,
            conversation_capacity: 100,
        }
    }
}

impl TuningConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_window < 1 || self.trend_window < 3 || self.spike_window < 2 {
            return Err(ConfigError::Invalid(
                "analysis windows too small (recent >= 1, trend >= 3, spike >= 2)".to_string(),
            ));
        }
        if self.spike_ratio <= 1.0 || self.severe_spike_ratio < self.spike_ratio {
            return Err(ConfigError::Invalid(format!(
                "spike ratios must satisfy 1.0 < spike ({}) <= severe ({})",
                self.spike_ratio, self.severe_spike_ratio
            )));
        }
        if self.drop_ratio <= 0.0 || self.drop_ratio >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "drop ratio must be in (0, 1), got {}",
                self.drop_ratio
            )));
        }
        if !(0.0 < self.moderate_correlation
            && self.moderate_correlation < self.strong_correlation
            && self.strong_correlation < 1.0)
        {
            return Err(ConfigError::Invalid(format!(
                "correlation bands must satisfy 0 < moderate ({}) < strong ({}) < 1",
                self.moderate_correlation, self.strong_correlation
            )));
        }
        if self.anomaly_score_critical >= self.anomaly_score_high {
            return Err(ConfigError::Invalid(format!(
                "anomaly score cutoffs must satisfy critical ({}) < high ({})",
                self.anomaly_score_critical, self.anomaly_score_high
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Risk Scoring
// ============================================================================

/// Additive risk score increments and level cutoffs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub band_critical: u32,
    pub band_high: u32,
    pub band_warning: u32,
    /// Rising trend with strength above `rapid_trend_strength`.
    pub rapid_rise: u32,
    pub classifier_critical: u32,
    pub classifier_warning: u32,
    pub model_anomaly_critical: u32,
    /// Model anomaly severity high or medium.
    pub model_anomaly_elevated: u32,
    pub detected_anomaly_critical: u32,
    pub detected_anomaly_high: u32,
    /// Score at or above which the level is critical.
    pub level_critical: u32,
    pub level_high: u32,
    pub level_medium: u32,
    pub level_low: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            band_critical: 30,
            band_high: 20,
            band_warning: 10,
            rapid_rise: 15,
            classifier_critical: 25,
            classifier_warning: 15,
            model_anomaly_critical: 20,
            model_anomaly_elevated: 10,
            detected_anomaly_critical: 15,
            detected_anomaly_high: 10,
            level_critical: 70,
            level_high: 50,
            level_medium: 30,
            level_low: 10,
        }
    }
}

impl ScoringConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.level_low < self.level_medium
            && self.level_medium < self.level_high
            && self.level_high < self.level_critical
        {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "risk level cutoffs must be strictly ascending ({} < {} < {} < {})",
                self.level_low, self.level_medium, self.level_high, self.level_critical
            )))
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server and persistence locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub data_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            data_dir: "./data".to_string(),
        }
    }
}
