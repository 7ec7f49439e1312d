//! Sentinel-PM: Machine Health Intelligence
//!
//! Predictive-maintenance reasoning and risk-fusion engine for rotating
//! machinery monitored by temperature, vibration, and speed sensors.
//!
//! ## Architecture
//!
//! - **Engine**: state extraction, trend/correlation analysis, local anomaly
//!   detection, model output interpretation, risk fusion, recommendations,
//!   and intent-routed response composition
//! - **Config**: operator-tunable thresholds and tuning constants (TOML)
//! - **Storage**: sled-backed risk history for the caller-side durable record
//! - **API**: Axum HTTP surface exposing the engine to the web application

pub mod api;
pub mod config;
pub mod engine;
pub mod storage;
pub mod types;

// Re-export the machine configuration
pub use config::MachineConfig;

// Re-export the engine entry points
pub use engine::{ConversationEntry, ConversationLog, EvaluationReport, HealthReasoner, QuestionIntent};

// Re-export commonly used types
pub use types::{
    AnomalySeverity, CorrelationReport, DetectedAnomaly, ModelInterpretation, ModelOutputs,
    Parameter, ParameterState, Priority, Recommendation, RiskAssessment, RiskLevel,
    SensorWindows, SeverityBand, TrendDirection, TrendResult,
};

// Re-export storage
pub use storage::{RiskHistoryStorage, RiskRecord, StorageError};
