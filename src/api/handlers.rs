//! API route handlers
//!
//! Request handling logic for the machine-health endpoints. The engine
//! itself never fails on data-quality problems, so the only error paths
//! here are malformed request bodies (400) and missing optional
//! collaborators such as the history store (503).

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::ThresholdConfig;
use crate::engine::{ConversationEntry, ConversationLog, HealthReasoner};
use crate::storage::{RiskHistoryStorage, RiskRecord};
use crate::types::{ModelOutputs, SensorWindows};

use super::envelope::{ApiErrorResponse, ApiResponse};

/// Shared state for all API handlers.
///
/// The reasoner is immutable and freely shared; the conversation log is
/// the single mutable collaborator and sits behind an async lock.
#[derive(Clone)]
pub struct ApiState {
    pub reasoner: Arc<HealthReasoner>,
    pub history: Option<RiskHistoryStorage>,
    pub conversation: Arc<RwLock<ConversationLog>>,
    pub started_at: Instant,
}

impl ApiState {
    #[must_use]
    pub fn new(reasoner: HealthReasoner, history: Option<RiskHistoryStorage>) -> Self {
        let capacity = reasoner.config().tuning.conversation_capacity;
        Self {
            reasoner: Arc::new(reasoner),
            history,
            conversation: Arc::new(RwLock::new(ConversationLog::new(capacity))),
            started_at: Instant::now(),
        }
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Body of `POST /api/v1/evaluate`.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub sensors: SensorWindows,
    #[serde(default)]
    pub models: ModelOutputs,
    /// Optional free-text operator question.
    #[serde(default)]
    pub question: Option<String>,
    /// Machine identifier for the persisted record; defaults to the
    /// configured machine name.
    #[serde(default)]
    pub machine: Option<String>,
}

/// Query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub service: &'static str,
    pub version: &'static str,
    pub machine: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/evaluate - run the reasoning engine over one request
pub async fn post_evaluate(
    State(state): State<ApiState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };

    let report = state.reasoner.evaluate(
        &request.sensors,
        &request.models,
        request.question.as_deref(),
    );

    if let Some(question) = request
        .question
        .as_ref()
        .filter(|q| !q.trim().is_empty())
    {
        state.conversation.write().await.append(ConversationEntry {
            timestamp: Utc::now(),
            question: question.clone(),
            snapshot: request.sensors.snapshot(),
        });
    }

    if let Some(history) = &state.history {
        let record = RiskRecord {
            timestamp: Utc::now(),
            machine: request
                .machine
                .unwrap_or_else(|| state.reasoner.config().machine.name.clone()),
            snapshot: request.sensors.snapshot(),
            level: report.risk.level,
            score: report.risk.score,
        };
        if let Err(e) = history.store(&record) {
            // Persistence is best-effort; the evaluation result still stands.
            warn!(error = %e, "failed to persist risk record");
        }
    }

    ApiResponse::ok(report)
}

/// GET /api/v1/history - recent persisted risk records, newest first
pub async fn get_history(
    State(state): State<ApiState>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(24).min(1000);
    match &state.history {
        Some(history) => ApiResponse::ok(history.recent(limit)),
        None => ApiErrorResponse::service_unavailable("risk history storage not available"),
    }
}

/// GET /api/v1/conversation - recent conversation-log entries, newest first
pub async fn get_conversation(
    State(state): State<ApiState>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(24).min(1000);
    let log = state.conversation.read().await;
    ApiResponse::ok(log.recent(limit))
}

/// GET /api/v1/config - active configuration
pub async fn get_config(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(state.reasoner.config().clone())
}

/// POST /api/v1/config/validate - validate candidate thresholds, no mutation
pub async fn post_validate_config(
    payload: Result<Json<ThresholdConfig>, JsonRejection>,
) -> Response {
    let Json(thresholds) = match payload {
        Ok(json) => json,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };

    match thresholds.validate() {
        Ok(()) => ApiResponse::ok(ValidationResult { valid: true }),
        Err(e) => ApiErrorResponse::bad_request(e.to_string()),
    }
}

/// GET /api/v1/health - service liveness
pub async fn get_health(State(state): State<ApiState>) -> Json<ServiceHealth> {
    Json(ServiceHealth {
        service: "sentinel-pm",
        version: env!("CARGO_PKG_VERSION"),
        machine: state.reasoner.config().machine.name.clone(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
