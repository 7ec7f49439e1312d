//! API route definitions
//!
//! Endpoints for the machine-health service:
//! - /api/v1/evaluate - run the reasoning engine
//! - /api/v1/history - persisted risk records
//! - /api/v1/conversation - recent operator questions
//! - /api/v1/config - active thresholds and tuning
//! - /api/v1/config/validate - validate candidate thresholds
//! - /api/v1/health - service liveness

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Create all API routes.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/evaluate", post(handlers::post_evaluate))
        .route("/history", get(handlers::get_history))
        .route("/conversation", get(handlers::get_conversation))
        .route("/config", get(handlers::get_config))
        .route("/config/validate", post(handlers::post_validate_config))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;
    use crate::engine::HealthReasoner;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> ApiState {
        ApiState::new(HealthReasoner::new(MachineConfig::default()), None)
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_config_route() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_history_unavailable_without_storage() {
        let app = api_routes(create_test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
