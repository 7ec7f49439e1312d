//! REST API module using Axum
//!
//! Exposes the reasoning engine over HTTP with a consistent response
//! envelope. All routes live under `/api/v1`; the engine's boundary
//! contract (sensor windows + model outputs in, full evaluation report
//! out) is transport-independent and lives in [`crate::engine`].

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `SENTINEL_CORS_ORIGINS` to a comma-separated list of allowed origins
/// for development (e.g., a local dashboard dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("SENTINEL_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}
