//! HTTP API route definitions.

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;

use super::handlers::{
    app, cloud, health, list_services, network, not_found, openapi_json, security,
    service_metrics, system, AppState,
};
use super::middleware::{cors_layer, trace_layer, track_requests};

/// Create the API router.
///
/// This is the single entry point a hosting adapter mounts; every path not
/// listed here falls through to a JSON 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        // Dashboard panels
        .route("/api/system", get(system))
        .route("/api/app", get(app))
        .route("/api/network", get(network))
        .route("/api/cloud", get(cloud))
        .route("/api/security", get(security))
        // Services
        .route("/api/services", get(list_services))
        .route("/api/services/:service_id/metrics", get(service_metrics))
        .fallback(not_found)
        .layer(from_fn(track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer())
                .layer(cors_layer()),
        )
        .with_state(state)
}
