//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::simulation::{
    base_services, simulate_app, simulate_cloud, simulate_network, simulate_security,
    simulate_service_metrics, simulate_system, AppStatus, CloudStatus, Identity, NetworkStatus,
    SecurityFeed, ServiceEntry, ServiceMetrics, SystemInfo,
};

use super::openapi;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cosmetic identity reported by `/api/system` and `/openapi.json`.
    pub identity: Arc<Identity>,
}

impl AppState {
    /// Create new app state.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::config::Config::default().identity())
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Host-level status of the running instance.
#[utoipa::path(
    get,
    path = "/api/system",
    tag = "telemetry",
    responses((status = 200, description = "Simulated host status", body = SystemInfo))
)]
#[instrument(skip_all)]
pub async fn system(State(state): State<AppState>) -> Json<SystemInfo> {
    let info = simulate_system(Utc::now(), &state.identity);
    debug!(status = %info.status, "system status generated");
    Json(info)
}

/// Application status panel.
#[utoipa::path(
    get,
    path = "/api/app",
    tag = "telemetry",
    responses((status = 200, description = "Simulated application status", body = AppStatus))
)]
pub async fn app() -> Json<AppStatus> {
    Json(simulate_app(Utc::now()))
}

/// Network status panel.
#[utoipa::path(
    get,
    path = "/api/network",
    tag = "telemetry",
    responses((status = 200, description = "Simulated network status", body = NetworkStatus))
)]
pub async fn network() -> Json<NetworkStatus> {
    Json(simulate_network(Utc::now()))
}

/// Cloud resources panel.
#[utoipa::path(
    get,
    path = "/api/cloud",
    tag = "telemetry",
    responses((status = 200, description = "Simulated cloud status", body = CloudStatus))
)]
pub async fn cloud() -> Json<CloudStatus> {
    Json(simulate_cloud(Utc::now()))
}

/// Recent security events.
#[utoipa::path(
    get,
    path = "/api/security",
    tag = "telemetry",
    responses((status = 200, description = "Simulated security feed", body = SecurityFeed))
)]
pub async fn security() -> Json<SecurityFeed> {
    Json(simulate_security(Utc::now()))
}

/// List the built-in services.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses((status = 200, description = "Service catalog", body = [ServiceEntry]))
)]
pub async fn list_services() -> Json<&'static [ServiceEntry]> {
    Json(base_services())
}

/// Live metrics for one service. Unknown ids are simulated too.
#[utoipa::path(
    get,
    path = "/api/services/{service_id}/metrics",
    tag = "services",
    params(("service_id" = String, Path, description = "Service identifier")),
    responses((status = 200, description = "Simulated service metrics", body = ServiceMetrics))
)]
#[instrument(skip_all)]
pub async fn service_metrics(Path(service_id): Path<String>) -> Json<ServiceMetrics> {
    let metrics = simulate_service_metrics(&service_id, Utc::now());
    debug!(%service_id, status = %metrics.status, "service metrics generated");
    Json(metrics)
}

/// OpenAPI document for this API.
pub async fn openapi_json(State(state): State<AppState>) -> impl IntoResponse {
    Json(openapi::document(&state.identity))
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_uses_default_identity() {
        let state = AppState::default();
        assert_eq!(state.identity.name, "APM Demo API");
        assert_eq!(state.identity.version, "1.0.0");
    }

    #[tokio::test]
    async fn fallback_reports_path() {
        let err = not_found(Uri::from_static("/api/missing")).await;
        assert!(matches!(err, ApiError::NotFound { ref path } if path == "/api/missing"));
    }
}
