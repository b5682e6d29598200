//! OpenAPI document generation.

use utoipa::OpenApi;

use super::handlers;
use crate::error::Result;
use crate::simulation::{
    AppStatus, CloudStatus, Identity, NetworkStatus, SecurityEvent, SecurityFeed, ServiceEntry,
    ServiceKind, ServiceMetrics, ServiceTargets, Severity, Status, SystemInfo,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::system,
        handlers::app,
        handlers::network,
        handlers::cloud,
        handlers::security,
        handlers::list_services,
        handlers::service_metrics,
    ),
    components(schemas(
        Status,
        SystemInfo,
        AppStatus,
        NetworkStatus,
        CloudStatus,
        Severity,
        SecurityEvent,
        SecurityFeed,
        ServiceKind,
        ServiceTargets,
        ServiceEntry,
        ServiceMetrics,
        handlers::HealthResponse,
    )),
    tags(
        (name = "telemetry", description = "Simulated dashboard panels"),
        (name = "services", description = "Service catalog and per-service metrics"),
        (name = "meta", description = "Process health"),
    )
)]
struct ApiDoc;

/// Build the document, titled with the instance identity.
pub fn document(identity: &Identity) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = identity.name.clone();
    doc.info.version = identity.version.clone();
    doc
}

/// Render the document as indented JSON.
pub fn to_pretty_json(identity: &Identity) -> Result<String> {
    Ok(serde_json::to_string_pretty(&document(identity))?)
}
