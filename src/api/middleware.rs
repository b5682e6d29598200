//! Request middleware: CORS, tracing and metrics.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::metrics;

/// Permissive CORS so the static dashboard can call the API from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Request/response spans for every request, fallback included.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Count and time every request, labelled by route template or `unmatched`.
pub async fn track_requests(matched: Option<MatchedPath>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = matched
        .map(|m| m.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;
    metrics::record_http_request(start, &path, response.status().as_u16());
    response
}
