//! Unified error types for the APM demo API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Unified error type for startup and tooling paths.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors rendered as HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("no route for {path}")]
    NotFound {
        /// The requested path.
        path: String,
    },
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "Not Found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(error = %self, "request rejected");
        (self.status_code(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound {
            path: "/nope".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "no route for /nope");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_config_message() {
        let err = AppError::InvalidConfig("PORT must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: PORT must be non-zero"
        );
    }
}
