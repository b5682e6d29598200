//! Simulated APM telemetry API.
//!
//! Serves the JSON feeds behind the monitoring dashboard demo: host, app,
//! network, cloud and security panels, a static service catalog, and live
//! metrics per service. Values are generated from time-bucketed seeds, so
//! the dashboard sees plausible numbers that drift every few seconds without
//! any backing store.
//!
//! ```text
//! GET /api/system                        -> {"status": "ok", "cpu_percent": 41.7, ...}
//! GET /api/services                      -> [{"id": "svc-auth", ...}, ...]
//! GET /api/services/svc-auth/metrics     -> {"latency_ms": 132.4, "status": "ok", ...}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`simulation`]: Seeded payload generators and the static catalog
//! - [`api`]: HTTP router, handlers and OpenAPI document
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod simulation;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
