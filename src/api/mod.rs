//! HTTP API module for the dashboard, service catalog and health endpoints.

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
