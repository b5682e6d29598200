//! Simulated telemetry for the dashboard panels.
//!
//! Every simulator is a pure function of a timestamp. Values come from a
//! generator seeded with the timestamp's bucket (`unix_secs / period`), so all
//! requests inside one bucket see identical numbers and values drift between
//! buckets.

pub mod app;
pub mod catalog;
pub mod cloud;
pub mod network;
pub mod rng;
pub mod security;
pub mod services;
pub mod system;

use serde::Serialize;
use strum::Display;
use utoipa::ToSchema;

pub use app::{simulate_app, AppStatus};
pub use catalog::{base_services, ServiceEntry, ServiceKind, ServiceTargets};
pub use cloud::{simulate_cloud, CloudStatus};
pub use network::{simulate_network, NetworkStatus};
pub use security::{simulate_security, SecurityEvent, SecurityFeed, Severity};
pub use services::{simulate_service_metrics, ServiceMetrics};
pub use system::{simulate_system, SystemInfo};

/// Health of a panel. Ordered from best to worst.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Within targets.
    Ok,
    /// Degraded.
    Warn,
    /// Failing.
    Down,
}

/// Cosmetic identity of the running instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Display version.
    pub version: String,
}
