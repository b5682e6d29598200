//! Static reference data: the base service catalog and canned security events.

use once_cell::sync::Lazy;
use serde::Serialize;
use strum::Display;
use utoipa::ToSchema;

use super::security::Severity;

/// Kind of monitored service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceKind {
    /// Application service.
    App,
    /// Database.
    Db,
    /// Cache.
    Cache,
    /// Edge or API gateway.
    Gateway,
}

/// Service-level targets shown next to live metrics.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceTargets {
    /// Latency objective in milliseconds.
    pub target_latency_ms: u32,
    /// Error-rate objective in percent.
    pub target_error_rate: f64,
}

/// One entry of `/api/services`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceEntry {
    /// Stable identifier, used in `/api/services/{id}/metrics`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Service kind.
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    /// Deployment environment.
    pub env: String,
    /// Owning team.
    pub owner: String,
    /// Objectives.
    pub targets: ServiceTargets,
}

impl ServiceEntry {
    fn prod(
        id: &str,
        name: &str,
        kind: ServiceKind,
        owner: &str,
        target_latency_ms: u32,
        target_error_rate: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            env: "prod".to_string(),
            owner: owner.to_string(),
            targets: ServiceTargets {
                target_latency_ms,
                target_error_rate,
            },
        }
    }
}

static BASE_SERVICES: Lazy<Vec<ServiceEntry>> = Lazy::new(|| {
    vec![
        ServiceEntry::prod("svc-auth", "auth-service", ServiceKind::App, "identity", 220, 0.8),
        ServiceEntry::prod("svc-orders", "orders-api", ServiceKind::App, "commerce", 300, 1.0),
        ServiceEntry::prod("svc-postgres", "postgres-primary", ServiceKind::Db, "platform", 80, 0.2),
        ServiceEntry::prod("svc-redis", "redis-cache", ServiceKind::Cache, "platform", 25, 0.1),
        ServiceEntry::prod("svc-gateway", "edge-gateway", ServiceKind::Gateway, "network", 150, 0.5),
    ]
});

/// The built-in services, in display order.
pub fn base_services() -> &'static [ServiceEntry] {
    &BASE_SERVICES
}

/// Template for a simulated security event.
#[derive(Debug, Clone, Copy)]
pub struct SecurityEventTemplate {
    /// Event identifier.
    pub id: &'static str,
    /// Severity.
    pub severity: Severity,
    /// Headline.
    pub title: &'static str,
    /// Details.
    pub detail: &'static str,
}

/// Pool the security feed samples from.
pub static SECURITY_EVENTS: [SecurityEventTemplate; 4] = [
    SecurityEventTemplate {
        id: "evt-1",
        severity: Severity::High,
        title: "Suspicious login burst",
        detail: "Multiple failed logins from new ASN",
    },
    SecurityEventTemplate {
        id: "evt-2",
        severity: Severity::Medium,
        title: "WAF rule triggered",
        detail: "Possible SQLi pattern blocked",
    },
    SecurityEventTemplate {
        id: "evt-3",
        severity: Severity::Critical,
        title: "Privilege escalation attempt",
        detail: "Admin endpoint access anomaly",
    },
    SecurityEventTemplate {
        id: "evt-4",
        severity: Severity::Info,
        title: "Key rotation reminder",
        detail: "KMS key rotation due in 7 days",
    },
];
