//! Security panel: a handful of recent events sampled from a fixed pool.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use strum::Display;
use utoipa::ToSchema;

use super::catalog::{SecurityEventTemplate, SECURITY_EVENTS};
use super::rng::{iso, seeded};
use super::Status;

const PERIOD_SECS: i64 = 7;
const SEED_OFFSET: u64 = 2024;

/// Event severity, ordered from least to most severe.
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
pub enum Severity {
    /// Informational.
    Info,
    /// Worth a look.
    Medium,
    /// Needs attention.
    High,
    /// Active threat.
    Critical,
}

impl Severity {
    /// Panel status implied by an event of this severity.
    pub fn status(self) -> Status {
        match self {
            Severity::Info => Status::Ok,
            Severity::Medium | Severity::High => Status::Warn,
            Severity::Critical => Status::Down,
        }
    }
}

/// One event in the security feed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SecurityEvent {
    /// Event identifier.
    pub id: String,
    /// Severity.
    pub severity: Severity,
    /// Headline.
    pub title: String,
    /// Details.
    pub detail: String,
    /// When the event was observed.
    pub ts: String,
    /// Emitting component.
    pub source: String,
}

impl SecurityEvent {
    fn stamped(template: &SecurityEventTemplate, ts: DateTime<Utc>) -> Self {
        Self {
            id: template.id.to_string(),
            severity: template.severity,
            title: template.title.to_string(),
            detail: template.detail.to_string(),
            ts: iso(ts),
            source: "backend".to_string(),
        }
    }
}

/// Payload of `/api/security`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SecurityFeed {
    /// Generation time.
    pub ts: String,
    /// Status derived from the most severe event.
    pub status: Status,
    /// Between two and four distinct events.
    pub events: Vec<SecurityEvent>,
}

/// Simulate the security feed at `now`.
pub fn simulate_security(now: DateTime<Utc>) -> SecurityFeed {
    let mut rng = seeded(now, PERIOD_SECS, SEED_OFFSET);

    let count = rng.gen_range(2..=5).min(SECURITY_EVENTS.len());
    let chosen: Vec<&SecurityEventTemplate> =
        SECURITY_EVENTS.choose_multiple(&mut rng, count).collect();

    let events: Vec<SecurityEvent> = chosen
        .into_iter()
        .map(|template| {
            let minutes_ago = rng.gen_range(0..=90);
            SecurityEvent::stamped(template, now - Duration::minutes(minutes_ago))
        })
        .collect();

    let status = events
        .iter()
        .map(|e| e.severity)
        .max()
        .map(Severity::status)
        .unwrap_or(Status::Ok);

    SecurityFeed {
        ts: iso(now),
        status,
        events,
    }
}
