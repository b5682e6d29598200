//! Per-service live metrics.
//!
//! Any id is accepted, including ids the dashboard created locally. Each id
//! hashes to its own seed so a service keeps a stable "personality" while
//! its values drift every bucket.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use utoipa::ToSchema;

use super::rng::{bucket, chance, iso};
use super::Status;

const PERIOD_SECS: i64 = 5;
const SEED_MODULUS: u64 = (1 << 31) - 1;

/// Payload of `/api/services/{service_id}/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceMetrics {
    /// Generation time.
    pub ts: String,
    /// Mean latency, 5..=2000 ms.
    pub latency_ms: f64,
    /// Error rate in percent, 0..=25.
    pub error_rate: f64,
    /// Requests per second, 0.1..=2000.
    pub rps: f64,
    /// Overall status.
    pub status: Status,
}

/// Seed component derived from the service id.
pub fn stable_seed(service_id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    service_id.hash(&mut hasher);
    hasher.finish() % SEED_MODULUS
}

/// Weighted badness of a latency/error pair, 0..=1.2 where higher is worse.
pub fn health_score(latency_ms: f64, error_rate: f64) -> f64 {
    ((latency_ms / 900.0) * 0.6 + (error_rate / 10.0) * 0.4).clamp(0.0, 1.2)
}

/// Status for a health score.
pub fn score_status(score: f64) -> Status {
    if score > 0.85 {
        Status::Down
    } else if score > 0.55 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Simulate metrics for `service_id` at `now`.
pub fn simulate_service_metrics(service_id: &str, now: DateTime<Utc>) -> ServiceMetrics {
    let seed = stable_seed(service_id).wrapping_add(bucket(now, PERIOD_SECS));
    let mut rng = StdRng::seed_from_u64(seed);

    let mut latency: f64 = rng.gen_range(20.0..260.0);
    let mut error: f64 = rng.gen_range(0.0..2.5);
    let rps = rng.gen_range(5.0_f64..250.0).clamp(0.1, 2000.0);

    if chance(&mut rng, 0.08) {
        latency *= rng.gen_range(2.0..4.0);
        error *= rng.gen_range(2.0..6.0);
    }

    let latency = latency.clamp(5.0, 2000.0);
    let error = error.clamp(0.0, 25.0);

    ServiceMetrics {
        ts: iso(now),
        latency_ms: latency,
        error_rate: error,
        rps,
        status: score_status(health_score(latency, error)),
    }
}
