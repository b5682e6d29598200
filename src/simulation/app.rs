//! Application panel: tail latency, throughput, error rate and deployed version.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::rng::{iso, seeded, spike};
use super::Status;

const PERIOD_SECS: i64 = 3;
const SEED_OFFSET: u64 = 991;

/// Payload of `/api/app`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AppStatus {
    /// Generation time.
    pub ts: String,
    /// 95th percentile latency, 10..=3000 ms.
    pub p95_latency_ms: f64,
    /// Requests per second, 1..=5000.
    pub rps: f64,
    /// Error rate in percent, 0..=30.
    pub error_rate_percent: f64,
    /// Deployed version, `v1.<minor>.<patch>`.
    pub version: String,
    /// Overall status.
    pub status: Status,
}

/// Status for the given latency and error rate.
pub fn app_status(p95_ms: f64, error_rate_percent: f64) -> Status {
    let mut status = Status::Ok;
    if p95_ms > 900.0 || error_rate_percent > 3.5 {
        status = Status::Warn;
    }
    if p95_ms > 1400.0 || error_rate_percent > 8.0 {
        status = Status::Down;
    }
    status
}

/// Simulate the application panel at `now`.
pub fn simulate_app(now: DateTime<Utc>) -> AppStatus {
    let mut rng = seeded(now, PERIOD_SECS, SEED_OFFSET);

    let p95 = (rng.gen_range(90.0..850.0) * spike(&mut rng, 0.06, 3.2)).clamp(10.0, 3000.0);
    let rps = rng.gen_range(20.0_f64..520.0).clamp(1.0, 5000.0);
    let err = (rng.gen_range(0.05..3.5) * spike(&mut rng, 0.05, 4.0)).clamp(0.0, 30.0);
    let minor = rng.gen_range(2..=9);
    let patch = rng.gen_range(0..=30);

    AppStatus {
        ts: iso(now),
        p95_latency_ms: p95,
        rps,
        error_rate_percent: err,
        version: format!("v1.{}.{}", minor, patch),
        status: app_status(p95, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn thresholds() {
        assert_eq!(app_status(300.0, 1.0), Status::Ok);
        assert_eq!(app_status(901.0, 1.0), Status::Warn);
        assert_eq!(app_status(300.0, 3.6), Status::Warn);
        assert_eq!(app_status(1401.0, 1.0), Status::Down);
        assert_eq!(app_status(300.0, 8.1), Status::Down);
    }

    #[test]
    fn values_stay_in_range() {
        for secs in (1_700_000_000..1_700_006_000).step_by(3) {
            let now = Utc.timestamp_opt(secs, 0).unwrap();
            let app = simulate_app(now);

            assert!((10.0..=3000.0).contains(&app.p95_latency_ms));
            assert!((20.0..520.0).contains(&app.rps));
            assert!((0.0..=30.0).contains(&app.error_rate_percent));
            assert!(app.version.starts_with("v1."));
            assert_eq!(app.status, app_status(app.p95_latency_ms, app.error_rate_percent));
        }
    }

    #[test]
    fn version_parts_in_range() {
        for secs in (1_700_000_000..1_700_001_500).step_by(3) {
            let now = Utc.timestamp_opt(secs, 0).unwrap();
            let version = simulate_app(now).version;
            let parts: Vec<u32> = version[1..].split('.').map(|p| p.parse().unwrap()).collect();

            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], 1);
            assert!((2..=9).contains(&parts[1]));
            assert!(parts[2] <= 30);
        }
    }

    #[test]
    fn drifts_between_buckets() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let a = simulate_app(now);
        let b = simulate_app(Utc.timestamp_opt(1_700_000_003, 0).unwrap());
        assert_ne!(a.p95_latency_ms, b.p95_latency_ms);
    }
}
