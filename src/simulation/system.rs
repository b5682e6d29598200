//! Host-level panel: CPU, memory, disk and uptime.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::rng::{chance, iso, seeded};
use super::{Identity, Status};

const PERIOD_SECS: i64 = 3;

/// Payload of `/api/system`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SystemInfo {
    /// Generation time.
    pub ts: String,
    /// Instance name.
    pub name: String,
    /// Instance version.
    pub version: String,
    /// CPU utilisation, 1..=100.
    pub cpu_percent: f64,
    /// Memory utilisation, 1..=100.
    pub mem_percent: f64,
    /// Disk utilisation, 1..=100.
    pub disk_percent: f64,
    /// Uptime such as `"36h"`.
    pub uptime_human: String,
    /// Overall status.
    pub status: Status,
}

/// Status for the given utilisation figures.
pub fn system_status(cpu: f64, mem: f64, disk: f64) -> Status {
    let mut status = Status::Ok;
    if cpu > 90.0 || mem > 90.0 || disk > 92.0 {
        status = Status::Warn;
    }
    if cpu > 96.0 || mem > 96.0 {
        status = Status::Down;
    }
    status
}

/// Simulate the host panel at `now`.
pub fn simulate_system(now: DateTime<Utc>, identity: &Identity) -> SystemInfo {
    let mut rng = seeded(now, PERIOD_SECS, 0);

    let base_cpu = rng.gen_range(18.0_f64..92.0);
    let burst = if chance(&mut rng, 0.12) { 10.0 } else { 0.0 };
    let cpu = (base_cpu + burst).clamp(1.0, 100.0);
    let mem = rng.gen_range(30.0_f64..88.0).clamp(1.0, 100.0);
    let disk = rng.gen_range(40.0_f64..93.0).clamp(1.0, 100.0);
    let uptime_hours = rng.gen_range(12.0_f64..240.0) as u32;

    SystemInfo {
        ts: iso(now),
        name: identity.name.clone(),
        version: identity.version.clone(),
        cpu_percent: cpu,
        mem_percent: mem,
        disk_percent: disk,
        uptime_human: format!("{}h", uptime_hours),
        status: system_status(cpu, mem, disk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn identity() -> Identity {
        Identity {
            name: "APM Demo API".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn thresholds() {
        assert_eq!(system_status(50.0, 50.0, 50.0), Status::Ok);
        assert_eq!(system_status(91.0, 50.0, 50.0), Status::Warn);
        assert_eq!(system_status(50.0, 50.0, 92.5), Status::Warn);
        assert_eq!(system_status(50.0, 97.0, 50.0), Status::Down);
        // disk alone never takes the host down
        assert_eq!(system_status(50.0, 50.0, 100.0), Status::Warn);
    }

    #[test]
    fn values_stay_in_range() {
        for secs in (1_700_000_000..1_700_003_000).step_by(3) {
            let now = Utc.timestamp_opt(secs, 0).unwrap();
            let info = simulate_system(now, &identity());

            assert!((1.0..=100.0).contains(&info.cpu_percent));
            assert!((30.0..88.0).contains(&info.mem_percent));
            assert!((40.0..93.0).contains(&info.disk_percent));

            let hours: u32 = info.uptime_human.trim_end_matches('h').parse().unwrap();
            assert!((12..240).contains(&hours));
            assert_eq!(
                info.status,
                system_status(info.cpu_percent, info.mem_percent, info.disk_percent)
            );
        }
    }

    #[test]
    fn deterministic_within_bucket() {
        let a = Utc.timestamp_opt(1_700_000_001, 0).unwrap();
        let b = Utc.timestamp_opt(1_700_000_002, 500).unwrap();

        let x = simulate_system(a, &identity());
        let y = simulate_system(b, &identity());
        assert_eq!(x.cpu_percent, y.cpu_percent);
        assert_eq!(x.uptime_human, y.uptime_human);
        assert_eq!(x.status, y.status);
    }

    #[test]
    fn carries_identity() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let info = simulate_system(now, &identity());
        assert_eq!(info.name, "APM Demo API");
        assert_eq!(info.version, "1.0.0");
    }
}
