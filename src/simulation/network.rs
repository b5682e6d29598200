//! Network panel: round-trip time, packet loss and DNS resolution time.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::rng::{iso, seeded, spike};
use super::Status;

const PERIOD_SECS: i64 = 3;
const SEED_OFFSET: u64 = 42;

/// Payload of `/api/network`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NetworkStatus {
    /// Generation time.
    pub ts: String,
    /// Round-trip time, 1..=2000 ms.
    pub rtt_ms: f64,
    /// Packet loss in percent, 0..=30.
    pub packet_loss_percent: f64,
    /// DNS lookup time, 1..=1200 ms.
    pub dns_ms: f64,
    /// Overall status.
    pub status: Status,
}

/// Status for the given link figures.
pub fn network_status(rtt_ms: f64, loss_percent: f64, dns_ms: f64) -> Status {
    let mut status = Status::Ok;
    if rtt_ms > 220.0 || loss_percent > 1.5 || dns_ms > 140.0 {
        status = Status::Warn;
    }
    if rtt_ms > 480.0 || loss_percent > 5.0 {
        status = Status::Down;
    }
    status
}

/// Simulate the network panel at `now`.
pub fn simulate_network(now: DateTime<Utc>) -> NetworkStatus {
    let mut rng = seeded(now, PERIOD_SECS, SEED_OFFSET);

    let rtt = (rng.gen_range(12.0..180.0) * spike(&mut rng, 0.05, 3.0)).clamp(1.0, 2000.0);
    let loss = (rng.gen_range(0.0..1.2) * spike(&mut rng, 0.03, 5.0)).clamp(0.0, 30.0);
    let dns = (rng.gen_range(8.0..90.0) * spike(&mut rng, 0.05, 2.6)).clamp(1.0, 1200.0);

    NetworkStatus {
        ts: iso(now),
        rtt_ms: rtt,
        packet_loss_percent: loss,
        dns_ms: dns,
        status: network_status(rtt, loss, dns),
    }
}
