//! Cloud panel: resource health, daily spend and open incidents.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use utoipa::ToSchema;

use super::rng::{chance, iso, seeded};
use super::Status;

const PERIOD_SECS: i64 = 5;
const SEED_OFFSET: u64 = 777;

const COST_FLOOR: Decimal = dec!(20);
const COST_CEILING: Decimal = dec!(5000);

/// Payload of `/api/cloud`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CloudStatus {
    /// Generation time.
    pub ts: String,
    /// Number of tracked resources, 6..=14.
    pub total_count: u32,
    /// Resources currently healthy.
    pub healthy_count: u32,
    /// Projected spend in USD, two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub estimated_cost_per_day_usd: Decimal,
    /// Incidents still open.
    pub open_incidents: u32,
    /// Overall status.
    pub status: Status,
}

/// Status for the given resource and incident counts.
pub fn cloud_status(unhealthy: u32, incidents: u32) -> Status {
    let mut status = Status::Ok;
    if unhealthy >= 1 || incidents >= 1 {
        status = Status::Warn;
    }
    if unhealthy >= 3 || incidents >= 4 {
        status = Status::Down;
    }
    status
}

/// Simulate the cloud panel at `now`.
pub fn simulate_cloud(now: DateTime<Utc>) -> CloudStatus {
    let mut rng = seeded(now, PERIOD_SECS, SEED_OFFSET);

    let total: u32 = rng.gen_range(6..=14);
    let unhealthy = (0..total).filter(|_| chance(&mut rng, 0.12)).count() as u32;
    let healthy = total - unhealthy;

    let raw_cost = rng.gen_range(120.0..680.0) + f64::from(unhealthy) * rng.gen_range(10.0..40.0);
    let cost = Decimal::from_f64(raw_cost)
        .unwrap_or(COST_FLOOR)
        .round_dp(2)
        .clamp(COST_FLOOR, COST_CEILING);

    let incidents = unhealthy + u32::from(chance(&mut rng, 0.08));

    CloudStatus {
        ts: iso(now),
        total_count: total,
        healthy_count: healthy,
        estimated_cost_per_day_usd: cost,
        open_incidents: incidents,
        status: cloud_status(unhealthy, incidents),
    }
}
