//! Seeding and shaping helpers shared by the simulators.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Index of the `period_secs`-wide window containing `now`.
pub fn bucket(now: DateTime<Utc>, period_secs: i64) -> u64 {
    now.timestamp().max(0).div_euclid(period_secs) as u64
}

/// Generator seeded with the bucket of `now` plus a per-panel offset.
pub fn seeded(now: DateTime<Utc>, period_secs: i64, offset: u64) -> StdRng {
    StdRng::seed_from_u64(bucket(now, period_secs).wrapping_add(offset))
}

/// True with probability `p`.
pub fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// `factor` with probability `p`, otherwise 1.
pub fn spike<R: Rng>(rng: &mut R, p: f64, factor: f64) -> f64 {
    if chance(rng, p) {
        factor
    } else {
        1.0
    }
}

/// RFC 3339 timestamp with microseconds and a `+00:00` offset.
pub fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}
