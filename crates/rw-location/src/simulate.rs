//! Synthetic fix traces: walk a polyline at constant speed with GPS-like
//! jitter.
//!
//! The jitter RNG is seeded, so the same parameters always produce the same
//! trace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rw_core::{GeoCoordinate, Timestamp};

use crate::fix::LocationFix;

/// Metres per degree of latitude (spherical approximation).
const METRES_PER_DEG: f64 = 111_320.0;

/// Upper bound on samples along a path, start and end points excluded.
/// Slower walks are sampled more sparsely instead.
pub const MAX_SAMPLES: usize = 100_000;

/// Parameters for [`simulate_walk`].
#[derive(Clone, Debug, PartialEq)]
pub struct WalkParams {
    /// Walking speed in metres per second.
    pub speed_mps: f64,
    /// Time between fixes in milliseconds.
    pub interval_ms: u32,
    /// Maximum jitter in metres, applied independently north and east.
    pub jitter_m: f64,
    pub seed: u64,
    /// Timestamp of the first fix.
    pub start: Timestamp,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            speed_mps:   2.8, // easy jog
            interval_ms: 1_000,
            jitter_m:    3.0,
            seed:        42,
            start:       Timestamp::EPOCH,
        }
    }
}

/// Sample positions along `path` every `interval_ms` at `speed_mps`.
///
/// The first and last fixes sit on the path's end points (plus jitter).
/// Returns an empty trace for an empty path and a single fix when the
/// parameters describe no movement.  At most [`MAX_SAMPLES`] intermediate
/// fixes are produced; timestamps keep the requested interval.
pub fn simulate_walk(path: &[GeoCoordinate], params: &WalkParams) -> Vec<LocationFix> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };

    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut fixes = Vec::new();
    let mut t = params.start;
    let mut emit = |p: GeoCoordinate, rng: &mut SmallRng, fixes: &mut Vec<LocationFix>| {
        fixes.push(LocationFix::new(jitter(p, params.jitter_m, rng), t));
        t = t + params.interval_ms as i64;
    };

    emit(first, &mut rng, &mut fixes);

    let mut step_m = params.speed_mps * params.interval_ms as f64 / 1000.0;
    if !(step_m.is_finite() && step_m > 0.0) {
        return fixes;
    }
    let total_m: f64 = path.windows(2).map(|w| w[0].distance_m(w[1])).sum();
    if total_m / step_m > MAX_SAMPLES as f64 {
        let widened = total_m / MAX_SAMPLES as f64;
        log::warn!(
            "walking {total_m:.0} m in {step_m} m steps exceeds {MAX_SAMPLES} samples; \
             sampling every {widened:.3} m instead"
        );
        step_m = widened;
    }

    let mut travelled = 0.0;
    let mut next_at = step_m;
    for w in path.windows(2) {
        let seg = w[0].distance_m(w[1]);
        while next_at <= travelled + seg {
            let frac = (next_at - travelled) / seg;
            emit(lerp(w[0], w[1], frac), &mut rng, &mut fixes);
            next_at += step_m;
        }
        travelled += seg;
    }

    if let [_, .., last] = path {
        emit(*last, &mut rng, &mut fixes);
    }
    fixes
}

fn lerp(a: GeoCoordinate, b: GeoCoordinate, frac: f64) -> GeoCoordinate {
    GeoCoordinate::new(a.lat + (b.lat - a.lat) * frac, a.lon + (b.lon - a.lon) * frac)
}

fn jitter(p: GeoCoordinate, jitter_m: f64, rng: &mut SmallRng) -> GeoCoordinate {
    if !jitter_m.is_finite() || jitter_m <= 0.0 {
        return p;
    }
    let north = rng.gen_range(-jitter_m..=jitter_m);
    let east = rng.gen_range(-jitter_m..=jitter_m);
    let cos_lat = p.lat.to_radians().cos().abs().max(0.01);
    GeoCoordinate::new(
        (p.lat + north / METRES_PER_DEG).clamp(-90.0, 90.0),
        (p.lon + east / (METRES_PER_DEG * cos_lat)).clamp(-180.0, 180.0),
    )
}
