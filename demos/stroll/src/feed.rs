//! Position feeds for the demo: a recorded trace or a synthetic one.

use std::path::Path;

use anyhow::Result;

use rw_core::{GeoCoordinate, Timestamp};
use rw_location::{LocationFix, ReplaySource, WalkParams, load_trace_csv, simulate_walk};

/// Fixes from a recorded CSV trace.
pub fn recorded(path: &Path) -> Result<ReplaySource> {
    let fixes = load_trace_csv(path)?;
    log::info!("loaded {} fixes from {}", fixes.len(), path.display());
    Ok(ReplaySource::new(fixes))
}

/// A handful of jittery fixes from someone standing at `at`.
pub fn standing(at: GeoCoordinate, seed: u64) -> ReplaySource {
    let start = Timestamp::now();
    let fixes: Vec<LocationFix> = (0..5u64)
        .flat_map(|i| {
            let params = WalkParams {
                speed_mps: 0.0,
                seed:      seed.wrapping_add(i),
                start:     start + i as i64 * 1_000,
                ..WalkParams::default()
            };
            simulate_walk(&[at], &params)
        })
        .collect();
    ReplaySource::new(fixes)
}

/// Someone walking `path` at `speed_mps`.
pub fn walking(path: &[GeoCoordinate], speed_mps: f64, seed: u64) -> ReplaySource {
    let params = WalkParams {
        speed_mps,
        seed,
        start: Timestamp::now(),
        ..WalkParams::default()
    };
    ReplaySource::new(simulate_walk(path, &params))
}
