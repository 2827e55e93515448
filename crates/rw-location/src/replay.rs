//! Replay of a recorded fix trace.
//!
//! # CSV format
//!
//! ```csv
//! timestamp_ms,latitude,longitude
//! 1700000000000,37.7700,-122.4200
//! 1700000001000,37.7701,-122.4199
//! ```
//!
//! Rows are delivered in file order; timestamps are not re-sorted.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Deserialize;

use rw_core::{GeoCoordinate, Timestamp};

use crate::fix::LocationFix;
use crate::source::{PositioningEvent, PositioningSource};
use crate::state::AuthorizationStatus;
use crate::tracker::LocationTracker;
use crate::LocationError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TraceRecord {
    timestamp_ms: i64,
    latitude:     f64,
    longitude:    f64,
}

/// Load a fix trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> Result<Vec<LocationFix>, LocationError> {
    let file = std::fs::File::open(path)?;
    load_trace_reader(file)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
pub fn load_trace_reader<R: Read>(reader: R) -> Result<Vec<LocationFix>, LocationError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut fixes = Vec::new();

    for (row, result) in csv_reader.deserialize::<TraceRecord>().enumerate() {
        let r = result.map_err(|e| LocationError::Parse(e.to_string()))?;
        let coordinate = GeoCoordinate::new(r.latitude, r.longitude);
        if !coordinate.is_valid() {
            return Err(LocationError::InvalidCoordinate {
                row,
                lat: r.latitude,
                lon: r.longitude,
            });
        }
        fixes.push(LocationFix::new(coordinate, Timestamp(r.timestamp_ms)));
    }

    Ok(fixes)
}

// ── ReplaySource ──────────────────────────────────────────────────────────────

/// A [`PositioningSource`] that plays back a fixed list of fixes on a
/// background thread.
///
/// With no pacing, fixes are delivered back to back.  With
/// [`paced`](Self::paced), the worker sleeps for the gap between consecutive
/// timestamps divided by `speedup`.
pub struct ReplaySource {
    authorization: AuthorizationStatus,
    fixes:         Arc<[LocationFix]>,
    speedup:       Option<f64>,
    stop:          Arc<AtomicBool>,
    worker:        Option<JoinHandle<usize>>,
}

impl ReplaySource {
    /// Replay `fixes`, answering the permission request with
    /// `AuthorizedWhenInUse`.
    pub fn new(fixes: Vec<LocationFix>) -> Self {
        Self {
            authorization: AuthorizationStatus::AuthorizedWhenInUse,
            fixes:         fixes.into(),
            speedup:       None,
            stop:          Arc::new(AtomicBool::new(false)),
            worker:        None,
        }
    }

    /// Answer the permission request with `status` instead.
    pub fn with_authorization(mut self, status: AuthorizationStatus) -> Self {
        self.authorization = status;
        self
    }

    /// Sleep between fixes, compressing recorded time by `speedup`.
    /// Non-positive values disable pacing.
    pub fn paced(mut self, speedup: f64) -> Self {
        self.speedup = (speedup.is_finite() && speedup > 0.0).then_some(speedup);
        self
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Block until the worker has delivered every fix (or was stopped).
    /// Returns the number of fixes handed to the tracker.
    pub fn join(&mut self) -> usize {
        match self.worker.take() {
            Some(handle) => handle.join().unwrap_or_else(|_| {
                log::error!("replay worker panicked");
                0
            }),
            None => 0,
        }
    }
}

impl PositioningSource for ReplaySource {
    fn request_authorization(&mut self, tracker: &LocationTracker) {
        tracker.handle(PositioningEvent::Authorization(self.authorization));
    }

    fn start_updates(&mut self, tracker: LocationTracker) {
        self.stop_updates();
        self.stop.store(false, Ordering::SeqCst);

        let fixes = Arc::clone(&self.fixes);
        let stop = Arc::clone(&self.stop);
        let speedup = self.speedup;

        log::info!("replaying {} fixes", fixes.len());
        self.worker = Some(std::thread::spawn(move || {
            let mut delivered = 0;
            let mut prev: Option<Timestamp> = None;
            for fix in fixes.iter() {
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                if let (Some(speedup), Some(prev)) = (speedup, prev) {
                    let gap_ms = fix.timestamp.0.saturating_sub(prev.0).max(0);
                    if !pause(&stop, pacing_delay(gap_ms, speedup)) {
                        break;
                    }
                }
                tracker.handle(PositioningEvent::Fix(*fix));
                delivered += 1;
                prev = Some(fix.timestamp);
            }
            delivered
        }));
    }

    fn stop_updates(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(worker) = &self.worker {
            worker.thread().unpark();
        }
        self.join();
    }
}

/// Wall-clock wait for a recorded gap of `gap_ms` compressed by `speedup`.
/// Gaps too long to represent wait forever (until stopped).
pub(crate) fn pacing_delay(gap_ms: i64, speedup: f64) -> Duration {
    Duration::try_from_secs_f64(gap_ms as f64 / 1000.0 / speedup).unwrap_or(Duration::MAX)
}

/// Park until `delay` has passed or `stop` is raised.  Returns `false` if
/// stopped.
fn pause(stop: &AtomicBool, delay: Duration) -> bool {
    let deadline = Instant::now().checked_add(delay);
    loop {
        if stop.load(Ordering::SeqCst) {
            return false;
        }
        match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return true;
                }
                std::thread::park_timeout(deadline - now);
            }
            None => std::thread::park(),
        }
    }
}

impl Drop for ReplaySource {
    fn drop(&mut self) {
        self.stop_updates();
    }
}
