//! The map camera and the observer that keeps it on the user.

use std::sync::{Arc, Mutex, PoisonError};

use rw_core::GeoCoordinate;
use rw_location::{FixObserver, LocationFix, LocationTracker, SubscriptionId};
use rw_route::{Route, Viewport};

/// Shared handle to the region the map should show.
///
/// Written by [`CameraFollower`] on the positioning thread and by
/// [`AppState`][crate::AppState] when a route is generated; read by the
/// renderer.
#[derive(Clone, Debug)]
pub struct MapCamera {
    viewport: Arc<Mutex<Viewport>>,
}

impl MapCamera {
    pub fn new(initial: Viewport) -> Self {
        Self { viewport: Arc::new(Mutex::new(initial)) }
    }

    pub fn viewport(&self) -> Viewport {
        *self.viewport.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the center, keeping the current zoom.
    pub fn recenter(&self, center: GeoCoordinate) {
        let mut v = self.viewport.lock().unwrap_or_else(PoisonError::into_inner);
        *v = v.recentered(center);
    }

    /// Replace the region outright.
    pub fn set(&self, viewport: Viewport) {
        *self.viewport.lock().unwrap_or_else(PoisonError::into_inner) = viewport;
    }

    /// Zoom to fit `route`.  Returns `false` (camera untouched) for an empty
    /// route.
    pub fn frame(&self, route: &Route, padding: f64, min_span_deg: f64) -> bool {
        match Viewport::fit(&route.coordinates, padding, min_span_deg) {
            Some(v) => {
                self.set(v);
                true
            }
            None => false,
        }
    }

    /// Subscribe a [`CameraFollower`] for this camera to `tracker`.
    pub fn follow(&self, tracker: &LocationTracker) -> SubscriptionId {
        tracker.subscribe(CameraFollower::new(self.clone()))
    }
}

/// Recenters a [`MapCamera`] on every fix.
pub struct CameraFollower {
    camera: MapCamera,
}

impl CameraFollower {
    pub fn new(camera: MapCamera) -> Self {
        Self { camera }
    }
}

impl FixObserver for CameraFollower {
    fn on_fix(&mut self, fix: &LocationFix) {
        self.camera.recenter(fix.coordinate);
    }
}
