//! The explicit state container.

use rw_core::{DistanceGoal, ShapeId};
use rw_location::{LocationTracker, SubscriptionId};
use rw_route::{Route, RouteGenerator, Viewport};
use rw_shapes::ShapeLibrary;

use crate::camera::MapCamera;
use crate::config::AppConfig;
use crate::AppResult;

/// Result of a generate request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A new route replaced the previous one.
    Generated { points: usize },
    /// No position is known yet; nothing changed.
    NoFix,
}

/// Everything the controls, generator and map agree on.
///
/// One writer per field: the distance box owns `distance_text`, the picker
/// owns `selected_shape`, and only [`generate`](Self::generate) and
/// [`clear_route`](Self::clear_route) touch `route`.
pub struct AppState {
    distance_text:  String,
    selected_shape: String,
    route:          Option<Route>,
    camera:         MapCamera,
    generator:      RouteGenerator,
    library:        ShapeLibrary,
    padding:        f64,
    min_span_deg:   f64,
}

impl AppState {
    /// Build state from `config`, loading its extra templates if any.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(config, config.library()?))
    }

    /// Build state from `config` with an already-assembled shape library.
    pub fn new(config: &AppConfig, library: ShapeLibrary) -> Self {
        Self {
            distance_text:  String::new(),
            selected_shape: config.default_shape.clone(),
            route:          None,
            camera:         MapCamera::new(Viewport::around(config.initial_center, config.camera_span_deg)),
            generator:      config.generator(),
            library,
            padding:        config.route_padding,
            min_span_deg:   config.route_min_span_deg,
        }
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    /// Raw contents of the distance field.  Parsed only at generation time.
    pub fn set_distance_text(&mut self, text: impl Into<String>) {
        self.distance_text = text.into();
    }

    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    /// The goal the current distance text resolves to.
    pub fn distance_goal(&self) -> DistanceGoal {
        DistanceGoal::parse(&self.distance_text)
    }

    pub fn select_shape(&mut self, name: impl Into<String>) {
        self.selected_shape = name.into();
    }

    pub fn select_builtin(&mut self, id: ShapeId) {
        self.select_shape(id.as_str());
    }

    pub fn selected_shape(&self) -> &str {
        &self.selected_shape
    }

    /// Whether `name` resolves to a registered template.
    pub fn knows_shape(&self, name: &str) -> bool {
        self.library.contains(name)
    }

    /// Names the picker can offer.
    pub fn shape_names(&self) -> Vec<&str> {
        self.library.names()
    }

    // ── Outputs ───────────────────────────────────────────────────────────

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    /// Keep the camera centred on the user.  Pass the returned id to
    /// [`LocationTracker::unsubscribe`] to stop following.
    pub fn follow(&self, tracker: &LocationTracker) -> SubscriptionId {
        self.camera.follow(tracker)
    }

    // ── Actions ───────────────────────────────────────────────────────────

    /// Generate a route for the selected shape at the tracker's current fix,
    /// replacing any previous route and framing it on the camera.
    ///
    /// Without a fix this is a no-op that reports [`GenerateOutcome::NoFix`].
    pub fn generate(&mut self, tracker: &LocationTracker) -> GenerateOutcome {
        let Some(fix) = tracker.current_fix() else {
            log::info!("generate requested before any position fix; ignored");
            return GenerateOutcome::NoFix;
        };

        let template = self.library.lookup(&self.selected_shape);
        let route = self.generator.route(&template, fix.coordinate, self.distance_goal());
        let points = route.len();

        self.camera.frame(&route, self.padding, self.min_span_deg);
        log::info!(
            "generated {} route at {} ({points} points, {:.0} m)",
            route.shape,
            route.anchor,
            route.length_m(),
        );
        self.route = Some(route);
        GenerateOutcome::Generated { points }
    }

    pub fn clear_route(&mut self) {
        self.route = None;
    }
}
