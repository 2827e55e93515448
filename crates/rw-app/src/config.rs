//! Application configuration.
//!
//! Loaded from JSON.  Every field is optional; missing fields take the
//! defaults below.
//!
//! ```json
//! {
//!   "base_unit": 0.001,
//!   "default_shape": "Bird",
//!   "longitude_scaling": "uncorrected",
//!   "camera_span_deg": 0.1,
//!   "route_min_span_deg": 0.01,
//!   "route_padding": 0.2,
//!   "initial_center": { "lat": 37.7749, "lon": -122.4194 },
//!   "shapes_csv": "shapes.csv"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rw_core::{GeoCoordinate, ShapeId};
use rw_route::{BASE_UNIT, LongitudeScaling, RouteGenerator};
use rw_shapes::{ShapeLibrary, load_templates_csv};

use crate::AppResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Degrees of latitude per template unit at goal 1.0.
    pub base_unit: f64,

    /// Shape selected at startup.
    pub default_shape: String,

    pub longitude_scaling: LongitudeScaling,

    /// Map span while following the user, in degrees.
    pub camera_span_deg: f64,

    /// Smallest span used when framing a route, in degrees.
    pub route_min_span_deg: f64,

    /// Extra margin around a framed route, as a fraction of its extent.
    pub route_padding: f64,

    /// Where the map points before the first fix.
    pub initial_center: GeoCoordinate,

    /// Extra templates to register on top of the built-ins.
    pub shapes_csv: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_unit:          BASE_UNIT,
            default_shape:      ShapeId::default().as_str().to_owned(),
            longitude_scaling:  LongitudeScaling::Uncorrected,
            camera_span_deg:    0.1,
            route_min_span_deg: 0.01,
            route_padding:      0.2,
            initial_center:     GeoCoordinate::new(37.7749, -122.4194),
            shapes_csv:         None,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// A generator configured with this scale and projection.
    pub fn generator(&self) -> RouteGenerator {
        RouteGenerator::new()
            .with_base_unit(self.base_unit)
            .with_longitude_scaling(self.longitude_scaling)
    }

    /// Built-in shapes plus any templates from `shapes_csv`.
    pub fn library(&self) -> AppResult<ShapeLibrary> {
        let mut library = ShapeLibrary::builtin();
        if let Some(path) = &self.shapes_csv {
            let templates = load_templates_csv(path)?;
            log::info!("registered {} templates from {}", templates.len(), path.display());
            library.extend(templates);
        }
        Ok(library)
    }
}
