//! The template → coordinates transform.
//!
//! # Projection
//!
//! Offsets are applied as plain degree deltas, a local planar approximation
//! that holds for kilometre-scale shapes.  By default no correction is made
//! for longitude convergence, so away from the equator shapes come out
//! stretched east–west by `1 / cos(lat)`.  [`LongitudeScaling::CosLatitude`]
//! undoes that stretch for callers who want true proportions.

use rw_core::{DistanceGoal, GeoCoordinate};
use rw_shapes::{ShapeTemplate, lookup_name};

use crate::route::Route;

/// Degrees of latitude covered by one offset unit at goal 1.0.
pub const BASE_UNIT: f64 = 0.001;

/// Floor for `cos(lat)` under [`LongitudeScaling::CosLatitude`], so routes
/// anchored near a pole stay finite.
const MIN_COS_LAT: f64 = 0.01;

/// How eastward offsets are converted to longitude.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LongitudeScaling {
    /// `lon += dy * s`.  Matches the latitude scale only at the equator.
    #[default]
    Uncorrected,
    /// `lon += dy * s / cos(anchor.lat)`.
    CosLatitude,
}

impl LongitudeScaling {
    /// Multiplier applied to eastward offsets for a route anchored at `lat`.
    #[inline]
    fn factor(self, lat: f64) -> f64 {
        match self {
            LongitudeScaling::Uncorrected => 1.0,
            LongitudeScaling::CosLatitude => 1.0 / lat.to_radians().cos().abs().max(MIN_COS_LAT),
        }
    }
}

/// Scales and anchors shape templates.
///
/// Cheap to copy; holds no state between calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteGenerator {
    base_unit:         f64,
    longitude_scaling: LongitudeScaling,
}

impl Default for RouteGenerator {
    fn default() -> Self {
        Self {
            base_unit:         BASE_UNIT,
            longitude_scaling: LongitudeScaling::Uncorrected,
        }
    }
}

impl RouteGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the degrees-per-unit scale.  Non-positive or non-finite
    /// values keep [`BASE_UNIT`].
    pub fn with_base_unit(mut self, base_unit: f64) -> Self {
        self.base_unit = if base_unit.is_finite() && base_unit > 0.0 {
            base_unit
        } else {
            log::warn!("ignoring invalid base unit {base_unit}; using {BASE_UNIT}");
            BASE_UNIT
        };
        self
    }

    pub fn with_longitude_scaling(mut self, scaling: LongitudeScaling) -> Self {
        self.longitude_scaling = scaling;
        self
    }

    #[inline]
    pub fn base_unit(&self) -> f64 {
        self.base_unit
    }

    #[inline]
    pub fn longitude_scaling(&self) -> LongitudeScaling {
        self.longitude_scaling
    }

    /// Anchor and scale `template`.  One coordinate per vertex, in template
    /// order.
    pub fn generate(
        &self,
        template: &ShapeTemplate,
        anchor:   GeoCoordinate,
        goal:     DistanceGoal,
    ) -> Vec<GeoCoordinate> {
        let s = self.base_unit * goal.value();
        let s_lon = s * self.longitude_scaling.factor(anchor.lat);

        let coords: Vec<GeoCoordinate> = template
            .vertices()
            .iter()
            .map(|v| GeoCoordinate::new(anchor.lat + v.dx * s, anchor.lon + v.dy * s_lon))
            .collect();

        log::debug!(
            "generated {:?} at {anchor}: {} points, goal {goal}",
            template.name(),
            coords.len(),
        );
        coords
    }

    /// Like [`generate`](Self::generate) but packages the result with the
    /// inputs that produced it.
    pub fn route(
        &self,
        template: &ShapeTemplate,
        anchor:   GeoCoordinate,
        goal:     DistanceGoal,
    ) -> Route {
        Route {
            shape:       template.name().to_owned(),
            anchor,
            goal,
            coordinates: self.generate(template, anchor, goal),
        }
    }
}

/// Generate a built-in shape by name with the default generator.
///
/// `goal` accepts a raw `f64`; non-positive or NaN values are replaced by
/// 1.0.  Names outside the built-in set produce `[anchor]`.
pub fn generate(
    shape:  &str,
    anchor: GeoCoordinate,
    goal:   impl Into<DistanceGoal>,
) -> Vec<GeoCoordinate> {
    RouteGenerator::default().generate(&lookup_name(shape), anchor, goal.into())
}
