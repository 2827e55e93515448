//! Geographic coordinate type and spatial utilities.
//!
//! `GeoCoordinate` uses `f64` latitude/longitude.  Route offsets are as small
//! as a few metres, so single precision would visibly quantise the shapes.

use crate::{RwError, RwResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate, rejecting values outside `[-90,90] × [-180,180]`
    /// or non-finite components.
    pub fn checked(lat: f64, lon: f64) -> RwResult<Self> {
        let c = Self { lat, lon };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(RwError::InvalidCoordinate { lat, lon })
        }
    }

    /// `true` if both components are finite and within WGS-84 bounds.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoCoordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Approximate bounding-box check, much cheaper than `distance_m`.
    #[inline]
    pub fn within_bbox(self, center: GeoCoordinate, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
