//! Map region handed to the renderer.

use rw_core::GeoCoordinate;

use crate::route::GeoBounds;

/// Span used when nothing else determines the zoom, in degrees.
pub const DEFAULT_SPAN_DEG: f64 = 0.01;

/// A map region: center plus latitude/longitude extent in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub center:    GeoCoordinate,
    pub lat_delta: f64,
    pub lon_delta: f64,
}

impl Viewport {
    /// Square region of `span_deg` around `center`.
    pub fn around(center: GeoCoordinate, span_deg: f64) -> Self {
        Self { center, lat_delta: span_deg, lon_delta: span_deg }
    }

    /// Region covering every point, grown by `padding` (a fraction of the
    /// extent, split evenly between both sides) and never smaller than
    /// `min_span_deg` on either axis.  `None` if `points` is empty.
    pub fn fit(points: &[GeoCoordinate], padding: f64, min_span_deg: f64) -> Option<Self> {
        let bounds = GeoBounds::of(points)?;
        let grow = 1.0 + padding.max(0.0);
        Some(Self {
            center:    bounds.center(),
            lat_delta: (bounds.lat_span() * grow).max(min_span_deg),
            lon_delta: (bounds.lon_span() * grow).max(min_span_deg),
        })
    }

    /// `true` if `p` is inside the region.
    pub fn contains(&self, p: GeoCoordinate) -> bool {
        (p.lat - self.center.lat).abs() <= self.lat_delta * 0.5
            && (p.lon - self.center.lon).abs() <= self.lon_delta * 0.5
    }

    /// Same span, new center.
    pub fn recentered(self, center: GeoCoordinate) -> Self {
        Self { center, ..self }
    }
}
