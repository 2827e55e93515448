//! The generated route record.

use rw_core::{DistanceGoal, GeoCoordinate};

/// A shape instantiated at a real-world anchor.
///
/// Routes are replaced wholesale on every generation, never patched.  The
/// anchor is a snapshot; later position updates do not move the route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Name of the template the route was generated from.
    pub shape: String,
    pub anchor: GeoCoordinate,
    pub goal: DistanceGoal,
    /// Walking order.  Never empty.
    pub coordinates: Vec<GeoCoordinate>,
}

impl Route {
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Where the walk begins.
    #[inline]
    pub fn start(&self) -> Option<GeoCoordinate> {
        self.coordinates.first().copied()
    }

    /// Great-circle length of the polyline in metres.
    pub fn length_m(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }

    /// `true` if the walk ends within `tolerance_m` metres of where it began.
    pub fn is_closed(&self, tolerance_m: f64) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(a), Some(b)) => a.distance_m(*b) <= tolerance_m,
            _ => false,
        }
    }

    /// Bounding box of all coordinates, or `None` for an empty route.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::of(&self.coordinates)
    }
}

/// Axis-aligned latitude/longitude box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub min: GeoCoordinate,
    pub max: GeoCoordinate,
}

impl GeoBounds {
    /// Smallest box containing every point, or `None` if `points` is empty.
    pub fn of(points: &[GeoCoordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            GeoBounds { min: *first, max: *first },
            |b, p| GeoBounds {
                min: GeoCoordinate::new(b.min.lat.min(p.lat), b.min.lon.min(p.lon)),
                max: GeoCoordinate::new(b.max.lat.max(p.lat), b.max.lon.max(p.lon)),
            },
        ))
    }

    pub fn center(&self) -> GeoCoordinate {
        GeoCoordinate::new(
            (self.min.lat + self.max.lat) * 0.5,
            (self.min.lon + self.max.lon) * 0.5,
        )
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max.lon - self.min.lon
    }

    pub fn contains(&self, p: GeoCoordinate) -> bool {
        (self.min.lat..=self.max.lat).contains(&p.lat)
            && (self.min.lon..=self.max.lon).contains(&p.lon)
    }
}
