//! Template value types.

use std::borrow::Cow;

/// A unitless planar offset from a template's local origin.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedOffset {
    /// Northward component (applied to latitude).
    pub dx: f64,
    /// Eastward component (applied to longitude).
    pub dy: f64,
}

impl NormalizedOffset {
    pub const ORIGIN: NormalizedOffset = NormalizedOffset { dx: 0.0, dy: 0.0 };

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean distance to `other` in offset units.
    #[inline]
    pub fn distance_to(self, other: NormalizedOffset) -> f64 {
        (other.dx - self.dx).hypot(other.dy - self.dy)
    }
}

/// Axis-aligned extent of a template in offset units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetBounds {
    pub min: NormalizedOffset,
    pub max: NormalizedOffset,
}

impl OffsetBounds {
    pub fn width(&self) -> f64 {
        self.max.dy - self.min.dy
    }

    pub fn height(&self) -> f64 {
        self.max.dx - self.min.dx
    }
}

/// A named silhouette: an ordered, non-empty list of offsets.
///
/// Built-in templates borrow their `'static` tables; templates loaded at
/// runtime own their data.  Either way the vertex list is immutable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TemplateRecord"))]
pub struct ShapeTemplate {
    name:     Cow<'static, str>,
    vertices: Cow<'static, [NormalizedOffset]>,
}

/// Deserialized form; goes through [`ShapeTemplate::new`] so an empty vertex
/// list still becomes the origin.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TemplateRecord {
    name:     String,
    vertices: Vec<NormalizedOffset>,
}

#[cfg(feature = "serde")]
impl From<TemplateRecord> for ShapeTemplate {
    fn from(record: TemplateRecord) -> Self {
        ShapeTemplate::new(record.name, record.vertices)
    }
}

/// Backing data for [`ShapeTemplate::origin_only`].
static ORIGIN_ONLY: [NormalizedOffset; 1] = [NormalizedOffset::ORIGIN];

impl ShapeTemplate {
    /// Wrap a `'static` offset table.  An empty table is replaced by the
    /// single origin vertex.
    pub fn from_static(name: &'static str, vertices: &'static [NormalizedOffset]) -> Self {
        let vertices = if vertices.is_empty() { &ORIGIN_ONLY[..] } else { vertices };
        Self {
            name:     Cow::Borrowed(name),
            vertices: Cow::Borrowed(vertices),
        }
    }

    /// Build an owned template.  An empty vertex list is replaced by the
    /// single origin vertex.
    pub fn new(name: impl Into<String>, vertices: Vec<NormalizedOffset>) -> Self {
        let vertices = if vertices.is_empty() {
            Cow::Borrowed(&ORIGIN_ONLY[..])
        } else {
            Cow::Owned(vertices)
        };
        Self { name: Cow::Owned(name.into()), vertices }
    }

    /// The degenerate template `[(0, 0)]`, used for names nobody knows.
    pub fn origin_only(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn vertices(&self) -> &[NormalizedOffset] {
        &self.vertices
    }

    /// Number of vertices; always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` for the single-vertex template.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() == 1
    }

    /// `true` if the last vertex lies within `tolerance` of the first.
    ///
    /// Closure is an authoring convention, not an invariant; check it per
    /// template.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first.distance_to(*last) <= tolerance,
            _ => false,
        }
    }

    /// Polyline length in offset units, summed in walking order.
    pub fn perimeter_units(&self) -> f64 {
        self.vertices
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    /// Axis-aligned extent of all vertices.
    pub fn bounds(&self) -> OffsetBounds {
        let first = self.vertices.first().copied().unwrap_or(NormalizedOffset::ORIGIN);
        self.vertices.iter().skip(1).fold(
            OffsetBounds { min: first, max: first },
            |b, v| OffsetBounds {
                min: NormalizedOffset::new(b.min.dx.min(v.dx), b.min.dy.min(v.dy)),
                max: NormalizedOffset::new(b.max.dx.max(v.dx), b.max.dy.max(v.dy)),
            },
        )
    }
}
