//! Normalized geometry model.
//!
//! Every tessellation adapter reads the same immutable types: a [`Polygon`]
//! is an exterior [`Ring`] plus zero or more hole rings, and a [`Feature`]
//! pairs a polygon with its identifier.

use crate::error::RingError;

/// Minimum point count for a hole ring: three distinct vertices plus the
/// closing duplicate.
pub const MIN_HOLE_POINTS: usize = 4;

/// A position on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Point {
    /// Creates a point from latitude and longitude, in that order.
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_core::Point;
    ///
    /// let p = Point::new(37.8, -122.4);
    /// assert_eq!(p.lat, 37.8);
    /// assert_eq!(p.lon, -122.4);
    /// ```
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An ordered closed loop of points.
///
/// By GeoJSON convention the first and last points are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Builds an exterior ring.
    ///
    /// Only emptiness is rejected. Closure and vertex count are left to the
    /// adapters, which report degenerate exteriors per conversion.
    pub fn exterior(points: Vec<Point>) -> Result<Self, RingError> {
        if points.is_empty() {
            return Err(RingError::EmptyExterior);
        }
        Ok(Self { points })
    }

    /// Builds a hole ring, requiring at least [`MIN_HOLE_POINTS`] points.
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_core::{Point, Ring, RingError};
    ///
    /// let short = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 0.0)];
    /// assert_eq!(
    ///     Ring::hole(short),
    ///     Err(RingError::HoleTooShort { points: 3, min: 4 })
    /// );
    /// ```
    pub fn hole(points: Vec<Point>) -> Result<Self, RingError> {
        if points.len() < MIN_HOLE_POINTS {
            return Err(RingError::HoleTooShort {
                points: points.len(),
                min: MIN_HOLE_POINTS,
            });
        }
        Ok(Self { points })
    }

    /// Returns the points in ring order, closing duplicate included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the first and last points coincide.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Returns the number of vertices, not counting a closing duplicate.
    pub fn vertex_count(&self) -> usize {
        if self.is_closed() {
            self.points.len() - 1
        } else {
            self.points.len()
        }
    }

    /// Returns the points without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        &self.points[..self.vertex_count()]
    }
}

/// An exterior ring plus zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from an exterior ring and its holes.
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Creates a polygon without holes.
    pub fn simple(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }

    /// Returns the exterior ring.
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// Returns the hole rings.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Returns true if the exterior has fewer than three distinct vertices
    /// or is not closed.
    pub fn has_lenient_exterior(&self) -> bool {
        !self.exterior.is_closed() || self.exterior.vertex_count() < 3
    }
}

/// A polygon with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Identifier from `properties.id`, or the 1-based input position.
    pub id: i64,
    /// The normalized geometry.
    pub polygon: Polygon,
}

impl Feature {
    /// Creates a feature.
    pub fn new(id: i64, polygon: Polygon) -> Self {
        Self { id, polygon }
    }
}

/// Ordered features loaded from one input document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from features in input order.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Returns the features in input order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Returns the number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if there are no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates over the features in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
