//! Conversion from the normalized model to `geo-types`.

use geo_types::{Coord, LineString};
use gridbench_core::geometry::MIN_HOLE_POINTS;
use gridbench_core::{DiscretizeError, Polygon, Ring};

/// Builds a planar polygon with `x = longitude`, `y = latitude`, in degrees.
pub(crate) fn to_geo_polygon(polygon: &Polygon) -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(
        to_line_string(polygon.exterior()),
        polygon.holes().iter().map(to_line_string).collect(),
    )
}

fn to_line_string(ring: &Ring) -> LineString<f64> {
    ring.points()
        .iter()
        .map(|p| Coord { x: p.lon, y: p.lat })
        .collect()
}

/// Rejects exteriors that cannot bound a region.
///
/// Ingestion accepts any non-empty exterior; adapters hold exteriors to the
/// same four-point minimum as holes.
pub(crate) fn ensure_bounded(polygon: &Polygon) -> Result<(), DiscretizeError> {
    let points = polygon.exterior().len();
    if points < MIN_HOLE_POINTS {
        return Err(DiscretizeError::DegenerateExterior { points });
    }
    Ok(())
}
