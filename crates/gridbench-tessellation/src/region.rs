//! Polygon regions for the S2 region coverer.

use geo::{BoundingRect, Contains, Intersects};
use geo_types::{coord, Rect};
use s2::cap::Cap;
use s2::cell::Cell;
use s2::rect::Rect as LatLngRect;
use s2::region::Region;

use gridbench_core::Polygon;

use crate::convert::to_geo_polygon;

/// A polygon in planar longitude/latitude degrees, holes included.
///
/// Cells are first tested exactly against the polygon's latitude/longitude
/// extent, then the polygon itself is tested against the cell's bounding
/// rectangle. An axis-aligned rectangle without holes therefore behaves
/// exactly like the equivalent [`s2::rect::Rect`].
pub(crate) struct LatLngRegion {
    polygon: geo_types::Polygon<f64>,
    bound: LatLngRect,
}

impl LatLngRegion {
    pub(crate) fn new(polygon: &Polygon) -> Self {
        let polygon = to_geo_polygon(polygon);
        let bound = match polygon.bounding_rect() {
            Some(extent) => LatLngRect::from_degrees(
                extent.min().y,
                extent.min().x,
                extent.max().y,
                extent.max().x,
            ),
            None => LatLngRect::empty(),
        };
        Self { polygon, bound }
    }
}

impl Region for LatLngRegion {
    fn cap_bound(&self) -> Cap {
        self.bound.cap_bound()
    }

    fn rect_bound(&self) -> LatLngRect {
        self.bound.clone()
    }

    fn contains_cell(&self, cell: &Cell) -> bool {
        match cell_rects(cell).as_slice() {
            [rect] => self.polygon.contains(&rect.to_polygon()),
            _ => false,
        }
    }

    fn intersects_cell(&self, cell: &Cell) -> bool {
        self.bound.intersects_cell(cell)
            && cell_rects(cell)
                .iter()
                .any(|rect| self.polygon.intersects(rect))
    }
}

/// Bounding rectangle of a cell in lon/lat degrees.
///
/// Cells straddling the antimeridian split into an eastern and a western
/// rectangle.
fn cell_rects(cell: &Cell) -> Vec<Rect<f64>> {
    let bound = cell.rect_bound();
    let lat_lo = bound.lat.lo.to_degrees().max(-90.0);
    let lat_hi = bound.lat.hi.to_degrees().min(90.0);
    let lng_lo = bound.lng.lo.to_degrees();
    let lng_hi = bound.lng.hi.to_degrees();

    if bound.lng.is_inverted() {
        vec![
            lat_rect(lng_lo, 180.0, lat_lo, lat_hi),
            lat_rect(-180.0, lng_hi, lat_lo, lat_hi),
        ]
    } else {
        vec![lat_rect(lng_lo, lng_hi, lat_lo, lat_hi)]
    }
}

fn lat_rect(lng_lo: f64, lng_hi: f64, lat_lo: f64, lat_hi: f64) -> Rect<f64> {
    Rect::new(coord! { x: lng_lo, y: lat_lo }, coord! { x: lng_hi, y: lat_hi })
}
