//! Polygon fixtures.

use gridbench_core::{Point, Polygon, Ring};

/// Closed ring of an axis-aligned square with its south-west corner at
/// (`lat`, `lon`) and sides of `size` degrees.
pub fn square_ring(lat: f64, lon: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(lat, lon),
        Point::new(lat, lon + size),
        Point::new(lat + size, lon + size),
        Point::new(lat + size, lon),
        Point::new(lat, lon),
    ]
}

/// Square polygon without holes.
pub fn square(lat: f64, lon: f64, size: f64) -> Polygon {
    Polygon::simple(Ring::exterior(square_ring(lat, lon, size)).expect("non-empty ring"))
}

/// Square polygon with a centered square hole covering a quarter of it.
pub fn square_with_hole(lat: f64, lon: f64, size: f64) -> Polygon {
    let exterior = Ring::exterior(square_ring(lat, lon, size)).expect("non-empty ring");
    let mut hole_points = square_ring(lat + size / 4.0, lon + size / 4.0, size / 2.0);
    hole_points.reverse();
    let hole = Ring::hole(hole_points).expect("hole has five points");
    Polygon::new(exterior, vec![hole])
}

/// Polygon whose exterior is a single repeated point.
pub fn degenerate() -> Polygon {
    Polygon::simple(Ring::exterior(vec![Point::new(10.0, 10.0)]).expect("one point"))
}
