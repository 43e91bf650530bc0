//! GeoJSON fixture documents.

/// One square around San Francisco with an explicit id.
pub const SINGLE_SQUARE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-122.5, 37.7], [-122.3, 37.7], [-122.3, 37.9], [-122.5, 37.9], [-122.5, 37.7]]]
      },
      "properties": { "id": 7 }
    }
  ]
}"#;

/// Polygons mixed with non-polygon features, a short hole, a feature with
/// no rings, and features without ids.
///
/// Index 0: polygon, id 10, one valid hole and one 3-point hole.
/// Index 1: point geometry.
/// Index 2: polygon without properties.
/// Index 3: polygon with empty coordinates.
/// Index 4: polygon with a string id.
pub const MIXED_COLLECTION: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [
          [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
          [[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0], [1.0, 1.0]],
          [[3.0, 3.0], [3.5, 3.5], [3.0, 3.0]]
        ]
      },
      "properties": { "id": 10 }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
      "properties": { "id": 11 }
    },
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 11.0], [10.0, 10.0]]]
      }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Polygon", "coordinates": [] },
      "properties": {}
    },
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[20.0, 20.0], [21.0, 20.0], [21.0, 21.0], [20.0, 21.0], [20.0, 20.0]]]
      },
      "properties": { "id": "not-a-number" }
    }
  ]
}"#;

/// One-degree square east of San Francisco, large enough to hold dozens of
/// H3 cells at resolution 5.
pub const DEGREE_SQUARE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-122.0, 37.0], [-121.0, 37.0], [-121.0, 38.0], [-122.0, 38.0], [-122.0, 37.0]]]
      },
      "properties": { "id": 1 }
    }
  ]
}"#;
