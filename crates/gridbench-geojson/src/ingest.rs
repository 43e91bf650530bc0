//! Feature Collection normalization.

use std::path::Path;

use gridbench_core::{Feature, FeatureCollection, Point, Polygon, Ring};
use tracing::warn;

use crate::error::{IngestError, SkipReason, SkippedFeature};
use crate::raw::{RawFeature, RawFeatureCollection};

/// Result of one ingestion pass.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Usable polygon features in input order.
    pub features: FeatureCollection,
    /// Features left out, in input order.
    pub skipped: Vec<SkippedFeature>,
    /// Number of hole rings dropped for having fewer than four points.
    pub dropped_holes: usize,
}

impl Ingested {
    /// Total number of features in the input document.
    pub fn input_count(&self) -> usize {
        self.features.len() + self.skipped.len()
    }
}

/// Reads and normalizes the Feature Collection at `path`.
pub fn read_feature_collection(path: impl AsRef<Path>) -> Result<Ingested, IngestError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feature_collection(&bytes, &path.display().to_string())
}

/// Normalizes an in-memory Feature Collection document.
///
/// `origin` names the document in error messages.
pub fn parse_feature_collection(bytes: &[u8], origin: &str) -> Result<Ingested, IngestError> {
    let raw: RawFeatureCollection =
        serde_json::from_slice(bytes).map_err(|source| IngestError::Decode {
            origin: origin.to_string(),
            source,
        })?;

    if raw.kind != "FeatureCollection" {
        return Err(IngestError::NotFeatureCollection {
            origin: origin.to_string(),
            found: raw.kind,
        });
    }

    let mut ingested = Ingested::default();
    let mut features = Vec::with_capacity(raw.features.len());

    for (index, raw_feature) in raw.features.into_iter().enumerate() {
        match normalize_feature(index, raw_feature, &mut ingested.dropped_holes) {
            Ok(feature) => features.push(feature),
            Err(reason) => {
                warn!(event = "feature_skipped", index, reason = %reason);
                ingested.skipped.push(SkippedFeature { index, reason });
            }
        }
    }

    ingested.features = FeatureCollection::new(features);
    Ok(ingested)
}

/// Converts a GeoJSON position into a [`Point`].
///
/// GeoJSON orders positions `[longitude, latitude, altitude?]`; the model
/// stores latitude first. Members past the second are ignored.
///
/// # Example
///
/// ```
/// use gridbench_geojson::point_from_position;
///
/// let p = point_from_position(&[-122.4, 37.8]).unwrap();
/// assert_eq!(p.lat, 37.8);
/// assert_eq!(p.lon, -122.4);
/// assert!(point_from_position(&[1.0]).is_none());
/// ```
pub fn point_from_position(position: &[f64]) -> Option<Point> {
    match position {
        [lon, lat, ..] => Some(Point::new(*lat, *lon)),
        _ => None,
    }
}

fn normalize_feature(
    index: usize,
    raw: RawFeature,
    dropped_holes: &mut usize,
) -> Result<Feature, SkipReason> {
    let geometry = raw
        .geometry
        .ok_or(SkipReason::NotPolygon { found: None })?;
    if geometry.kind != "Polygon" {
        return Err(SkipReason::NotPolygon {
            found: Some(geometry.kind),
        });
    }

    let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(geometry.coordinates)
        .map_err(|e| SkipReason::MalformedCoordinates(e.to_string()))?;
    let mut rings = rings.into_iter();

    let exterior = rings.next().ok_or(SkipReason::NoRings)?;
    let exterior = Ring::exterior(ring_points(&exterior)?).map_err(|_| SkipReason::EmptyExterior)?;

    let mut holes = Vec::new();
    for (hole_index, positions) in rings.enumerate() {
        match Ring::hole(ring_points(&positions)?) {
            Ok(hole) => holes.push(hole),
            Err(e) => {
                warn!(
                    event = "hole_dropped",
                    index,
                    hole = hole_index,
                    reason = %e,
                );
                *dropped_holes += 1;
            }
        }
    }

    let polygon = Polygon::new(exterior, holes);
    if polygon.has_lenient_exterior() {
        warn!(
            event = "lenient_exterior",
            index,
            points = polygon.exterior().len(),
            closed = polygon.exterior().is_closed(),
        );
    }

    let id = raw
        .properties
        .and_then(|p| p.id)
        .unwrap_or(index as i64 + 1);

    Ok(Feature::new(id, polygon))
}

fn ring_points(positions: &[Vec<f64>]) -> Result<Vec<Point>, SkipReason> {
    positions
        .iter()
        .enumerate()
        .map(|(i, position)| {
            point_from_position(position).ok_or_else(|| {
                SkipReason::MalformedCoordinates(format!(
                    "position {i} has {} members, expected at least 2",
                    position.len()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
