//! Ingestion errors and skip records.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion error. No further processing is meaningful after one.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {origin} as a GeoJSON FeatureCollection: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} is a GeoJSON {found:?}, expected \"FeatureCollection\"")]
    NotFeatureCollection { origin: String, found: String },
}

/// Why a feature was left out of the ingested collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Geometry missing or of another kind.
    NotPolygon { found: Option<String> },
    /// Polygon with an empty ring list.
    NoRings,
    /// Coordinates that are not rings of `[lon, lat]` positions.
    MalformedCoordinates(String),
    /// Exterior ring with no points.
    EmptyExterior,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotPolygon { found: Some(kind) } => {
                write!(f, "geometry type {kind:?} is not a Polygon")
            }
            SkipReason::NotPolygon { found: None } => f.write_str("feature has no geometry"),
            SkipReason::NoRings => f.write_str("polygon has no coordinates"),
            SkipReason::MalformedCoordinates(detail) => {
                write!(f, "malformed coordinates: {detail}")
            }
            SkipReason::EmptyExterior => f.write_str("exterior ring has no points"),
        }
    }
}

/// A feature excluded during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFeature {
    /// 0-based position in the input collection.
    pub index: usize,
    pub reason: SkipReason,
}
