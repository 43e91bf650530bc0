//! GeoJSON ingestion for gridbench.
//!
//! Reads a Feature Collection document and normalizes its polygon features
//! into the [`gridbench_core`] geometry model. One ingestion pass feeds every
//! tessellation scheme.
//!
//! # Policy
//!
//! - A document that does not decode as a Feature Collection is fatal.
//! - Features that are not polygons, have no rings, or carry malformed
//!   coordinates are skipped with a warning.
//! - Holes with fewer than four points are dropped with a warning.
//! - Exterior rings only need one point; short or open exteriors are kept
//!   and flagged with a warning.
//!
//! # Example
//!
//! ```
//! use gridbench_geojson::parse_feature_collection;
//!
//! let doc = br#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "geometry": {
//!             "type": "Polygon",
//!             "coordinates": [[[-122.4, 37.8], [-122.3, 37.8], [-122.3, 37.9], [-122.4, 37.8]]]
//!         }
//!     }]
//! }"#;
//!
//! let ingested = parse_feature_collection(doc, "inline").unwrap();
//! let feature = &ingested.features.features()[0];
//! assert_eq!(feature.id, 1);
//! assert_eq!(feature.polygon.exterior().points()[0].lat, 37.8);
//! ```

mod error;
mod ingest;
mod raw;

pub use error::{IngestError, SkipReason, SkippedFeature};
pub use ingest::{parse_feature_collection, point_from_position, read_feature_collection, Ingested};
pub use raw::FeatureProperties;
