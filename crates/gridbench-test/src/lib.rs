//! Shared test fixtures for gridbench crates.
//!
//! - [`polygons`] - Polygon builders in the normalized geometry model
//! - [`geojson`] - GeoJSON documents exercising ingestion edge cases
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gridbench-test = { workspace = true }
//! ```

pub mod geojson;
pub mod polygons;

pub use polygons::{square, square_with_hole};
