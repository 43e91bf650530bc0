//! gridbench core - geometry model and tessellation traits
//!
//! This crate provides the scheme-agnostic types shared by every stage of
//! the benchmark pipeline:
//! - Geometry types for rings, polygons and feature collections
//! - The [`Discretizer`] capability implemented by tessellation adapters
//! - Cell coverings and the [`CellId`] contract for opaque cell identifiers
//! - Reference area tables for each tessellation scheme

pub mod covering;
pub mod discretize;
pub mod error;
pub mod geometry;
pub mod scheme;


pub use covering::{CellCovering, CellId};
pub use discretize::{Discretizer, SweepParams};
pub use error::{DiscretizeError, RingError};
pub use geometry::{Feature, FeatureCollection, Point, Polygon, Ring};
pub use scheme::SchemeKind;
