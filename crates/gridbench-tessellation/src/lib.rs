//! Tessellation adapters for gridbench.
//!
//! Two implementations of [`gridbench_core::Discretizer`]:
//!
//! - [`HexDiscretizer`]: H3 hexagonal cells at a single resolution, computed
//!   by the `h3o` tiler.
//! - [`QuadDiscretizer`]: S2 quad-cell coverings from the `s2` region
//!   coverer, constrained by a level range, a level step and a cell budget.
//!
//! Both read the same [`gridbench_core::Polygon`] and subtract its holes.
//! Neither adapter logs or performs I/O.

mod convert;
mod hex;
mod quad;
mod region;

pub use hex::{HexCell, HexDiscretizer, HexParams};
pub use quad::{QuadCell, QuadDiscretizer, QuadParams};
