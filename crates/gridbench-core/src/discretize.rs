//! The tessellation capability shared by all adapters.

use std::fmt::Debug;

use crate::covering::{CellCovering, CellId};
use crate::error::DiscretizeError;
use crate::geometry::Polygon;
use crate::scheme::SchemeKind;

/// Parameters of one sweep step.
pub trait SweepParams: Copy + Debug {
    /// Returns the resolution this step is reported under.
    fn resolution(&self) -> u8;
}

/// Converts a polygon into a covering of grid cells.
///
/// Implementations must be pure: no logging, no I/O, no state shared between
/// calls. The benchmark runner times every call, so anything an adapter does
/// besides computing the covering ends up in the measurement.
pub trait Discretizer {
    /// Adapter parameters for one conversion.
    type Params: SweepParams;

    /// Cell identifier type produced by this scheme.
    type Cell: CellId;

    /// Returns which scheme this adapter implements.
    fn scheme(&self) -> SchemeKind;

    /// Computes the covering of `polygon`, holes excluded.
    fn discretize(
        &self,
        polygon: &Polygon,
        params: &Self::Params,
    ) -> Result<CellCovering<Self::Cell>, DiscretizeError>;
}

impl<D: Discretizer + ?Sized> Discretizer for &D {
    type Params = D::Params;
    type Cell = D::Cell;

    fn scheme(&self) -> SchemeKind {
        (**self).scheme()
    }

    fn discretize(
        &self,
        polygon: &Polygon,
        params: &Self::Params,
    ) -> Result<CellCovering<Self::Cell>, DiscretizeError> {
        (**self).discretize(polygon, params)
    }
}
