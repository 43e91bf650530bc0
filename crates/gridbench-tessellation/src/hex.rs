//! H3 adapter.

use h3o::geom::{ContainmentMode, TilerBuilder};
use h3o::{CellIndex, Resolution};

use gridbench_core::{CellCovering, CellId, DiscretizeError, Discretizer, Polygon, SchemeKind, SweepParams};

use crate::convert::{ensure_bounded, to_geo_polygon};

/// An H3 cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCell(CellIndex);

impl HexCell {
    /// Returns the underlying `h3o` index.
    pub fn index(&self) -> CellIndex {
        self.0
    }
}

impl From<CellIndex> for HexCell {
    fn from(index: CellIndex) -> Self {
        Self(index)
    }
}

impl CellId for HexCell {
    fn level(&self) -> u8 {
        u8::from(self.0.resolution())
    }

    /// Lowercase hexadecimal index, e.g. `85283473fffffff`.
    fn to_token(&self) -> String {
        self.0.to_string()
    }

    fn from_token(token: &str) -> Result<Self, DiscretizeError> {
        token
            .parse::<CellIndex>()
            .map(Self)
            .map_err(|_| DiscretizeError::InvalidToken(token.to_string()))
    }
}

/// Parameters of one H3 conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexParams {
    /// Resolution, 0 (coarsest) to 15 (finest).
    pub resolution: u8,
}

impl HexParams {
    pub fn new(resolution: u8) -> Self {
        Self { resolution }
    }
}

impl SweepParams for HexParams {
    fn resolution(&self) -> u8 {
        self.resolution
    }
}

/// Fills polygons with H3 cells.
///
/// A cell belongs to the covering when its centroid lies inside the polygon,
/// which is the semantics of H3 polygon-to-cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexDiscretizer;

impl HexDiscretizer {
    pub fn new() -> Self {
        Self
    }
}

impl Discretizer for HexDiscretizer {
    type Params = HexParams;
    type Cell = HexCell;

    fn scheme(&self) -> SchemeKind {
        SchemeKind::H3
    }

    fn discretize(
        &self,
        polygon: &Polygon,
        params: &HexParams,
    ) -> Result<CellCovering<HexCell>, DiscretizeError> {
        let resolution = Resolution::try_from(params.resolution).map_err(|e| {
            DiscretizeError::InvalidResolution {
                resolution: params.resolution,
                reason: e.to_string(),
            }
        })?;
        ensure_bounded(polygon)?;

        let mut tiler = TilerBuilder::new(resolution)
            .containment_mode(ContainmentMode::ContainsCentroid)
            .build();
        tiler
            .add(to_geo_polygon(polygon))
            .map_err(|e| DiscretizeError::Geometry(e.to_string()))?;

        Ok(tiler.into_coverage().map(HexCell).collect())
    }
}

#[cfg(test)]
#[path = "hex_tests.rs"]
mod tests;
