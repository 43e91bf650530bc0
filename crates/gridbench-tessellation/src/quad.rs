//! S2 adapter.

use s2::cellid::{CellID, MAX_LEVEL};
use s2::region::RegionCoverer;

use gridbench_core::{CellCovering, CellId, DiscretizeError, Discretizer, Polygon, SchemeKind, SweepParams};

use crate::convert::ensure_bounded;
use crate::region::LatLngRegion;

/// An S2 cell id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuadCell(u64);

impl QuadCell {
    pub(crate) fn cell_id(&self) -> CellID {
        CellID(self.0)
    }
}

impl From<CellID> for QuadCell {
    fn from(id: CellID) -> Self {
        Self(id.0)
    }
}

impl CellId for QuadCell {
    fn level(&self) -> u8 {
        // Levels never exceed 30.
        self.cell_id().level() as u8
    }

    /// Hexadecimal id with trailing zeros stripped, e.g. `89c25`.
    fn to_token(&self) -> String {
        if self.0 == 0 {
            return "X".to_string();
        }
        format!("{:016x}", self.0).trim_end_matches('0').to_string()
    }

    fn from_token(token: &str) -> Result<Self, DiscretizeError> {
        let invalid = || DiscretizeError::InvalidToken(token.to_string());
        if token.is_empty() || token.len() > 16 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let raw = u64::from_str_radix(token, 16).map_err(|_| invalid())? << (4 * (16 - token.len()));
        if !CellID(raw).is_valid() {
            return Err(invalid());
        }
        Ok(Self(raw))
    }
}

/// Parameters of one S2 covering.
///
/// The benchmark sweep pins `min_level == max_level` and reports that level
/// as the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadParams {
    pub min_level: u8,
    pub max_level: u8,
    /// Upper bound on the number of cells, unless `min_level` forces more.
    pub max_cells: usize,
    /// Only levels `min_level + k * level_mod` are emitted. 1 to 3.
    pub level_mod: u8,
}

impl QuadParams {
    /// Params pinned to a single level.
    pub fn at_level(level: u8, max_cells: usize, level_mod: u8) -> Self {
        Self {
            min_level: level,
            max_level: level,
            max_cells,
            level_mod,
        }
    }

    /// Checks the constraints accepted by [`QuadDiscretizer`].
    pub fn validate(&self) -> Result<(), DiscretizeError> {
        if u64::from(self.max_level) > MAX_LEVEL {
            return Err(DiscretizeError::InvalidResolution {
                resolution: self.max_level,
                reason: format!("S2 levels range from 0 to {MAX_LEVEL}"),
            });
        }
        if self.min_level > self.max_level {
            return Err(DiscretizeError::InvalidParams(format!(
                "min_level {} exceeds max_level {}",
                self.min_level, self.max_level
            )));
        }
        if !(1..=3).contains(&self.level_mod) {
            return Err(DiscretizeError::InvalidParams(format!(
                "level_mod must be 1, 2 or 3, got {}",
                self.level_mod
            )));
        }
        if self.max_cells == 0 {
            return Err(DiscretizeError::InvalidParams(
                "max_cells must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl SweepParams for QuadParams {
    fn resolution(&self) -> u8 {
        self.max_level
    }
}

/// Approximates polygons with S2 region coverings.
///
/// The covering is conservative: every cell intersecting the polygon
/// interior is covered, possibly with extra area at the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadDiscretizer;

impl QuadDiscretizer {
    pub fn new() -> Self {
        Self
    }
}

impl Discretizer for QuadDiscretizer {
    type Params = QuadParams;
    type Cell = QuadCell;

    fn scheme(&self) -> SchemeKind {
        SchemeKind::S2
    }

    fn discretize(
        &self,
        polygon: &Polygon,
        params: &QuadParams,
    ) -> Result<CellCovering<QuadCell>, DiscretizeError> {
        params.validate()?;
        ensure_bounded(polygon)?;

        let coverer = RegionCoverer {
            min_level: params.min_level,
            max_level: params.max_level,
            level_mod: params.level_mod,
            max_cells: params.max_cells,
        };
        let covering = coverer.covering(&LatLngRegion::new(polygon));
        Ok(covering.0.into_iter().map(QuadCell::from).collect())
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
