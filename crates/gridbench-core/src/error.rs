//! Error types for gridbench core

use thiserror::Error;

/// Error building a ring from a coordinate list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// An exterior ring needs at least one point.
    #[error("exterior ring has no points")]
    EmptyExterior,

    /// A hole needs three distinct vertices plus the closing duplicate.
    #[error("hole has {points} points, at least {min} required")]
    HoleTooShort { points: usize, min: usize },
}

/// Error converting one polygon into a cell covering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscretizeError {
    /// The requested resolution or level is outside the scheme's range.
    #[error("invalid resolution {resolution}: {reason}")]
    InvalidResolution { resolution: u8, reason: String },

    /// The adapter parameters are inconsistent with each other.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The exterior ring cannot bound a region.
    #[error("degenerate exterior ring with {points} points")]
    DegenerateExterior { points: usize },

    /// The underlying grid library rejected the geometry.
    #[error("geometry rejected: {0}")]
    Geometry(String),

    /// A token does not decode to a valid cell identifier.
    #[error("invalid cell token {0:?}")]
    InvalidToken(String),
}
