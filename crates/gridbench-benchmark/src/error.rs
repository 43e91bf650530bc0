//! Error types for aggregation and export.

use std::io;
use std::path::PathBuf;

use gridbench_core::SchemeKind;
use thiserror::Error;

/// Aggregation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// The sweep contains a resolution the scheme's area table lacks.
    #[error("no reference cell area for {scheme} resolution {resolution}")]
    AreaNotTabulated { scheme: SchemeKind, resolution: u8 },
}

/// Writing result artifacts failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// One artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Some artifacts of a sweep could not be written; the rest were.
    #[error("{} of {attempted} artifacts could not be written", failures.len())]
    Incomplete {
        attempted: usize,
        failures: Vec<ExportError>,
    },
}
