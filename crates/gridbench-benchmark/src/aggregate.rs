//! Per-resolution aggregation.

use gridbench_core::{CellId, SchemeKind};

use crate::error::AggregateError;
use crate::result::ResolutionRun;

/// One row of the summary table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub resolution: u8,
    /// Reference average cell area in km², from the scheme's static table.
    pub avg_area_km2: f64,
    /// Mean conversion time in nanoseconds.
    pub average_duration_ns: f64,
}

/// Arithmetic mean of `durations`, or `0.0` when empty.
///
/// # Example
///
/// ```
/// use gridbench_benchmark::average_nanos;
///
/// assert_eq!(average_nanos(&[100, 200, 300]), 200.0);
/// assert_eq!(average_nanos(&[]), 0.0);
/// ```
pub fn average_nanos(durations: &[u64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    let total: u128 = durations.iter().map(|&d| u128::from(d)).sum();
    total as f64 / durations.len() as f64
}

/// Pairs every run with the scheme's reference cell area.
///
/// The output is sorted by resolution. A resolution missing from the table
/// is an error; areas are never interpolated.
pub fn aggregate<C: CellId>(
    scheme: SchemeKind,
    runs: &[ResolutionRun<C>],
) -> Result<Vec<Measurement>, AggregateError> {
    let mut measurements = runs
        .iter()
        .map(|run| -> Result<Measurement, AggregateError> {
            let avg_area_km2 = scheme.average_area_km2(run.resolution).ok_or(
                AggregateError::AreaNotTabulated {
                    scheme,
                    resolution: run.resolution,
                },
            )?;
            Ok(Measurement {
                resolution: run.resolution,
                avg_area_km2,
                average_duration_ns: run.average_nanos(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    measurements.sort_by_key(|m| m.resolution);
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::DurationSample;
    use gridbench_core::{CellCovering, DiscretizeError};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Cell;

    impl CellId for Cell {
        fn level(&self) -> u8 {
            0
        }

        fn to_token(&self) -> String {
            "c".to_string()
        }

        fn from_token(_token: &str) -> Result<Self, DiscretizeError> {
            Ok(Cell)
        }
    }

    fn run(resolution: u8, nanos: &[u64]) -> ResolutionRun<Cell> {
        let mut run = ResolutionRun::new(resolution, false);
        for (i, &n) in nanos.iter().enumerate() {
            run.record(
                DurationSample {
                    feature_id: i as i64 + 1,
                    nanos: n,
                },
                CellCovering::new(),
            );
        }
        run
    }

    #[test]
    fn test_average_nanos() {
        assert_eq!(average_nanos(&[100, 200, 300]), 200.0);
        assert_eq!(average_nanos(&[]), 0.0);
        assert_eq!(average_nanos(&[1, 2]), 1.5);
    }

    #[test]
    fn test_average_does_not_overflow() {
        assert_eq!(average_nanos(&[u64::MAX, u64::MAX]), u64::MAX as f64);
    }

    #[test]
    fn test_aggregate_sorts_and_joins_area() {
        let runs = vec![run(2, &[10, 30]), run(0, &[5])];
        let measurements = aggregate(SchemeKind::H3, &runs).unwrap();

        assert_eq!(measurements.len(), 2);
        assert_eq!(measurements[0].resolution, 0);
        assert_eq!(measurements[0].average_duration_ns, 5.0);
        assert_eq!(
            Some(measurements[0].avg_area_km2),
            SchemeKind::H3.average_area_km2(0)
        );
        assert_eq!(measurements[1].resolution, 2);
        assert_eq!(measurements[1].average_duration_ns, 20.0);
    }

    #[test]
    fn test_empty_run_averages_zero() {
        let measurements = aggregate(SchemeKind::S2, &[run(4, &[])]).unwrap();
        assert_eq!(measurements[0].average_duration_ns, 0.0);
    }

    #[test]
    fn test_untabulated_resolution() {
        let err = aggregate(SchemeKind::S2, &[run(20, &[1])]).unwrap_err();
        assert_eq!(
            err,
            AggregateError::AreaNotTabulated {
                scheme: SchemeKind::S2,
                resolution: 20
            }
        );
    }
}
