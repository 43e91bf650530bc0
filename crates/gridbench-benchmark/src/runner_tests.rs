//! Tests for the benchmark runner, driven by a fake adapter.

use std::cell::Cell;

use gridbench_core::{CellId, DiscretizeError, Polygon, SchemeKind};
use gridbench_test::polygons::{degenerate, square};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FakeCell {
    level: u8,
    n: usize,
}

impl CellId for FakeCell {
    fn level(&self) -> u8 {
        self.level
    }

    fn to_token(&self) -> String {
        format!("{}/{}", self.level, self.n)
    }

    fn from_token(token: &str) -> Result<Self, DiscretizeError> {
        let invalid = || DiscretizeError::InvalidToken(token.to_string());
        let (level, n) = token.split_once('/').ok_or_else(invalid)?;
        Ok(Self {
            level: level.parse().map_err(|_| invalid())?,
            n: n.parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Level(u8);

impl SweepParams for Level {
    fn resolution(&self) -> u8 {
        self.0
    }
}

/// One cell per exterior point; rejects exteriors shorter than four points.
#[derive(Default)]
struct PointCells {
    calls: Cell<usize>,
}

impl Discretizer for PointCells {
    type Params = Level;
    type Cell = FakeCell;

    fn scheme(&self) -> SchemeKind {
        SchemeKind::S2
    }

    fn discretize(
        &self,
        polygon: &Polygon,
        params: &Level,
    ) -> Result<CellCovering<FakeCell>, DiscretizeError> {
        self.calls.set(self.calls.get() + 1);
        let points = polygon.exterior().len();
        if points < 4 {
            return Err(DiscretizeError::DegenerateExterior { points });
        }
        Ok((0..points)
            .map(|n| FakeCell {
                level: params.0,
                n,
            })
            .collect())
    }
}

fn dataset() -> FeatureCollection {
    vec![
        Feature::new(11, square(0.0, 0.0, 1.0)),
        Feature::new(12, degenerate()),
        Feature::new(13, square(5.0, 5.0, 1.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_samples_follow_dataset_order() {
    let adapter = PointCells::default();
    let benchmark = Benchmark::new(BenchmarkConfig::new("test"), &adapter);

    let run = benchmark.run_resolution(&dataset(), &Level(3));

    let ids: Vec<i64> = run.samples.iter().map(|s| s.feature_id).collect();
    assert_eq!(ids, vec![11, 13]);
    assert_eq!(run.resolution, 3);
}

#[test]
fn test_failed_conversion_is_skipped_without_sample() {
    let adapter = PointCells::default();
    let benchmark = Benchmark::new(BenchmarkConfig::new("test"), &adapter);

    let run = benchmark.run_resolution(&dataset(), &Level(3));

    assert_eq!(run.samples.len(), 2);
    assert_eq!(
        run.skipped,
        vec![SkippedConversion {
            feature_id: 12,
            reason: DiscretizeError::DegenerateExterior { points: 1 },
        }]
    );
}

#[test]
fn test_level_histogram_sums_all_coverings() {
    let adapter = PointCells::default();
    let benchmark = Benchmark::new(BenchmarkConfig::new("test"), &adapter);

    let run = benchmark.run_resolution(&dataset(), &Level(4));

    // Two squares, five points each.
    assert_eq!(run.level_counts.get(&4), Some(&10));
    assert_eq!(run.total_cells(), 10);
    assert!(run.coverings.is_none());
    assert!(run.tokens().is_empty());
}

#[test]
fn test_coverings_retained_only_at_token_resolution() {
    let adapter = PointCells::default();
    let config = BenchmarkConfig::new("fixture").with_token_dump(2);
    let benchmark = Benchmark::new(config, &adapter);

    let result = benchmark.run(&dataset(), &[Level(1), Level(2), Level(3)]);

    assert_eq!(result.name, "fixture");
    assert_eq!(result.run_count(), 3);
    assert_eq!(result.scheme, SchemeKind::S2);
    assert!(result.run(1).unwrap().coverings.is_none());
    assert!(result.run(3).unwrap().coverings.is_none());

    let token_run = result.token_run().unwrap();
    assert_eq!(token_run.resolution, 2);
    assert_eq!(token_run.coverings.as_ref().unwrap().len(), 2);

    let tokens = token_run.tokens();
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[0], "2/0");
    assert!(tokens.iter().all(|t| FakeCell::from_token(t).is_ok()));
}

#[test]
fn test_warmup_passes_are_untimed() {
    let adapter = PointCells::default();
    let config = BenchmarkConfig::new("test").with_warmup_count(2);
    let benchmark = Benchmark::new(config, &adapter);

    let run = benchmark.run_resolution(&dataset(), &Level(0));

    assert_eq!(adapter.calls.get(), 9);
    assert_eq!(run.samples.len(), 2);
}

#[test]
fn test_progress_does_not_change_results() {
    let adapter = PointCells::default();
    let config = BenchmarkConfig::new("test").with_progress(true);
    let benchmark = Benchmark::new(config, &adapter);

    let result = benchmark.run(&dataset(), &[Level(5)]);

    assert_eq!(result.run(5).unwrap().samples.len(), 2);
    assert_eq!(result.skipped_count(), 1);
}

#[test]
fn test_empty_dataset() {
    let adapter = PointCells::default();
    let benchmark = Benchmark::new(BenchmarkConfig::default(), &adapter);

    let run = benchmark.run_resolution(&FeatureCollection::new(Vec::new()), &Level(1));

    assert!(run.samples.is_empty());
    assert_eq!(run.average_nanos(), 0.0);
}
