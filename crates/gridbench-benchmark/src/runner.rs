//! Benchmark runner.

use std::hint::black_box;
use std::time::Instant;

use gridbench_core::{CellCovering, Discretizer, Feature, FeatureCollection, SweepParams};
use tracing::{debug, info, warn};

use crate::config::BenchmarkConfig;
use crate::result::{DurationSample, ResolutionRun, SkippedConversion, SweepResult};

/// Number of tokens shown in a progress event.
const PROGRESS_TOKENS: usize = 3;

/// Times one tessellation adapter over a dataset.
///
/// Converts every feature once per params value and times only the adapter
/// call. The runner is generic over the adapter, so each scheme gets its own
/// monomorphized loop with its own cell type.
///
/// # Type Parameters
///
/// * `D` - The tessellation adapter
pub struct Benchmark<D: Discretizer> {
    config: BenchmarkConfig,
    discretizer: D,
}

impl<D: Discretizer> Benchmark<D> {
    /// Creates a new benchmark.
    pub fn new(config: BenchmarkConfig, discretizer: D) -> Self {
        Self {
            config,
            discretizer,
        }
    }

    /// Runs every params value of `sweep` in order.
    pub fn run(&self, features: &FeatureCollection, sweep: &[D::Params]) -> SweepResult<D::Cell> {
        let scheme = self.discretizer.scheme();
        info!(
            event = "sweep_start",
            scheme = %scheme,
            name = self.config.name(),
            resolutions = sweep.len(),
            features = features.len(),
        );

        let started = Instant::now();
        let mut result = SweepResult::new(self.config.name(), scheme);
        for params in sweep {
            result.add_run(self.run_resolution(features, params));
        }

        info!(
            event = "sweep_end",
            scheme = %scheme,
            name = %result.name,
            resolutions = result.run_count(),
            skipped = result.skipped_count(),
            duration_ms = started.elapsed().as_millis() as u64,
        );
        result
    }

    /// Runs one params value over the dataset.
    ///
    /// Warmup passes come first and are not measured. A failed conversion is
    /// logged and recorded as skipped; it contributes no sample.
    pub fn run_resolution(
        &self,
        features: &FeatureCollection,
        params: &D::Params,
    ) -> ResolutionRun<D::Cell> {
        let scheme = self.discretizer.scheme();
        let resolution = params.resolution();

        for _ in 0..self.config.warmup_count() {
            for feature in features {
                let _ = black_box(self.discretizer.discretize(&feature.polygon, params));
            }
        }

        let keep = self.config.token_dump_resolution() == Some(resolution);
        let mut run = ResolutionRun::new(resolution, keep);

        for feature in features {
            let started = Instant::now();
            let outcome = self.discretizer.discretize(&feature.polygon, params);
            let elapsed = started.elapsed();

            match outcome {
                Ok(covering) => {
                    if self.config.print_progress() {
                        self.report_progress(feature, resolution, &covering);
                    }
                    run.record(DurationSample::new(feature.id, elapsed), covering);
                }
                Err(reason) => {
                    warn!(
                        event = "conversion_failed",
                        scheme = %scheme,
                        resolution,
                        feature = feature.id,
                        reason = %reason,
                    );
                    run.skip(SkippedConversion {
                        feature_id: feature.id,
                        reason,
                    });
                }
            }
        }

        debug!(
            event = "level_histogram",
            scheme = %scheme,
            resolution,
            levels = ?run.level_counts,
        );
        info!(
            event = "resolution_complete",
            scheme = %scheme,
            resolution,
            samples = run.samples.len(),
            skipped = run.skipped.len(),
            cells = run.total_cells(),
            avg_ns = run.average_nanos(),
        );
        run
    }

    fn report_progress(&self, feature: &Feature, resolution: u8, covering: &CellCovering<D::Cell>) {
        info!(
            event = "progress",
            scheme = %self.discretizer.scheme(),
            resolution,
            feature = feature.id,
            cells = covering.len(),
            tokens = ?covering.sample_tokens(PROGRESS_TOKENS),
            levels = ?covering.level_counts(),
        );
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
