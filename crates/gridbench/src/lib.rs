//! gridbench - H3 versus S2 polygon covering benchmark.
//!
//! [`run`] executes the whole pipeline for one [`RunConfig`]:
//!
//! 1. Validate the configuration.
//! 2. Ingest the GeoJSON Feature Collection once.
//! 3. For each enabled scheme, sweep its resolutions, timing every
//!    (polygon, resolution) conversion.
//! 4. Aggregate per-resolution means against the reference area tables.
//! 5. Write the duration series, summaries, level histograms and token dump.
//!
//! # Example
//!
//! ```no_run
//! use gridbench::{run, RunConfig};
//!
//! let config = RunConfig::default()
//!     .with_input("data/mock_polygons.geojson")
//!     .with_output_dir("output");
//! let summary = run(&config).unwrap();
//! println!("{} artifacts", summary.artifacts.len());
//! ```

use std::path::PathBuf;
use std::time::Instant;

use gridbench_benchmark::{
    aggregate, AggregateError, Benchmark, BenchmarkConfig, ExportError, Measurement, ReportWriter,
};
use gridbench_config::ConfigError;
use gridbench_core::{Discretizer, FeatureCollection, SchemeKind};
use gridbench_geojson::{read_feature_collection, IngestError};
use gridbench_tessellation::{HexDiscretizer, HexParams, QuadDiscretizer, QuadParams};
use thiserror::Error;
use tracing::info;

pub use gridbench_config::RunConfig;

/// A fatal pipeline error.
#[derive(Debug, Error)]
pub enum GridBenchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// What a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Features benchmarked.
    pub features: usize,
    /// Input features skipped during ingestion.
    pub skipped_features: usize,
    /// Conversions an adapter rejected, over all schemes.
    pub failed_conversions: usize,
    /// Summary rows per scheme, in run order.
    pub measurements: Vec<(SchemeKind, Vec<Measurement>)>,
    /// Every artifact written.
    pub artifacts: Vec<PathBuf>,
}

impl RunSummary {
    /// Returns the summary rows of `scheme`, if it ran.
    pub fn measurements_for(&self, scheme: SchemeKind) -> Option<&[Measurement]> {
        self.measurements
            .iter()
            .find(|(s, _)| *s == scheme)
            .map(|(_, m)| m.as_slice())
    }
}

/// Runs the benchmark described by `config`.
///
/// Artifact failures do not stop the run: every artifact of every scheme is
/// attempted and the failures are returned together at the end.
pub fn run(config: &RunConfig) -> Result<RunSummary, GridBenchError> {
    config.validate()?;
    let started = Instant::now();

    let ingested = read_feature_collection(&config.input)?;
    info!(
        event = "ingest_complete",
        path = %config.input.display(),
        features = ingested.features.len(),
        skipped = ingested.skipped.len(),
        dropped_holes = ingested.dropped_holes,
    );

    let writer = ReportWriter::new(&config.output_dir);
    let mut summary = RunSummary {
        features: ingested.features.len(),
        skipped_features: ingested.skipped.len(),
        ..RunSummary::default()
    };
    let mut attempted = 0;
    let mut failures = Vec::new();

    for scheme in config.enabled_schemes() {
        let outcome = match scheme {
            SchemeKind::H3 => {
                let sweep: Vec<HexParams> = config
                    .resolutions(scheme)
                    .into_iter()
                    .map(HexParams::new)
                    .collect();
                run_scheme(config, HexDiscretizer::new(), &sweep, &ingested.features, &writer)?
            }
            SchemeKind::S2 => {
                let sweep: Vec<QuadParams> = config
                    .resolutions(scheme)
                    .into_iter()
                    .map(|level| QuadParams::at_level(level, config.s2.max_cells, config.s2.level_mod))
                    .collect();
                run_scheme(config, QuadDiscretizer::new(), &sweep, &ingested.features, &writer)?
            }
        };

        summary.failed_conversions += outcome.failed_conversions;
        summary.measurements.push((scheme, outcome.measurements));
        match outcome.export {
            Ok(paths) => {
                attempted += paths.len();
                summary.artifacts.extend(paths);
            }
            Err(ExportError::Incomplete {
                attempted: n,
                failures: f,
            }) => {
                attempted += n;
                failures.extend(f);
            }
            Err(e) => {
                attempted += 1;
                failures.push(e);
            }
        }
    }

    if !failures.is_empty() {
        return Err(ExportError::Incomplete {
            attempted,
            failures,
        }
        .into());
    }

    info!(
        event = "run_complete",
        artifacts = summary.artifacts.len(),
        duration_ms = started.elapsed().as_millis() as u64,
    );
    Ok(summary)
}

struct SchemeOutcome {
    measurements: Vec<Measurement>,
    failed_conversions: usize,
    export: Result<Vec<PathBuf>, ExportError>,
}

fn run_scheme<D: Discretizer>(
    config: &RunConfig,
    discretizer: D,
    sweep: &[D::Params],
    features: &FeatureCollection,
    writer: &ReportWriter,
) -> Result<SchemeOutcome, AggregateError> {
    let scheme = discretizer.scheme();
    let dataset = config
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut bench_config = BenchmarkConfig::new(dataset)
        .with_warmup_count(config.warmup_count)
        .with_progress(config.progress);
    if let Some(resolution) = config.token_dump_for(scheme) {
        bench_config = bench_config.with_token_dump(resolution);
    }

    let result = Benchmark::new(bench_config, discretizer).run(features, sweep);
    let measurements = aggregate(scheme, &result.runs)?;
    let export = writer.write_sweep(&result, &measurements);

    Ok(SchemeOutcome {
        failed_conversions: result.skipped_count(),
        measurements,
        export,
    })
}
