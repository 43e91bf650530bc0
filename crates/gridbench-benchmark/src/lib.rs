//! Benchmarking pipeline for gridbench.
//!
//! This crate times tessellation adapters over a feature collection, one
//! resolution at a time, reduces the timings to per-resolution measurements
//! and writes the result artifacts.
//!
//! # Overview
//!
//! - [`Benchmark`] runs a sweep of adapter params over every feature
//! - [`aggregate`] pairs each resolution with the scheme's reference cell area
//! - [`CsvExporter`] renders duration series, summaries, tokens and histograms
//! - [`ReportWriter`] writes all artifacts of a sweep into a directory
//!
//! # Adapters
//!
//! [`Benchmark`] is generic over the [`gridbench_core::Discretizer`] it
//! drives, and results carry the adapter's cell type. The H3 and S2 sweeps
//! are separate instantiations sharing one runner and one exporter.
//!
//! # Example
//!
//! ```
//! use gridbench_benchmark::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::new("mock_polygons.geojson")
//!     .with_warmup_count(1)
//!     .with_progress(true)
//!     .with_token_dump(7);
//!
//! assert_eq!(config.name(), "mock_polygons.geojson");
//! assert_eq!(config.warmup_count(), 1);
//! assert!(config.print_progress());
//! assert_eq!(config.token_dump_resolution(), Some(7));
//! ```
//!
//! Full sweep over an adapter:
//!
//! ```text
//! let benchmark = Benchmark::new(config, HexDiscretizer::new());
//! let sweep: Vec<HexParams> = (0..=8).map(HexParams::new).collect();
//! let result = benchmark.run(&features, &sweep);
//! let measurements = aggregate(result.scheme, &result.runs)?;
//! ReportWriter::new("output").write_sweep(&result, &measurements)?;
//! ```

mod aggregate;
mod config;
mod error;
mod report;
mod result;
mod runner;

pub use aggregate::{aggregate, average_nanos, Measurement};
pub use config::BenchmarkConfig;
pub use error::{AggregateError, ExportError};
pub use report::{CsvExporter, ReportWriter};
pub use result::{DurationSample, ResolutionRun, SkippedConversion, SweepResult};
pub use runner::Benchmark;
