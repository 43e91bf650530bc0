//! gridbench - H3 versus S2 polygon covering benchmark
//!
//! Usage:
//!   gridbench [OPTIONS]
//!
//! Configuration:
//!   Reads TOML or YAML (chosen by extension). Command line options and
//!   their environment variables override the file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridbench::{run, GridBenchError, RunConfig};
use gridbench_core::SchemeKind;

/// gridbench - H3 versus S2 polygon covering benchmark
#[derive(Parser)]
#[command(
    name = "gridbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Benchmark H3 polygon-to-cells against S2 region coverings",
    long_about = "Converts every polygon of a GeoJSON Feature Collection into H3 and S2 \
cells across a resolution sweep, timing each conversion, and writes duration series, \
per-resolution summaries, level histograms and a token dump."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GRIDBENCH_CONFIG",
        help = "Path to a TOML or YAML configuration file"
    )]
    config: Option<PathBuf>,

    /// Input GeoJSON
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GRIDBENCH_INPUT",
        help = "GeoJSON Feature Collection to benchmark"
    )]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "GRIDBENCH_OUTPUT_DIR",
        help = "Directory receiving the result artifacts"
    )]
    output_dir: Option<PathBuf>,

    /// Per-polygon progress
    #[arg(long, help = "Log one progress line per converted polygon")]
    progress: bool,

    /// Schemes to run
    #[arg(
        long = "scheme",
        value_name = "SCHEME",
        help = "Run only this scheme (h3 or s2); repeatable"
    )]
    schemes: Vec<SchemeKind>,

    /// Warmup passes
    #[arg(long, value_name = "N", help = "Untimed passes over the dataset per resolution")]
    warmup: Option<usize>,
}

fn build_config(args: &Args) -> Result<RunConfig, GridBenchError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(input) = &args.input {
        config = config.with_input(input);
    }
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if args.progress {
        config = config.with_progress(true);
    }
    if !args.schemes.is_empty() {
        config = config.with_schemes(&args.schemes);
    }
    if let Some(warmup) = args.warmup {
        config = config.with_warmup_count(warmup);
    }

    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    gridbench_console::init();

    match build_config(&args).and_then(|config| run(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
