//! Result artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use gridbench_core::{CellId, SchemeKind};
use tracing::info;

use crate::aggregate::Measurement;
use crate::error::ExportError;
use crate::result::{ResolutionRun, SweepResult};

const DURATIONS_HEADER: &str = "duration (ns)";
const SUMMARY_HEADER: &str = "Resolution,AvgAreaKm2,AverageDurationNs";
const LEVELS_HEADER: &str = "Resolution,Level,CellCount";

/// CSV renderer for benchmark results.
///
/// Each artifact has a `*_to_string` form and a `write_*` form that streams
/// the same text into any writer.
///
/// # Example
///
/// ```
/// use gridbench_benchmark::{CsvExporter, Measurement};
///
/// let csv = CsvExporter::summary_to_string(&[Measurement {
///     resolution: 5,
///     avg_area_km2: 252.903364,
///     average_duration_ns: 1500.5,
/// }]);
/// assert_eq!(csv, "Resolution,AvgAreaKm2,AverageDurationNs\n5,252.903364,1500.5\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Renders one duration series: a header, then one integer per sample.
    pub fn durations_to_string<C: CellId>(run: &ResolutionRun<C>) -> String {
        let mut output = String::with_capacity(16 * (run.samples.len() + 1));
        push_line(&mut output, DURATIONS_HEADER);
        for sample in &run.samples {
            push_line(&mut output, &sample.nanos.to_string());
        }
        output
    }

    /// Renders the summary table. Floats use the shortest text that parses
    /// back to the same value.
    pub fn summary_to_string(measurements: &[Measurement]) -> String {
        let mut output = String::new();
        push_line(&mut output, SUMMARY_HEADER);
        for m in measurements {
            push_line(
                &mut output,
                &format!("{},{},{}", m.resolution, m.avg_area_km2, m.average_duration_ns),
            );
        }
        output
    }

    /// Renders the retained tokens, one per line, without a header.
    pub fn tokens_to_string<C: CellId>(run: &ResolutionRun<C>) -> String {
        let mut output = String::new();
        for token in run.tokens() {
            push_line(&mut output, &token);
        }
        output
    }

    /// Renders the level histogram of every run, by resolution then level.
    pub fn levels_to_string<C: CellId>(runs: &[ResolutionRun<C>]) -> String {
        let mut sorted: Vec<&ResolutionRun<C>> = runs.iter().collect();
        sorted.sort_by_key(|r| r.resolution);

        let mut output = String::new();
        push_line(&mut output, LEVELS_HEADER);
        for run in sorted {
            for (level, count) in &run.level_counts {
                push_line(&mut output, &format!("{},{},{}", run.resolution, level, count));
            }
        }
        output
    }

    /// Writes one duration series to a writer.
    pub fn write_durations<C: CellId, W: Write>(run: &ResolutionRun<C>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::durations_to_string(run).as_bytes())
    }

    /// Writes the summary table to a writer.
    pub fn write_summary<W: Write>(measurements: &[Measurement], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::summary_to_string(measurements).as_bytes())
    }

    /// Writes the token dump to a writer.
    pub fn write_tokens<C: CellId, W: Write>(run: &ResolutionRun<C>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::tokens_to_string(run).as_bytes())
    }

    /// Writes the level histogram to a writer.
    pub fn write_levels<C: CellId, W: Write>(runs: &[ResolutionRun<C>], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::levels_to_string(runs).as_bytes())
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

/// Writes the artifacts of a sweep into one directory.
///
/// File names:
/// - `durations-{scheme}-res{N}.csv` per resolution
/// - `{scheme}-averages.csv`
/// - `{scheme}-levels.csv`
/// - `{scheme}-tokens.txt`, only when a run retained its coverings
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Creates a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn durations_path(&self, scheme: SchemeKind, resolution: u8) -> PathBuf {
        self.output_dir
            .join(format!("durations-{scheme}-res{resolution}.csv"))
    }

    pub fn summary_path(&self, scheme: SchemeKind) -> PathBuf {
        self.output_dir.join(format!("{scheme}-averages.csv"))
    }

    pub fn levels_path(&self, scheme: SchemeKind) -> PathBuf {
        self.output_dir.join(format!("{scheme}-levels.csv"))
    }

    pub fn tokens_path(&self, scheme: SchemeKind) -> PathBuf {
        self.output_dir.join(format!("{scheme}-tokens.txt"))
    }

    /// Writes every artifact of `result`.
    ///
    /// Each artifact is attempted even when an earlier one failed. Returns
    /// the written paths, or [`ExportError::Incomplete`] listing every failure.
    pub fn write_sweep<C: CellId>(
        &self,
        result: &SweepResult<C>,
        measurements: &[Measurement],
    ) -> Result<Vec<PathBuf>, ExportError> {
        let scheme = result.scheme;
        let mut written = Vec::new();
        let mut failures = Vec::new();
        let mut attempted = 0;

        if let Err(source) = fs::create_dir_all(&self.output_dir) {
            return Err(ExportError::Write {
                path: self.output_dir.clone(),
                source,
            });
        }

        let mut attempt = |path: PathBuf, outcome: io::Result<()>| {
            attempted += 1;
            match outcome {
                Ok(()) => {
                    info!(event = "artifact_written", scheme = %scheme, path = %path.display());
                    written.push(path);
                }
                Err(source) => failures.push(ExportError::Write { path, source }),
            }
        };

        for run in &result.runs {
            let path = self.durations_path(scheme, run.resolution);
            let outcome = write_file(&path, |w| CsvExporter::write_durations(run, w));
            attempt(path, outcome);
        }

        let path = self.summary_path(scheme);
        let outcome = write_file(&path, |w| CsvExporter::write_summary(measurements, w));
        attempt(path, outcome);

        let path = self.levels_path(scheme);
        let outcome = write_file(&path, |w| CsvExporter::write_levels(&result.runs, w));
        attempt(path, outcome);

        if let Some(run) = result.token_run() {
            let path = self.tokens_path(scheme);
            let outcome = write_file(&path, |w| CsvExporter::write_tokens(run, w));
            attempt(path, outcome);
        }

        if failures.is_empty() {
            Ok(written)
        } else {
            Err(ExportError::Incomplete {
                attempted,
                failures,
            })
        }
    }
}

/// Creates `path`, writes through a buffer and flushes before closing.
fn write_file(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render(&mut writer)?;
    writer.flush()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
