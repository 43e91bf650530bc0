//! Tests for CSV rendering and artifact writing.

use std::fs;

use gridbench_core::{CellCovering, DiscretizeError};

use super::*;
use crate::result::DurationSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Tok(u8, u32);

impl CellId for Tok {
    fn level(&self) -> u8 {
        self.0
    }

    fn to_token(&self) -> String {
        format!("{:02}{:04}", self.0, self.1)
    }

    fn from_token(token: &str) -> Result<Self, DiscretizeError> {
        Err(DiscretizeError::InvalidToken(token.to_string()))
    }
}

fn run(resolution: u8, nanos: &[u64], keep: bool) -> ResolutionRun<Tok> {
    let mut run = ResolutionRun::new(resolution, keep);
    for (i, &n) in nanos.iter().enumerate() {
        let covering: CellCovering<Tok> = (0..2).map(|k| Tok(resolution, i as u32 * 10 + k)).collect();
        run.record(
            DurationSample {
                feature_id: i as i64 + 1,
                nanos: n,
            },
            covering,
        );
    }
    run
}

fn sweep() -> SweepResult<Tok> {
    let mut result = SweepResult::new("test", SchemeKind::H3);
    result.add_run(run(1, &[120, 80], false));
    result.add_run(run(0, &[40], true));
    result
}

fn measurements() -> Vec<Measurement> {
    vec![
        Measurement {
            resolution: 0,
            avg_area_km2: 4357449.416078,
            average_duration_ns: 40.0,
        },
        Measurement {
            resolution: 1,
            avg_area_km2: 609788.441794,
            average_duration_ns: 100.0,
        },
    ]
}

#[test]
fn test_durations_csv() {
    let csv = CsvExporter::durations_to_string(&run(3, &[5, 17, 0], false));
    assert_eq!(csv, "duration (ns)\n5\n17\n0\n");
}

#[test]
fn test_durations_csv_without_samples() {
    let csv = CsvExporter::durations_to_string(&run(3, &[], false));
    assert_eq!(csv, "duration (ns)\n");
}

#[test]
fn test_summary_uses_shortest_float_text() {
    let csv = CsvExporter::summary_to_string(&measurements());
    assert_eq!(
        csv,
        "Resolution,AvgAreaKm2,AverageDurationNs\n0,4357449.416078,40\n1,609788.441794,100\n"
    );
}

#[test]
fn test_tokens_in_dataset_order() {
    let csv = CsvExporter::tokens_to_string(&run(2, &[1, 1], true));
    assert_eq!(csv, "020000\n020001\n020010\n020011\n");
}

#[test]
fn test_levels_sorted_by_resolution() {
    let result = sweep();
    let csv = CsvExporter::levels_to_string(&result.runs);
    assert_eq!(csv, "Resolution,Level,CellCount\n0,0,2\n1,1,4\n");
}

#[test]
fn test_write_to_writer() {
    let mut buffer = Vec::new();
    CsvExporter::write_summary(&measurements(), &mut buffer).unwrap();
    assert!(String::from_utf8(buffer).unwrap().starts_with("Resolution,"));
}

#[test]
fn test_write_sweep_creates_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("out"));

    let written = writer.write_sweep(&sweep(), &measurements()).unwrap();

    assert_eq!(written.len(), 5);
    let summary = fs::read_to_string(dir.path().join("out/h3-averages.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    let durations = fs::read_to_string(dir.path().join("out/durations-h3-res1.csv")).unwrap();
    assert_eq!(durations, "duration (ns)\n120\n80\n");
    let tokens = fs::read_to_string(dir.path().join("out/h3-tokens.txt")).unwrap();
    assert_eq!(tokens.lines().count(), 2);
    assert!(dir.path().join("out/h3-levels.csv").exists());
    assert!(dir.path().join("out/durations-h3-res0.csv").exists());
}

#[test]
fn test_no_token_file_without_retained_run() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path());
    let mut result = SweepResult::new("test", SchemeKind::S2);
    result.add_run(run(4, &[1], false));

    writer.write_sweep(&result, &[]).unwrap();

    assert!(!writer.tokens_path(SchemeKind::S2).exists());
    assert!(writer.durations_path(SchemeKind::S2, 4).exists());
}

#[test]
fn test_failed_artifact_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path());
    // A directory where the summary file should go.
    fs::create_dir(writer.summary_path(SchemeKind::H3)).unwrap();

    let err = writer.write_sweep(&sweep(), &measurements()).unwrap_err();

    match err {
        ExportError::Incomplete {
            attempted,
            failures,
        } => {
            assert_eq!(attempted, 5);
            assert_eq!(failures.len(), 1);
            assert!(failures[0].to_string().contains("h3-averages.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(writer.levels_path(SchemeKind::H3).exists());
    assert!(writer.tokens_path(SchemeKind::H3).exists());
}
