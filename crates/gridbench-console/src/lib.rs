//! Colorful console output for benchmark runs.
//!
//! Provides a custom `tracing` layer that formats pipeline events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (ingest, sweep start/end, per-resolution
//!   summaries, artifacts) and per-polygon progress when enabled
//! - **WARN**: Skipped features, dropped holes, failed conversions
//! - **DEBUG**: Level histograms

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVES: &str = "gridbench=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
  ____      _     _ _                     _
 / ___|_ __(_) __| | |__   ___ _ __   ___| |__
| |  _| '__| |/ _` | '_ \ / _ \ '_ \ / __| '_ \
| |_| | |  | | (_| | |_) |  __/ | | | (__| | | |
 \____|_|  |_|\__,_|_.__/ \___|_| |_|\___|_| |_|
"#;

    let version_line = format!(
        "              v{} - H3 vs S2 Polygon Covering Benchmark\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("gridbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    scheme: Option<String>,
    name: Option<String>,
    reason: Option<String>,
    path: Option<String>,
    levels: Option<String>,
    tokens: Option<String>,
    feature: Option<i64>,
    index: Option<u64>,
    hole: Option<u64>,
    points: Option<u64>,
    resolution: Option<u64>,
    resolutions: Option<u64>,
    features: Option<u64>,
    samples: Option<u64>,
    skipped: Option<u64>,
    dropped_holes: Option<u64>,
    cells: Option<u64>,
    artifacts: Option<u64>,
    duration_ms: Option<u64>,
    avg_ns: Option<f64>,
    closed: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "scheme" => self.scheme = Some(s.trim_matches('"').to_string()),
            "name" => self.name = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s),
            "path" => self.path = Some(s),
            "levels" => self.levels = Some(s),
            "tokens" => self.tokens = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "feature" => self.feature = Some(value as i64),
            "index" => self.index = Some(value),
            "hole" => self.hole = Some(value),
            "points" => self.points = Some(value),
            "resolution" => self.resolution = Some(value),
            "resolutions" => self.resolutions = Some(value),
            "features" => self.features = Some(value),
            "samples" => self.samples = Some(value),
            "skipped" => self.skipped = Some(value),
            "dropped_holes" => self.dropped_holes = Some(value),
            "cells" => self.cells = Some(value),
            "artifacts" => self.artifacts = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "feature" => self.feature = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "avg_ns" {
            self.avg_ns = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "closed" {
            self.closed = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "scheme" => self.scheme = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "ingest_complete" => format_ingest(v),
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "resolution_complete" => format_resolution(v),
        "progress" => format_progress(v),
        "level_histogram" => format_histogram(v, level),
        "artifact_written" => format_artifact(v),
        "run_complete" => format_run_complete(v),
        "feature_skipped" | "hole_dropped" | "lenient_exterior" | "conversion_failed" => {
            format_warning(v, event)
        }
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn scheme_label(v: &EventVisitor) -> String {
    v.scheme
        .as_deref()
        .unwrap_or("?")
        .to_uppercase()
        .bright_white()
        .bold()
        .to_string()
}

fn format_ingest(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Loaded {} features from {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.features).bright_yellow(),
        v.path.as_deref().unwrap_or("?").white(),
    );

    if let Some(skipped) = v.skipped.filter(|n| *n > 0) {
        output.push_str(&format!(
            " │ {} skipped",
            skipped.to_formatted_string(&Locale::en).yellow()
        ));
    }
    if let Some(dropped) = v.dropped_holes.filter(|n| *n > 0) {
        output.push_str(&format!(
            " │ {} holes dropped",
            dropped.to_formatted_string(&Locale::en).yellow()
        ));
    }

    output
}

fn format_sweep_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} sweep{} │ {} resolutions │ {} features",
        format_elapsed(),
        "▶".bright_blue(),
        scheme_label(v),
        sweep_name(v),
        count(v.resolutions).bright_yellow(),
        count(v.features).bright_yellow(),
    )
}

fn sweep_name(v: &EventVisitor) -> String {
    match v.name.as_deref() {
        Some(name) if !name.is_empty() => format!(" {}", name.cyan()),
        _ => String::new(),
    }
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} {} sweep{} complete │ {} resolutions │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        scheme_label(v),
        sweep_name(v),
        count(v.resolutions).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    );

    if let Some(skipped) = v.skipped.filter(|n| *n > 0) {
        output.push_str(&format!(
            " │ {} failed conversions",
            skipped.to_formatted_string(&Locale::en).bright_red()
        ));
    }

    output
}

fn format_resolution(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} {} res {:>2} │ {:>8} samples │ {:>12} cells │ {:>10} avg",
        format_elapsed(),
        "◆".bright_cyan(),
        scheme_label(v),
        v.resolution.unwrap_or(0),
        count(v.samples).white(),
        count(v.cells).white(),
        format_nanos(v.avg_ns.unwrap_or(0.0)).bright_magenta().bold(),
    );

    if let Some(skipped) = v.skipped.filter(|n| *n > 0) {
        output.push_str(&format!(
            " │ {} failed",
            skipped.to_formatted_string(&Locale::en).bright_red()
        ));
    }

    output
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} {} res {:>2} │ feature {:>6} │ {:>8} cells │ {} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        scheme_label(v),
        v.resolution.unwrap_or(0),
        v.feature.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        count(v.cells).bright_magenta(),
        v.tokens.as_deref().unwrap_or("[]").bright_black(),
        v.levels.as_deref().unwrap_or("{}").bright_black(),
    )
}

fn format_histogram(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    format!(
        "{} {} {} res {:>2} │ levels {}",
        format_elapsed(),
        "·".bright_black(),
        scheme_label(v),
        v.resolution.unwrap_or(0),
        v.levels.as_deref().unwrap_or("{}").bright_black(),
    )
}

fn format_artifact(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        format_elapsed(),
        "✎".bright_green(),
        v.path.as_deref().unwrap_or("?").white(),
    )
}

fn format_run_complete(v: &EventVisitor) -> String {
    format!(
        "{} {} Run complete │ {} artifacts │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.artifacts).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_warning(v: &EventVisitor, event: &str) -> String {
    let index = v.index.unwrap_or(0);
    let reason = v.reason.as_deref().unwrap_or("");

    // Ingestion reports 0-based input positions, the runner reports feature ids.
    let message = match event {
        "feature_skipped" => format!("input #{} skipped: {}", index, reason),
        "hole_dropped" => format!(
            "input #{} hole {} dropped: {}",
            index,
            v.hole.unwrap_or(0),
            reason
        ),
        "lenient_exterior" => format!(
            "input #{} kept with a lenient exterior ({} points, {})",
            index,
            v.points.unwrap_or(0),
            if v.closed.unwrap_or(false) { "closed" } else { "open" }
        ),
        _ => format!(
            "{} res {} feature {} failed: {}",
            v.scheme.as_deref().unwrap_or("?"),
            v.resolution.unwrap_or(0),
            v.feature.unwrap_or(0),
            reason
        ),
    };

    format!(
        "{} {} {}",
        format_elapsed(),
        "⚠".yellow().bold(),
        message.yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_nanos(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.0}ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2}µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else {
        format!("{:.2}s", ns / 1_000_000_000.0)
    }
}
