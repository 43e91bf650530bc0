//! Benchmark result types.

use std::collections::BTreeMap;
use std::time::Duration;

use gridbench_core::{CellCovering, CellId, DiscretizeError, SchemeKind};

use crate::aggregate::average_nanos;

/// Elapsed time of one (polygon, resolution) conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSample {
    /// Identifier of the feature that was converted.
    pub feature_id: i64,
    /// Wall-clock time in nanoseconds.
    pub nanos: u64,
}

impl DurationSample {
    /// Creates a sample, saturating durations too long for `u64` nanoseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_benchmark::DurationSample;
    /// use std::time::Duration;
    ///
    /// let sample = DurationSample::new(3, Duration::from_micros(5));
    /// assert_eq!(sample.nanos, 5_000);
    /// ```
    pub fn new(feature_id: i64, elapsed: Duration) -> Self {
        Self {
            feature_id,
            nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}

/// A conversion the adapter rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConversion {
    pub feature_id: i64,
    pub reason: DiscretizeError,
}

/// Everything measured at one resolution.
#[derive(Debug, Clone)]
pub struct ResolutionRun<C: CellId> {
    /// Resolution or level reported by the params.
    pub resolution: u8,
    /// Samples in dataset order.
    pub samples: Vec<DurationSample>,
    /// Conversions that failed, in dataset order.
    pub skipped: Vec<SkippedConversion>,
    /// Cells per level, summed over every covering.
    pub level_counts: BTreeMap<u8, usize>,
    /// Coverings in dataset order, kept only for the token dump resolution.
    pub coverings: Option<Vec<CellCovering<C>>>,
}

impl<C: CellId> ResolutionRun<C> {
    /// Creates an empty run, retaining coverings when `keep_coverings` is set.
    pub fn new(resolution: u8, keep_coverings: bool) -> Self {
        Self {
            resolution,
            samples: Vec::new(),
            skipped: Vec::new(),
            level_counts: BTreeMap::new(),
            coverings: keep_coverings.then(Vec::new),
        }
    }

    /// Records a successful conversion.
    pub fn record(&mut self, sample: DurationSample, covering: CellCovering<C>) {
        self.samples.push(sample);
        for (level, count) in covering.level_counts() {
            *self.level_counts.entry(level).or_insert(0) += count;
        }
        if let Some(coverings) = self.coverings.as_mut() {
            coverings.push(covering);
        }
    }

    /// Records a failed conversion.
    pub fn skip(&mut self, skipped: SkippedConversion) {
        self.skipped.push(skipped);
    }

    /// Returns the sample durations in nanoseconds, in dataset order.
    pub fn durations(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.nanos).collect()
    }

    /// Returns the mean duration, 0.0 when nothing was measured.
    pub fn average_nanos(&self) -> f64 {
        average_nanos(&self.durations())
    }

    /// Returns the number of cells over all coverings.
    pub fn total_cells(&self) -> usize {
        self.level_counts.values().sum()
    }

    /// Returns the tokens of the retained coverings.
    ///
    /// Coverings appear in dataset order; tokens within one covering are
    /// sorted. Empty when coverings were not retained.
    pub fn tokens(&self) -> Vec<String> {
        self.coverings
            .iter()
            .flatten()
            .flat_map(|covering| covering.sample_tokens(covering.len()))
            .collect()
    }
}

/// Results of one scheme's sweep.
#[derive(Debug, Clone)]
pub struct SweepResult<C: CellId> {
    /// Label of the benchmarked dataset, shown in sweep logs.
    pub name: String,
    /// Scheme the adapter implements.
    pub scheme: SchemeKind,
    /// Runs in sweep order.
    pub runs: Vec<ResolutionRun<C>>,
}

impl<C: CellId> SweepResult<C> {
    /// Creates a new sweep result.
    pub fn new(name: impl Into<String>, scheme: SchemeKind) -> Self {
        Self {
            name: name.into(),
            scheme,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: ResolutionRun<C>) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the run for `resolution`, if it was swept.
    pub fn run(&self, resolution: u8) -> Option<&ResolutionRun<C>> {
        self.runs.iter().find(|r| r.resolution == resolution)
    }

    /// Returns the run that retained its coverings, if any.
    pub fn token_run(&self) -> Option<&ResolutionRun<C>> {
        self.runs.iter().find(|r| r.coverings.is_some())
    }

    /// Returns the total number of failed conversions.
    pub fn skipped_count(&self) -> usize {
        self.runs.iter().map(|r| r.skipped.len()).sum()
    }
}
