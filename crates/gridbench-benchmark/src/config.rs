//! Benchmark configuration.

/// Configuration for one scheme's sweep.
///
/// Controls warmup passes, progress output and which resolution keeps its
/// coverings for the token dump.
///
/// # Example
///
/// ```
/// use gridbench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("mock_polygons.geojson").with_warmup_count(2);
///
/// assert_eq!(config.name(), "mock_polygons.geojson");
/// assert_eq!(config.warmup_count(), 2);
/// assert!(!config.print_progress());
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    print_progress: bool,
    token_dump_resolution: Option<u8>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - print_progress: false
    /// - no token dump
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test");
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.token_dump_resolution(), None);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            print_progress: false,
            token_dump_resolution: None,
        }
    }

    /// Sets the number of untimed passes over the dataset per resolution.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Enables per-polygon progress events.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.print_progress = enabled;
        self
    }

    /// Keeps the coverings computed at `resolution` for the token dump.
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_token_dump(13);
    /// assert_eq!(config.token_dump_resolution(), Some(13));
    /// ```
    pub fn with_token_dump(mut self, resolution: u8) -> Self {
        self.token_dump_resolution = Some(resolution);
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of warmup passes.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns true if progress events are emitted.
    pub fn print_progress(&self) -> bool {
        self.print_progress
    }

    /// Returns the resolution whose coverings are retained, if any.
    pub fn token_dump_resolution(&self) -> Option<u8> {
        self.token_dump_resolution
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
