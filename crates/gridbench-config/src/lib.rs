//! Configuration system for gridbench.
//!
//! Load the run configuration from TOML or YAML to choose the input, the
//! output directory and the resolution sweeps without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gridbench_config::RunConfig;
//! use gridbench_core::SchemeKind;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     input = "polygons.geojson"
//!
//!     [h3]
//!     max_resolution = 5
//!
//!     [s2]
//!     enabled = false
//! "#).unwrap();
//!
//! assert_eq!(config.h3.resolutions(), 0..=5);
//! assert!(!config.s2.enabled);
//! assert_eq!(config.enabled_schemes(), vec![SchemeKind::H3]);
//! ```
//!
//! Defaults reproduce the reference sweep:
//!
//! ```
//! use gridbench_config::RunConfig;
//!
//! let config = RunConfig::default();
//! assert_eq!(config.h3.resolutions(), 0..=8);
//! assert_eq!(config.s2.levels(), 0..=13);
//! assert!(config.validate().is_ok());
//! ```

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use gridbench_core::SchemeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Largest accepted S2 `level_mod`.
const MAX_LEVEL_MOD: u8 = 3;

/// Main run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// GeoJSON FeatureCollection to benchmark.
    pub input: PathBuf,

    /// Directory receiving every artifact.
    pub output_dir: PathBuf,

    /// Emit one progress event per converted polygon.
    pub progress: bool,

    /// Untimed passes over the dataset before each measured resolution.
    pub warmup_count: usize,

    /// H3 sweep.
    pub h3: H3Config,

    /// S2 sweep.
    pub s2: S2Config,

    /// Which covering set is dumped as tokens.
    pub token_dump: TokenDumpConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/mock_polygons.geojson"),
            output_dir: PathBuf::from("output"),
            progress: false,
            warmup_count: 0,
            h3: H3Config::default(),
            s2: S2Config::default(),
            token_dump: TokenDumpConfig::default(),
        }
    }
}

impl RunConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the input file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Enables or disables progress events.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the number of warmup passes.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Runs only the listed schemes.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbench_config::RunConfig;
    /// use gridbench_core::SchemeKind;
    ///
    /// let config = RunConfig::default().with_schemes(&[SchemeKind::S2]);
    /// assert_eq!(config.enabled_schemes(), vec![SchemeKind::S2]);
    /// ```
    pub fn with_schemes(mut self, schemes: &[SchemeKind]) -> Self {
        self.h3.enabled = schemes.contains(&SchemeKind::H3);
        self.s2.enabled = schemes.contains(&SchemeKind::S2);
        self
    }

    /// Designates the covering set dumped as tokens.
    pub fn with_token_dump(mut self, scheme: SchemeKind, resolution: u8) -> Self {
        self.token_dump = TokenDumpConfig {
            enabled: true,
            scheme,
            resolution,
        };
        self
    }

    /// Returns the enabled schemes in run order.
    pub fn enabled_schemes(&self) -> Vec<SchemeKind> {
        SchemeKind::ALL
            .into_iter()
            .filter(|scheme| self.is_enabled(*scheme))
            .collect()
    }

    /// Returns true if `scheme` is swept.
    pub fn is_enabled(&self, scheme: SchemeKind) -> bool {
        match scheme {
            SchemeKind::H3 => self.h3.enabled,
            SchemeKind::S2 => self.s2.enabled,
        }
    }

    /// Returns the swept resolutions of `scheme`, empty when disabled.
    pub fn resolutions(&self, scheme: SchemeKind) -> Vec<u8> {
        if !self.is_enabled(scheme) {
            return Vec::new();
        }
        match scheme {
            SchemeKind::H3 => self.h3.resolutions().collect(),
            SchemeKind::S2 => self.s2.levels().collect(),
        }
    }

    /// Returns the token dump resolution for `scheme`, if it is the
    /// designated scheme and is enabled.
    pub fn token_dump_for(&self, scheme: SchemeKind) -> Option<u8> {
        (self.token_dump.enabled && self.token_dump.scheme == scheme && self.is_enabled(scheme))
            .then_some(self.token_dump.resolution)
    }

    /// Checks every constraint before any work starts.
    ///
    /// A token dump designating a disabled scheme is ignored rather than
    /// rejected, so restricting the schemes on the command line never
    /// invalidates a config file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.h3.enabled && !self.s2.enabled {
            return Err(invalid("no scheme enabled"));
        }
        if self.h3.enabled {
            check_range(SchemeKind::H3, self.h3.min_resolution, self.h3.max_resolution)?;
        }
        if self.s2.enabled {
            check_range(SchemeKind::S2, self.s2.min_level, self.s2.max_level)?;
            if self.s2.max_cells == 0 {
                return Err(invalid("s2.max_cells must be positive"));
            }
            if !(1..=MAX_LEVEL_MOD).contains(&self.s2.level_mod) {
                return Err(invalid(format!(
                    "s2.level_mod must be between 1 and {MAX_LEVEL_MOD}, got {}",
                    self.s2.level_mod
                )));
            }
        }
        if let Some(resolution) = self.token_dump_for(self.token_dump.scheme) {
            if !self.resolutions(self.token_dump.scheme).contains(&resolution) {
                return Err(invalid(format!(
                    "token_dump.resolution {resolution} is not swept for {}",
                    self.token_dump.scheme
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn check_range(scheme: SchemeKind, min: u8, max: u8) -> Result<(), ConfigError> {
    if min > max {
        return Err(invalid(format!(
            "{scheme} sweep is empty: minimum {min} exceeds maximum {max}"
        )));
    }
    if max > scheme.max_resolution() {
        return Err(invalid(format!(
            "{scheme} resolution {max} exceeds the scheme maximum {}",
            scheme.max_resolution()
        )));
    }
    let tabulated = scheme.max_tabulated_resolution();
    if max > tabulated {
        return Err(invalid(format!(
            "{scheme} resolution {max} has no reference cell area (table ends at {tabulated})"
        )));
    }
    Ok(())
}

/// H3 sweep configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct H3Config {
    pub enabled: bool,
    pub min_resolution: u8,
    pub max_resolution: u8,
}

impl Default for H3Config {
    fn default() -> Self {
        Self {
            enabled: true,
            min_resolution: 0,
            max_resolution: 8,
        }
    }
}

impl H3Config {
    /// Returns the swept resolutions.
    pub fn resolutions(&self) -> RangeInclusive<u8> {
        self.min_resolution..=self.max_resolution
    }
}

/// S2 sweep configuration.
///
/// Each swept level `L` runs with `min_level = max_level = L`; `min_level`
/// and `max_level` here bound the sweep itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct S2Config {
    pub enabled: bool,
    pub min_level: u8,
    pub max_level: u8,
    pub max_cells: usize,
    pub level_mod: u8,
}

impl Default for S2Config {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: 0,
            max_level: 13,
            max_cells: 8,
            level_mod: 1,
        }
    }
}

impl S2Config {
    /// Returns the swept levels.
    pub fn levels(&self) -> RangeInclusive<u8> {
        self.min_level..=self.max_level
    }
}

/// Token dump configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenDumpConfig {
    pub enabled: bool,
    #[serde(with = "scheme_name")]
    pub scheme: SchemeKind,
    pub resolution: u8,
}

impl Default for TokenDumpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scheme: SchemeKind::S2,
            resolution: 13,
        }
    }
}

/// Serializes a [`SchemeKind`] as its lowercase name.
mod scheme_name {
    use gridbench_core::SchemeKind;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(scheme: &SchemeKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(scheme.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SchemeKind, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
