//! Configuration for PathForge runs.
//!
//! Load run configuration from TOML or YAML files to control the metric
//! mode, the pipeline stages, and the refinement safeguards without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use pathforge_config::RunConfig;
//! use pathforge_core::Metric;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     metric = "xy"
//!     construction = false
//!
//!     [termination]
//!     pass_count_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.metric, Metric::Xy);
//! assert!(!config.construction);
//! assert!(config.refinement);
//! ```
//!
//! Use the defaults when no file is given:
//!
//! ```
//! use pathforge_config::RunConfig;
//!
//! let config = RunConfig::load("run.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pathforge_core::Metric;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The improvement tolerance the refiner defaults to.
///
/// A candidate tour must undercut the current best by more than this amount
/// to be accepted, so floating-point noise cannot produce endless passes.
pub const DEFAULT_IMPROVEMENT_TOLERANCE: f64 = 1e-9;

/// Main run configuration.
///
/// The pipeline has two independent stage switches on top of the metric
/// mode: `construction` (greedy nearest-neighbor) and `refinement` (2-opt).
/// Disabling construction refines the identity order directly; disabling
/// refinement reproduces a pure nearest-neighbor run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Distance metric mode: all axes (`xyz`) or the first two (`xy`).
    #[serde(default)]
    pub metric: Metric,

    /// Whether to build the initial tour with nearest-neighbor construction.
    #[serde(default = "default_enabled")]
    pub construction: bool,

    /// Whether to refine the tour with 2-opt local search.
    #[serde(default = "default_enabled")]
    pub refinement: bool,

    /// Minimum strict improvement for the refiner to accept a move.
    #[serde(default = "default_tolerance")]
    pub improvement_tolerance: f64,

    /// Optional refinement safeguards. Absent by default: termination is
    /// already guaranteed by strict improvement.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_enabled() -> bool {
    true
}

fn default_tolerance() -> f64 {
    DEFAULT_IMPROVEMENT_TOLERANCE
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            construction: true,
            refinement: true,
            improvement_tolerance: DEFAULT_IMPROVEMENT_TOLERANCE,
            termination: None,
        }
    }
}

impl RunConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, chosen by extension: `.yaml` and
    /// `.yml` parse as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
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

    /// Sets the metric mode.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables nearest-neighbor construction.
    pub fn with_construction(mut self, enabled: bool) -> Self {
        self.construction = enabled;
        self
    }

    /// Enables or disables 2-opt refinement.
    pub fn with_refinement(mut self, enabled: bool) -> Self {
        self.refinement = enabled;
        self
    }

    /// Sets the improvement tolerance.
    pub fn with_improvement_tolerance(mut self, tolerance: f64) -> Self {
        self.improvement_tolerance = tolerance;
        self
    }

    /// Caps the number of refinement passes.
    pub fn with_pass_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            pass_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Caps the refinement wall-clock time.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// `Invalid` if both stages are disabled (the run would be the identity
    /// function) or the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.construction && !self.refinement {
            return Err(ConfigError::Invalid(
                "construction and refinement are both disabled; nothing to do".into(),
            ));
        }
        if !self.improvement_tolerance.is_finite() || self.improvement_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "improvement_tolerance must be finite and non-negative, got {}",
                self.improvement_tolerance
            )));
        }
        Ok(())
    }

    /// Returns the refinement time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Refinement safeguard configuration.
///
/// Both limits are optional and both default to absent; they bound runtime
/// on pathological inputs without changing behavior on runs that converge.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of 2-opt passes.
    pub pass_count_limit: Option<u64>,

    /// Maximum seconds to spend refining.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit.map(Duration::from_secs)
    }
}
