//! CLI configuration management.
//!
//! Loads defaults for every command from a TOML file, applies
//! `RANDLAB_*` environment variable overrides, then validates.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use sampling_core::distributions::DEFAULT_SAMPLE_SIZE;
use sampling_core::mc::DEFAULT_VOLUME_SAMPLES;
use sampling_core::uniformity::DEFAULT_BIN_COUNT;
use sampling_core::vectors::{DEFAULT_TOLERANCE, DEFAULT_VECTOR_COUNT};

/// Log levels accepted by `log_level`.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Upper bound for any configured count.
const MAX_COUNT: usize = 100_000_000;

/// Effective configuration for all commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed for the random source; `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Sample size for `sample` and `uniformity`.
    pub sample_size: usize,

    /// Bin count for the uniformity score.
    pub bin_count: usize,

    /// Bin count for the printed histogram.
    pub histogram_bins: usize,

    /// Vector count for `vectors`.
    pub vector_count: usize,

    /// Point count for `volume`.
    pub volume_samples: usize,

    /// Correlation tolerance for `vectors`.
    pub tolerance: f64,

    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
            bin_count: DEFAULT_BIN_COUNT,
            histogram_bins: 30,
            vector_count: DEFAULT_VECTOR_COUNT,
            volume_samples: DEFAULT_VOLUME_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `RANDLAB_*` environment variable overrides.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("RANDLAB_SEED") {
            self.seed = Some(parse_override("RANDLAB_SEED", &seed)?);
        }
        if let Some(value) = lookup("RANDLAB_SAMPLE_SIZE") {
            self.sample_size = parse_override("RANDLAB_SAMPLE_SIZE", &value)?;
        }
        if let Some(value) = lookup("RANDLAB_BIN_COUNT") {
            self.bin_count = parse_override("RANDLAB_BIN_COUNT", &value)?;
        }
        if let Some(value) = lookup("RANDLAB_VECTOR_COUNT") {
            self.vector_count = parse_override("RANDLAB_VECTOR_COUNT", &value)?;
        }
        if let Some(value) = lookup("RANDLAB_VOLUME_SAMPLES") {
            self.volume_samples = parse_override("RANDLAB_VOLUME_SAMPLES", &value)?;
        }
        if let Some(value) = lookup("RANDLAB_TOLERANCE") {
            self.tolerance = parse_override("RANDLAB_TOLERANCE", &value)?;
        }
        if let Some(level) = lookup("RANDLAB_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(self)
    }

    /// Validate the configuration, collecting every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        for (name, value) in [
            ("sample_size", self.sample_size),
            ("bin_count", self.bin_count),
            ("histogram_bins", self.histogram_bins),
            ("vector_count", self.vector_count),
            ("volume_samples", self.volume_samples),
        ] {
            if value == 0 {
                errors.push(format!("{} must be greater than 0", name));
            } else if value > MAX_COUNT {
                errors.push(format!(
                    "{} {} exceeds maximum allowed ({})",
                    name, value, MAX_COUNT
                ));
            }
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            errors.push(format!(
                "tolerance must be a finite positive number, got {}",
                self.tolerance
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate.
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{}: cannot parse '{}'", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or override
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
