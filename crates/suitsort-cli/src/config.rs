use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use suitsort_core::order::MAX_ORDERABLE_RUNS;
use suitsort_core::{DistributionMode, MAX_HAND_SIZE};
use thiserror::Error;
use tracing::Level;

const DEFAULT_SEED: u64 = 42;

/// Root run configuration, optionally loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub hand_sizes: HandSizeRange,
    #[serde(default)]
    pub mode: DistributionMode,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: RunConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.hand_sizes.validate()?;
        self.verify.validate()?;
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.logging.tracing_level),
            });
        }
        Ok(())
    }
}

/// Inclusive range of hand sizes to report.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct HandSizeRange {
    #[serde(default = "default_min_hand_size")]
    pub min: usize,
    #[serde(default = "default_max_hand_size")]
    pub max: usize,
}

impl Default for HandSizeRange {
    fn default() -> Self {
        Self {
            min: default_min_hand_size(),
            max: default_max_hand_size(),
        }
    }
}

impl HandSizeRange {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.max > MAX_HAND_SIZE {
            return Err(ValidationError::InvalidField {
                field: "hand_sizes.max".to_string(),
                message: format!("hand size may not exceed {MAX_HAND_SIZE}"),
            });
        }

        if self.min > self.max {
            return Err(ValidationError::InvalidField {
                field: "hand_sizes.min".to_string(),
                message: format!("min ({}) is larger than max ({})", self.min, self.max),
            });
        }

        Ok(())
    }
}

fn default_min_hand_size() -> usize {
    1
}

fn default_max_hand_size() -> usize {
    MAX_HAND_SIZE
}

/// Monte Carlo cross-check; disabled while `trials` is zero.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    #[serde(default)]
    pub trials: u64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 0,
            seed: default_seed(),
        }
    }
}

impl SimulationConfig {
    pub fn enabled(&self) -> bool {
        self.trials > 0
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Exhaustive checks of the pruning properties, run before the table.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct VerifyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_verify_max_len")]
    pub max_len: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_len: default_verify_max_len(),
        }
    }
}

impl VerifyConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.max_len <= MAX_ORDERABLE_RUNS {
            return Err(ValidationError::InvalidField {
                field: "verify.max_len".to_string(),
                message: format!("must be greater than {MAX_ORDERABLE_RUNS}"),
            });
        }
        Ok(())
    }
}

fn default_verify_max_len() -> usize {
    MAX_ORDERABLE_RUNS + 1
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
