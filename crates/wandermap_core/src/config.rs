//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe log settings and the simulated latency window per operation.
//! - Overlay process environment variables onto build-mode defaults.
//!
//! # Invariants
//! - Latency only shapes timing; no configuration value changes an outcome.
//! - `CoreConfig::default()` reproduces production timing.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_LOG_LEVEL: &str = "WANDERMAP_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "WANDERMAP_LOG_DIR";
pub const ENV_LATENCY: &str = "WANDERMAP_LATENCY";

/// Store operation categories that carry their own latency window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    GetAll,
    GetById,
    /// Foreign-key and category scans.
    Lookup,
    /// Free-text scans.
    Search,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetById => "get_by_id",
            Self::Lookup => "lookup",
            Self::Search => "search",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Simulated round-trip time per operation kind, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub lookup_ms: u64,
    pub search_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl LatencyProfile {
    /// Production timing that mimics a remote API.
    pub const fn simulated() -> Self {
        Self {
            get_all_ms: 300,
            get_by_id_ms: 200,
            lookup_ms: 250,
            search_ms: 300,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
        }
    }

    /// No delay at all. Operations still run through the async surface.
    pub const fn instant() -> Self {
        Self::uniform_ms(0)
    }

    /// Same delay for every operation kind.
    pub fn uniform(delay: Duration) -> Self {
        Self::uniform_ms(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
    }

    const fn uniform_ms(ms: u64) -> Self {
        Self {
            get_all_ms: ms,
            get_by_id_ms: ms,
            lookup_ms: ms,
            search_ms: ms,
            create_ms: ms,
            update_ms: ms,
            delete_ms: ms,
        }
    }

    pub fn delay_for(&self, kind: OperationKind) -> Duration {
        let ms = match kind {
            OperationKind::GetAll => self.get_all_ms,
            OperationKind::GetById => self.get_by_id_ms,
            OperationKind::Lookup => self.lookup_ms,
            OperationKind::Search => self.search_ms,
            OperationKind::Create => self.create_ms,
            OperationKind::Update => self.update_ms,
            OperationKind::Delete => self.delete_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Configuration error raised while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
    InvalidLatency(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL}=`{value}` is not one of trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
            Self::InvalidLatency(value) => write!(
                f,
                "{ENV_LATENCY}=`{value}` must be `simulated`, `instant` or a delay in milliseconds"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings consumed by the composition root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// Rolling log file directory. `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    pub latency: LatencyProfile,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            latency: LatencyProfile::simulated(),
        }
    }
}

impl CoreConfig {
    /// Defaults overlaid with `WANDERMAP_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values produced by `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?
                .to_string();
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = Path::new(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(path.to_path_buf()));
            }
            config.log_dir = Some(path.to_path_buf());
        }

        if let Some(latency) = read(ENV_LATENCY) {
            config.latency = parse_latency(&latency)?;
        }

        Ok(config)
    }
}

fn parse_latency(value: &str) -> Result<LatencyProfile, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "simulated" => Ok(LatencyProfile::simulated()),
        "instant" | "none" => Ok(LatencyProfile::instant()),
        other => other
            .parse::<u64>()
            .map(|ms| LatencyProfile::uniform(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidLatency(value.to_string())),
    }
}
