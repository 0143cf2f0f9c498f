//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and CLI arguments.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid barriers: lower {lower} must be below upper {upper}")]
    InvalidBarrier { lower: f64, upper: f64 },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Default curve parameters, used when a flag is not given
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveDefaults {
    pub lower_barrier: f64,
    pub upper_barrier: f64,
    pub base_yield: f64,
    pub max_yield: f64,
    pub participation_rate: f64,
}

impl Default for CurveDefaults {
    fn default() -> Self {
        Self {
            lower_barrier: -0.1,
            upper_barrier: 0.1,
            base_yield: 0.04,
            max_yield: 0.12,
            participation_rate: 1.0,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Product tag used when `--variant` is omitted
    pub default_variant: String,
    /// Curve parameter defaults
    pub curve: CurveDefaults,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            default_variant: "rEARN".to_string(),
            curve: CurveDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `EARN_*` variables supplied by `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("EARN_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(variant) = lookup("EARN_VARIANT") {
            self.default_variant = variant;
        }

        let fields: [(&str, &mut f64); 5] = [
            ("EARN_LOWER_BARRIER", &mut self.curve.lower_barrier),
            ("EARN_UPPER_BARRIER", &mut self.curve.upper_barrier),
            ("EARN_BASE_YIELD", &mut self.curve.base_yield),
            ("EARN_MAX_YIELD", &mut self.curve.max_yield),
            ("EARN_PARTICIPATION_RATE", &mut self.curve.participation_rate),
        ];
        for (name, field) in fields {
            if let Some(raw) = lookup(name) {
                *field = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::EnvError(format!("{}={} is not a number", name, raw)))?;
            }
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lower, upper) = (self.curve.lower_barrier, self.curve.upper_barrier);
        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return Err(ConfigError::InvalidBarrier { lower, upper });
        }
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments (applied per command)
/// 2. Environment variables
/// 3. Config file (skipped when absent)
/// 4. Default values
pub fn build_config(config_file: &Path) -> Result<CliConfig, ConfigError> {
    load_config(config_file, |name| std::env::var(name).ok())
}

fn load_config<F>(config_file: &Path, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if config_file.exists() {
        CliConfig::from_file(config_file)?
    } else {
        CliConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.validate()?;

    Ok(config)
}
