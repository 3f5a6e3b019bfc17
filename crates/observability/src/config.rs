use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log line format.
pub const LOG_FORMAT_ENV: &str = "RETAIL_LOG_FORMAT";

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log format {0:?} (expected json, pretty or compact)")]
    InvalidLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_format_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let format = match value {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => LogFormat::default(),
        };
        Ok(Self {
            format,
            ..Self::default()
        })
    }
}
