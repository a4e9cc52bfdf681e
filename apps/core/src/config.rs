//! Runtime configuration.
//!
//! Read from `TASKSENSE_*` environment variables. A `.env` file in the working
//! directory is loaded first when present.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, Result};

pub const ENV_LOG: &str = "TASKSENSE_LOG";
pub const ENV_LOG_FORMAT: &str = "TASKSENSE_LOG_FORMAT";
pub const ENV_LEXICON: &str = "TASKSENSE_LEXICON";
pub const ENV_SENTIMENT_EXTRAS: &str = "TASKSENSE_SENTIMENT_EXTRAS";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `tasksense_core=debug`
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Custom keyword lexicon (JSON)
    pub lexicon_path: Option<PathBuf>,
    /// Word → weight overrides layered over the polarity lexicon (JSON)
    pub sentiment_extras_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            lexicon_path: None,
            sentiment_extras_path: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the configuration from the environment.
    pub fn load() -> Result<Self> {
        // Missing .env is the normal case.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read the configuration from the process environment only.
    pub fn from_env() -> Result<Self> {
        let log_filter = non_empty_var(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = match non_empty_var(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            log_filter,
            log_format,
            lexicon_path: non_empty_var(ENV_LEXICON).map(PathBuf::from),
            sentiment_extras_path: non_empty_var(ENV_SENTIMENT_EXTRAS).map(PathBuf::from),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(
            [ENV_LOG, ENV_LOG_FORMAT, ENV_LEXICON, ENV_SENTIMENT_EXTRAS],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config, AppConfig::default());
            },
        );
    }
}
