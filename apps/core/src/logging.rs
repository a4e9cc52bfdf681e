//! Tracing subscriber setup.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::error::{AppError, Result};

const APP_NAME: &str = "tasksense";

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("Invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                APP_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = AppConfig {
            log_filter: "tasksense_core=loud".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(init_tracing(&config), Err(AppError::Config(_))));
    }
}
