/// Configuration loading: defaults, optional TOML file, then WORKCAL_* environment
use std::path::Path;
use tracing::warn;

use crate::error::{CalendarError, Result};
use crate::types::AppConfig;

pub const DEFAULT_CONFIG_PATH: &str = "workcal.toml";
pub const ENV_PREFIX: &str = "WORKCAL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let settings = ::config::Config::builder()
        .add_source(::config::File::from(path).required(false))
        .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .map_err(|e| CalendarError::ConfigError(format!("Failed to read config: {}", e)))?;

    let config: AppConfig = settings
        .try_deserialize()
        .map_err(|e| CalendarError::ConfigError(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

/// Parse configuration from TOML text only, without file or environment lookups
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)
        .map_err(|e| CalendarError::ConfigError(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.title.trim().is_empty() {
        return Err(CalendarError::ConfigError("title is empty".to_string()));
    }

    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(CalendarError::ConfigError(format!(
            "Invalid log_level: {}",
            config.log_level
        )));
    }

    if config.output.as_os_str().is_empty() {
        return Err(CalendarError::ConfigError("output path is empty".to_string()));
    }

    // Allowed, but worth pointing out
    if config.range().is_inverted() {
        warn!(
            "start_date {} is after end_date {} - the calendar will count no days",
            config.start_date, config.end_date
        );
    }

    Ok(())
}
