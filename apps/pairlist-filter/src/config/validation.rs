//! Configuration validation.

use super::{Config, ConfigError};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Non-fatal findings about a loaded configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StartupValidation {
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl StartupValidation {
    /// Returns true if there is nothing to warn about.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Reject configuration values that can never work.
pub(super) fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if let Err(e) = config.pairlist.symbols() {
        return Err(ConfigError::ValidationError(format!("pairlist.pairs: {e}")));
    }

    if config.pairlist.parallel_min_pairs == 0 {
        return Err(ConfigError::ValidationError(
            "pairlist.parallel_min_pairs must be at least 1".to_string(),
        ));
    }

    if config.pairlist.snapshot_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "pairlist.snapshot_path must not be empty".to_string(),
        ));
    }

    let logging = &config.observability.logging;
    if !VALID_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {VALID_LOG_LEVELS:?}"
        )));
    }
    if !VALID_LOG_FORMATS.contains(&logging.format.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {VALID_LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

/// Collect warnings about a configuration that loads but may not do what
/// the operator expects.
#[must_use]
pub fn check_startup(config: &Config) -> StartupValidation {
    let mut warnings = Vec::new();

    if config.pairlist.pairs.is_empty() {
        warnings.push("pairlist.pairs is empty; nothing will be filtered".to_string());
    }

    if config.stoploss.stoploss == Some(0.0) {
        warnings.push("stoploss is 0; stop checks still run against a stop at the ask".to_string());
    }

    StartupValidation { warnings }
}
