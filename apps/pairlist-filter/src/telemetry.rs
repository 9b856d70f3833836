//! Tracing Setup
//!
//! Initializes the tracing subscriber from the logging configuration.
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides the configured level when set
//! - `observability.logging.level`: level for this crate (default: `info`)
//! - `observability.logging.format`: `json` or `pretty` (default: `json`)

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Tracing initialization error.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Build the env filter for the given logging configuration.
///
/// `RUST_LOG` wins over the configured level.
///
/// # Errors
///
/// Returns `InvalidFilter` if the configured level is not a valid directive.
pub fn build_env_filter(logging: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = format!("warn,pairlist_filter={}", logging.level.to_lowercase());
    Ok(EnvFilter::try_new(directive)?)
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_env_filter(logging)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if logging.format.eq_ignore_ascii_case("pretty") {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
