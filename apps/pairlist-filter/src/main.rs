//! Pairlist Filter Binary
//!
//! Runs one refresh cycle of the precision stop filter over a JSON market
//! snapshot and prints the retained pairs as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pairlist-filter -- config.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `PAIRLIST_CONFIG`: Config file path when no argument is given (default: config.yaml)
//! - `RUST_LOG`: Overrides the configured log level

use std::sync::Arc;

use pairlist_filter::config::{Config, check_startup, load_config};
use pairlist_filter::infrastructure::snapshot::load_snapshot;
use pairlist_filter::telemetry::init_tracing;
use pairlist_filter::{
    PairListFilter, PrecisionStopFilter, RefreshPairlistUseCase, RefreshReport, TracingReporter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    let config_path = config_path();
    let config = load_config(Some(config_path.as_str()))?;
    init_tracing(&config.observability.logging)?;

    tracing::info!(config = %config_path, "Starting pairlist filter");
    log_config(&config);

    let report = run_cycle(&config)?;

    println!("{}", serde_json::to_string_pretty(&report.retained)?);
    Ok(())
}

/// Build the filter chain and run one refresh cycle.
fn run_cycle(config: &Config) -> Result<RefreshReport, Box<dyn std::error::Error>> {
    let settings = config.stoploss.to_precision_stop_settings()?;
    let pairs = config.pairlist.symbols()?;
    let snapshot = load_snapshot(&config.pairlist.snapshot_path)?;

    let filter = PrecisionStopFilter::new(
        settings,
        Arc::new(snapshot.market_precision()),
        Arc::new(TracingReporter::new()),
    )
    .with_parallel_min_pairs(config.pairlist.parallel_min_pairs);

    tracing::info!(
        enabled = filter.is_enabled(),
        sanitized_stop_ratio = %filter.sanitized_stop_ratio(),
        trailing_stop_positive = %filter.trailing_stop_positive(),
        "{} configured",
        filter.name()
    );

    let filters: Vec<Box<dyn PairListFilter>> = vec![Box::new(filter)];
    let use_case = RefreshPairlistUseCase::new(filters, Arc::new(snapshot.ticker_source()));

    let report = use_case.execute(&pairs)?;

    tracing::info!(
        cycle = report.cycle,
        started_at = %report.started_at,
        retained = report.retained.len(),
        removed = ?report.removed,
        "Refresh cycle complete"
    );

    Ok(report)
}

/// Config path from the first argument, `PAIRLIST_CONFIG`, or the default.
fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAIRLIST_CONFIG").ok())
        .unwrap_or_else(|| "config.yaml".to_string())
}

/// Log configuration summary (without sensitive values).
fn log_config(config: &Config) {
    tracing::info!(
        pairs = config.pairlist.pairs.len(),
        snapshot_path = %config.pairlist.snapshot_path,
        parallel_min_pairs = config.pairlist.parallel_min_pairs,
        log_format = %config.observability.logging.format,
        "Configuration loaded"
    );

    for warning in check_startup(config).warnings {
        tracing::warn!("{warning}");
    }
}

/// Load .env from the current directory, falling back to ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
