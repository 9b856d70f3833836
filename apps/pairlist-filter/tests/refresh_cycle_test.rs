//! Integration Tests for Refresh Cycles
//!
//! Tests the full flow from config YAML + snapshot JSON → filter → refresh
//! use case, using files on disk.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use pairlist_filter::config::load_config;
use pairlist_filter::infrastructure::snapshot::load_snapshot;
use pairlist_filter::{
    InMemoryReporter, NoticeSeverity, PairListFilter, PrecisionStopFilter,
    RefreshPairlistUseCase, Symbol, Ticker,
};

// =============================================================================
// Fixtures
// =============================================================================

const SNAPSHOT: &str = r#"{
    "markets": {
        "ABC/USD": { "precision": { "mode": "decimal_places", "value": 2 } },
        "XYZ/USD": { "precision": { "mode": "tick_size", "value": "1" } },
        "SIG/USD": { "precision": { "mode": "significant_digits", "value": 2 } },
        "RAW/USD": { "precision": null },
        "ZRO/USD": { "precision": { "mode": "decimal_places", "value": 2 } }
    },
    "tickers": {
        "ABC/USD": { "ask": "100.00" },
        "XYZ/USD": { "ask": "10.00" },
        "SIG/USD": { "ask": "1234" },
        "RAW/USD": { "ask": "0.5" },
        "ZRO/USD": { "ask": "0" },
        "GHO/USD": { "ask": "3" }
    }
}"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn config_yaml(snapshot_path: &str) -> String {
    format!(
        r"
stoploss: -0.10
trailing_stop: true
trailing_stop_positive: 0.02
pairlist:
  pairs: [ABC/USD, XYZ/USD, SIG/USD, RAW/USD, ZRO/USD, GHO/USD, NEW/USD]
  snapshot_path: {snapshot_path}
  parallel_min_pairs: 4
"
    )
}

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|name| Symbol::new(*name)).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn refresh_cycle_from_files() {
    let snapshot_file = write_temp(SNAPSHOT);
    let config_file = write_temp(&config_yaml(&snapshot_file.path().display().to_string()));

    let config = load_config(Some(config_file.path().to_str().unwrap())).unwrap();
    let snapshot = load_snapshot(&config.pairlist.snapshot_path).unwrap();
    let reporter = Arc::new(InMemoryReporter::new());

    let filter = PrecisionStopFilter::new(
        config.stoploss.to_precision_stop_settings().unwrap(),
        Arc::new(snapshot.market_precision()),
        Arc::clone(&reporter),
    )
    .with_parallel_min_pairs(config.pairlist.parallel_min_pairs);
    let filters: Vec<Box<dyn PairListFilter>> = vec![Box::new(filter)];
    let use_case = RefreshPairlistUseCase::new(filters, Arc::new(snapshot.ticker_source()));

    let report = use_case.execute(&config.pairlist.symbols().unwrap()).unwrap();

    // ABC: 90.00 > 89.10 and 2.00 > 1.98
    // XYZ: 9 <= 9 at tick 1
    // SIG: 1100 > 1100? no, 1110.6 and 1099.494 both round to 1100
    // RAW: no rounding, always has room
    // ZRO: zero ask
    // GHO: ticker without market
    // NEW: no ticker, passes through
    assert_eq!(report.cycle, 1);
    assert_eq!(report.retained, symbols(&["ABC/USD", "RAW/USD", "NEW/USD"]));
    assert_eq!(
        report.removed,
        symbols(&["XYZ/USD", "SIG/USD", "ZRO/USD", "GHO/USD"])
    );

    let notices = reporter.notices();
    assert_eq!(notices.len(), 4);
    let warnings: Vec<&Symbol> = notices
        .iter()
        .filter(|n| n.severity == NoticeSeverity::Warning)
        .map(|n| &n.symbol)
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains(&&Symbol::new("ZRO/USD")));
    assert!(warnings.contains(&&Symbol::new("GHO/USD")));
    assert!(notices.iter().any(|n| n.message
        == "Removed XYZ/USD from whitelist, because stop price 9 would be <= stop limit 9"));
}

#[test]
fn missing_trailing_key_stops_filter_construction() {
    let snapshot_file = write_temp(SNAPSHOT);
    let yaml = format!(
        "stoploss: -0.10\ntrailing_stop: true\npairlist:\n  snapshot_path: {}\n",
        snapshot_file.path().display()
    );
    let config_file = write_temp(&yaml);

    let config = load_config(Some(config_file.path().to_str().unwrap())).unwrap();
    let snapshot = load_snapshot(&config.pairlist.snapshot_path).unwrap();

    let Err(err) = config.stoploss.to_precision_stop_settings() else {
        panic!("expected configuration error");
    };
    assert_eq!(
        err.to_string(),
        "PrecisionStopFilter can only work with trailing_stop_positive defined. Please add the \
         trailing_stop_positive key to your configuration (overwrites eventual strategy settings)."
    );
    assert!(!snapshot.tickers.is_empty());
}

#[test]
fn decisions_are_stable_across_cycles() {
    let snapshot = pairlist_filter::infrastructure::snapshot::parse_snapshot(SNAPSHOT).unwrap();
    let filter = PrecisionStopFilter::try_new(
        Some(dec!(-0.10)),
        Some(true),
        Some(dec!(0.02)),
        Arc::new(snapshot.market_precision()),
        Arc::new(InMemoryReporter::new()),
    )
    .unwrap();

    let ticker = Ticker::new("XYZ/USD", dec!(10.00));
    let first = filter.decide(&ticker);
    filter.begin_cycle();
    let second = filter.decide(&ticker);

    assert_eq!(first, second);
    assert!(!first.is_retained());
}
