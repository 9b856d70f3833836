//! Market Snapshot Adapters
//!
//! Loads market precision metadata and tickers from a JSON snapshot file and
//! serves them through the application ports.

mod loader;
mod static_source;

pub use loader::{MarketSnapshot, SnapshotError, load_snapshot, parse_snapshot};
pub use static_source::StaticTickerSource;
