//! JSON market snapshot loading.
//!
//! ```json
//! {
//!   "markets": { "ABC/USD": { "precision": { "mode": "decimal_places", "value": 2 } } },
//!   "tickers": { "ABC/USD": { "ask": 100.0 } }
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::StaticTickerSource;
use crate::domain::pairlist::{PricePrecision, Ticker, TickerSnapshot};
use crate::domain::shared::Symbol;
use crate::infrastructure::market::InMemoryMarketPrecision;

/// Snapshot loading error.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot file {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or has the wrong shape.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// A market entry is invalid.
    #[error("Invalid market '{symbol}': {message}")]
    InvalidMarket {
        /// Offending symbol as written in the file.
        symbol: String,
        /// Error details.
        message: String,
    },

    /// A ticker entry is invalid.
    #[error("Invalid ticker '{symbol}': {message}")]
    InvalidTicker {
        /// Offending symbol as written in the file.
        symbol: String,
        /// Error details.
        message: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotDto {
    #[serde(default)]
    markets: BTreeMap<String, MarketDto>,
    #[serde(default)]
    tickers: BTreeMap<String, TickerDto>,
}

#[derive(Debug, Deserialize)]
struct MarketDto {
    #[serde(default)]
    precision: Option<PricePrecision>,
}

#[derive(Debug, Deserialize)]
struct TickerDto {
    ask: Decimal,
}

/// Validated market snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketSnapshot {
    /// Markets and their price precision, sorted by symbol.
    pub markets: Vec<(Symbol, Option<PricePrecision>)>,
    /// Tickers keyed by symbol.
    pub tickers: TickerSnapshot,
}

impl MarketSnapshot {
    /// Market precision adapter over the snapshot's markets.
    #[must_use]
    pub fn market_precision(&self) -> InMemoryMarketPrecision {
        InMemoryMarketPrecision::from_markets(self.markets.iter().cloned())
    }

    /// Ticker source serving the snapshot's tickers.
    #[must_use]
    pub fn ticker_source(&self) -> StaticTickerSource {
        StaticTickerSource::new(self.tickers.clone())
    }
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<MarketSnapshot, SnapshotError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&content)
}

/// Parse a snapshot from a JSON string.
pub fn parse_snapshot(content: &str) -> Result<MarketSnapshot, SnapshotError> {
    let dto: SnapshotDto = serde_json::from_str(content)?;

    let mut markets = Vec::with_capacity(dto.markets.len());
    let mut seen_markets = HashSet::with_capacity(dto.markets.len());
    for (raw, market) in dto.markets {
        let symbol = Symbol::parse(raw.as_str()).map_err(|e| SnapshotError::InvalidMarket {
            symbol: raw.clone(),
            message: e.to_string(),
        })?;
        if let Some(precision) = &market.precision {
            precision
                .validate()
                .map_err(|e| SnapshotError::InvalidMarket {
                    symbol: raw.clone(),
                    message: e.to_string(),
                })?;
        }
        if !seen_markets.insert(symbol.clone()) {
            return Err(SnapshotError::InvalidMarket {
                symbol: raw,
                message: "duplicate market after trimming".to_string(),
            });
        }
        markets.push((symbol, market.precision));
    }

    let mut tickers = TickerSnapshot::new();
    for (raw, ticker) in dto.tickers {
        let symbol = Symbol::parse(raw.as_str()).map_err(|e| SnapshotError::InvalidTicker {
            symbol: raw.clone(),
            message: e.to_string(),
        })?;
        if tickers.insert(Ticker::new(symbol, ticker.ask)).is_some() {
            return Err(SnapshotError::InvalidTicker {
                symbol: raw,
                message: "duplicate ticker after trimming".to_string(),
            });
        }
    }

    tracing::debug!(
        markets = markets.len(),
        tickers = tickers.len(),
        "Market snapshot loaded"
    );

    Ok(MarketSnapshot { markets, tickers })
}
