//! Ticker value objects.
//!
//! A [`Ticker`] carries exactly the quote fields the pairlist filters consume.
//! A [`TickerSnapshot`] is the per-cycle mapping from pair to ticker.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

/// Best-ask quote for a trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    /// Trading pair.
    pub symbol: Symbol,
    /// Best ask price.
    pub ask: Decimal,
}

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, ask: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            ask,
        }
    }

    /// Returns true if the ask price is strictly positive.
    #[must_use]
    pub fn has_positive_ask(&self) -> bool {
        self.ask > Decimal::ZERO
    }
}

/// Snapshot of tickers for one evaluation cycle, keyed by pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerSnapshot {
    tickers: HashMap<Symbol, Ticker>,
}

impl TickerSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ticker, replacing any previous ticker for the same pair.
    pub fn insert(&mut self, ticker: Ticker) -> Option<Ticker> {
        self.tickers.insert(ticker.symbol.clone(), ticker)
    }

    /// Get the ticker for a pair.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&Ticker> {
        self.tickers.get(symbol)
    }

    /// Returns true if the snapshot has a ticker for the pair.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.tickers.contains_key(symbol)
    }

    /// Number of tickers in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Returns true if the snapshot holds no tickers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Restrict the snapshot to the given pairs.
    ///
    /// Pairs without a ticker are simply absent from the result.
    #[must_use]
    pub fn subset(&self, symbols: &[Symbol]) -> Self {
        symbols
            .iter()
            .filter_map(|symbol| self.tickers.get(symbol).cloned())
            .collect()
    }
}

impl FromIterator<Ticker> for TickerSnapshot {
    fn from_iter<I: IntoIterator<Item = Ticker>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for ticker in iter {
            snapshot.insert(ticker);
        }
        snapshot
    }
}
