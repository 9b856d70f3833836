//! Ticker source backed by a fixed snapshot.

use crate::application::ports::{TickerSourceError, TickerSourcePort};
use crate::domain::pairlist::TickerSnapshot;
use crate::domain::shared::Symbol;

/// Ticker source that always serves the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticTickerSource {
    snapshot: TickerSnapshot,
}

impl StaticTickerSource {
    /// Create a source serving the given snapshot.
    #[must_use]
    pub const fn new(snapshot: TickerSnapshot) -> Self {
        Self { snapshot }
    }
}

impl TickerSourcePort for StaticTickerSource {
    fn fetch_tickers(&self, pairs: &[Symbol]) -> Result<TickerSnapshot, TickerSourceError> {
        Ok(self.snapshot.subset(pairs))
    }
}
