//! Ticker Source Port (Driven Port)
//!
//! Interface for obtaining the per-cycle ticker snapshot.

use crate::domain::pairlist::TickerSnapshot;
use crate::domain::shared::Symbol;

/// Ticker source error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TickerSourceError {
    /// Tickers could not be obtained for this cycle.
    #[error("Tickers unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for fetching a ticker snapshot.
pub trait TickerSourcePort: Send + Sync {
    /// Fetch tickers for the given pairs.
    ///
    /// Pairs without market data are absent from the snapshot.
    fn fetch_tickers(&self, pairs: &[Symbol]) -> Result<TickerSnapshot, TickerSourceError>;
}
