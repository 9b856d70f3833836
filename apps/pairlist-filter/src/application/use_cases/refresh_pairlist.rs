//! Refresh Pairlist Use Case

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::application::filters::PairListFilter;
use crate::application::ports::{TickerSourceError, TickerSourcePort};
use crate::domain::pairlist::TickerSnapshot;
use crate::domain::shared::Symbol;

/// Refresh cycle error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    /// Tickers could not be fetched; no filter was evaluated.
    #[error("Refresh cycle {cycle} aborted: {source}")]
    TickersUnavailable {
        /// Cycle number.
        cycle: u64,
        /// Underlying ticker source error.
        #[source]
        source: TickerSourceError,
    },
}

/// Outcome of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// When the cycle started.
    pub started_at: DateTime<Utc>,
    /// Pairs retained by the filter chain, in input order.
    pub retained: Vec<Symbol>,
    /// Input pairs removed by the filter chain, in input order.
    pub removed: Vec<Symbol>,
}

/// Use case running a chain of pairlist filters over a ticker snapshot.
pub struct RefreshPairlistUseCase<T>
where
    T: TickerSourcePort,
{
    filters: Vec<Box<dyn PairListFilter>>,
    ticker_source: Arc<T>,
    cycle: AtomicU64,
}

impl<T> RefreshPairlistUseCase<T>
where
    T: TickerSourcePort,
{
    /// Create a new RefreshPairlistUseCase.
    pub fn new(filters: Vec<Box<dyn PairListFilter>>, ticker_source: Arc<T>) -> Self {
        let use_case = Self {
            filters,
            ticker_source,
            cycle: AtomicU64::new(0),
        };
        for message in use_case.startup_messages() {
            info!("{message}");
        }
        use_case
    }

    /// Short descriptions of the configured filters, in chain order.
    pub fn startup_messages(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.short_desc()).collect()
    }

    /// Number of cycles started so far.
    pub fn cycles(&self) -> u64 {
        self.cycle.load(Ordering::Relaxed)
    }

    /// Execute one refresh cycle.
    pub fn execute(&self, pairs: &[Symbol]) -> Result<RefreshReport, RefreshError> {
        let cycle = self.cycle.fetch_add(1, Ordering::Relaxed) + 1;
        let started_at = Utc::now();

        for filter in &self.filters {
            filter.begin_cycle();
        }

        let tickers = if self.filters.iter().any(|f| f.needs_tickers()) {
            self.ticker_source.fetch_tickers(pairs).map_err(|source| {
                warn!(cycle, error = %source, "Ticker fetch failed, skipping refresh");
                RefreshError::TickersUnavailable { cycle, source }
            })?
        } else {
            TickerSnapshot::new()
        };

        let mut retained = pairs.to_vec();
        for filter in &self.filters {
            retained = filter.filter_pairlist(&retained, &tickers);
        }

        let kept: HashSet<&Symbol> = retained.iter().collect();
        let removed: Vec<Symbol> = pairs
            .iter()
            .filter(|pair| !kept.contains(pair))
            .cloned()
            .collect();

        info!(
            cycle,
            input = pairs.len(),
            retained = retained.len(),
            removed = removed.len(),
            "Pairlist refreshed"
        );

        Ok(RefreshReport {
            cycle,
            started_at,
            retained,
            removed,
        })
    }
}
