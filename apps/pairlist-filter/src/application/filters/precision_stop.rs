//! Precision Stop Filter
//!
//! Removes pairs whose stop price cannot be told apart from a price 1% below
//! it once both are rounded to the market's price precision. Such pairs would
//! leave no room between a stop trigger and its limit.

use std::sync::Arc;

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::PairListFilter;
use super::refresh_log::RefreshLog;
use crate::application::ports::{
    FilterNotice, FilterReporterPort, MarketPrecisionPort, NoticeSeverity,
};
use crate::domain::pairlist::{
    ConfigurationError, PairDecision, PrecisionStopSettings, Ticker, TickerSnapshot,
};
use crate::domain::shared::Symbol;

/// Batch size at which pairs are evaluated on the rayon pool.
pub const DEFAULT_PARALLEL_MIN_PAIRS: usize = 64;

const FILTER_NAME: &str = "PrecisionStopFilter";

/// Filter rejecting pairs with too coarse a price precision for stops.
pub struct PrecisionStopFilter<P, R>
where
    P: MarketPrecisionPort,
    R: FilterReporterPort,
{
    settings: PrecisionStopSettings,
    market: Arc<P>,
    reporter: Arc<R>,
    refresh_log: RefreshLog,
    parallel_min_pairs: usize,
}

impl<P, R> PrecisionStopFilter<P, R>
where
    P: MarketPrecisionPort,
    R: FilterReporterPort,
{
    /// Create a filter from validated settings.
    #[must_use]
    pub fn new(settings: PrecisionStopSettings, market: Arc<P>, reporter: Arc<R>) -> Self {
        Self {
            settings,
            market,
            reporter,
            refresh_log: RefreshLog::new(),
            parallel_min_pairs: DEFAULT_PARALLEL_MIN_PAIRS,
        }
    }

    /// Create a filter from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` if `stoploss`, `trailing_stop` or
    /// `trailing_stop_positive` is absent.
    pub fn try_new(
        stoploss: Option<Decimal>,
        trailing_stop: Option<bool>,
        trailing_stop_positive: Option<Decimal>,
        market: Arc<P>,
        reporter: Arc<R>,
    ) -> Result<Self, ConfigurationError> {
        let settings = PrecisionStopSettings::new(stoploss, trailing_stop, trailing_stop_positive)?;
        Ok(Self::new(settings, market, reporter))
    }

    /// Set the batch size at which evaluation switches to the rayon pool.
    #[must_use]
    pub const fn with_parallel_min_pairs(mut self, parallel_min_pairs: usize) -> Self {
        self.parallel_min_pairs = parallel_min_pairs;
        self
    }

    /// False when the configured stoploss is zero.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.settings.enabled()
    }

    /// `1 - |stoploss|`.
    #[must_use]
    pub const fn sanitized_stop_ratio(&self) -> Decimal {
        self.settings.sanitized_stop_ratio()
    }

    /// Positive trailing stop offset.
    #[must_use]
    pub const fn trailing_stop_positive(&self) -> Decimal {
        self.settings.trailing_stop_positive()
    }

    /// Typed decision for one pair. Does not report.
    pub fn decide(&self, ticker: &Ticker) -> PairDecision {
        self.settings.decide(ticker, |price| {
            self.market.price_to_precision(&ticker.symbol, price)
        })
    }

    /// Returns true if the pair stays in the pairlist.
    ///
    /// Rejections are reported once per distinct message per cycle.
    pub fn evaluate_pair(&self, ticker: &Ticker) -> bool {
        let decision = self.decide(ticker);
        let Some(reason) = decision.reason() else {
            return true;
        };

        let message = reason.describe(&ticker.symbol);
        if self.refresh_log.should_emit(&message) {
            let severity = if reason.is_data_problem() {
                NoticeSeverity::Warning
            } else {
                NoticeSeverity::Info
            };
            self.reporter.report(&FilterNotice {
                filter: FILTER_NAME,
                symbol: ticker.symbol.clone(),
                severity,
                message,
            });
        }
        false
    }

    fn keep_pair(&self, pair: &Symbol, tickers: &TickerSnapshot) -> bool {
        tickers
            .get(pair)
            .is_none_or(|ticker| self.evaluate_pair(ticker))
    }

    fn filter_parallel(&self, pairs: &[Symbol], tickers: &TickerSnapshot) -> Vec<Symbol> {
        pairs
            .par_iter()
            .filter(|pair| self.keep_pair(pair, tickers))
            .cloned()
            .collect()
    }

    fn filter_sequential(&self, pairs: &[Symbol], tickers: &TickerSnapshot) -> Vec<Symbol> {
        pairs
            .iter()
            .filter(|pair| self.keep_pair(pair, tickers))
            .cloned()
            .collect()
    }
}

impl<P, R> PairListFilter for PrecisionStopFilter<P, R>
where
    P: MarketPrecisionPort,
    R: FilterReporterPort,
{
    fn name(&self) -> &'static str {
        FILTER_NAME
    }

    fn needs_tickers(&self) -> bool {
        true
    }

    fn short_desc(&self) -> String {
        format!("{FILTER_NAME} - Filtering untradable pairs.")
    }

    fn begin_cycle(&self) {
        self.refresh_log.clear();
    }

    fn filter_pairlist(&self, pairs: &[Symbol], tickers: &TickerSnapshot) -> Vec<Symbol> {
        let parallel = pairs.len() >= self.parallel_min_pairs;
        debug!(
            filter = FILTER_NAME,
            pairs = pairs.len(),
            tickers = tickers.len(),
            parallel,
            "Filtering pairlist"
        );

        // Collecting a parallel iterator into a Vec keeps input order, so both paths agree.
        if parallel {
            self.filter_parallel(pairs, tickers)
        } else {
            self.filter_sequential(pairs, tickers)
        }
    }
}
