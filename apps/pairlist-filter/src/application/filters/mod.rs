//! Pairlist Filters
//!
//! Filters narrow a list of trading pairs once per refresh cycle. Each filter
//! receives the output of the previous one.

mod precision_stop;
mod refresh_log;

pub use precision_stop::{DEFAULT_PARALLEL_MIN_PAIRS, PrecisionStopFilter};
pub use refresh_log::RefreshLog;

use crate::domain::pairlist::TickerSnapshot;
use crate::domain::shared::Symbol;

/// A pairlist filter.
pub trait PairListFilter: Send + Sync {
    /// Filter name used in notices and logs.
    fn name(&self) -> &'static str;

    /// Returns true if the filter needs a ticker snapshot to evaluate pairs.
    fn needs_tickers(&self) -> bool;

    /// Short description for startup diagnostics.
    fn short_desc(&self) -> String;

    /// Reset per-cycle state.
    fn begin_cycle(&self);

    /// Return the retained pairs, in input order.
    fn filter_pairlist(&self, pairs: &[Symbol], tickers: &TickerSnapshot) -> Vec<Symbol>;
}
