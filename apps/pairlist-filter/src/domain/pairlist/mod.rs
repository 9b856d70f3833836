//! Pairlist Bounded Context
//!
//! Market data and rules used to decide which trading pairs stay tradable:
//!
//! - [`Ticker`] / [`TickerSnapshot`]: per-cycle quote data
//! - [`PricePrecision`]: market price increments and rounding
//! - [`PrecisionStopSettings`]: the stop price vs. safety-gap rule
//! - [`PairDecision`]: retained or rejected, with a reason

mod decision;
mod precision;
mod stop_gap;
mod ticker;

pub use decision::{PairDecision, RejectReason, StopKind};
pub use precision::{PrecisionError, PricePrecision};
pub use stop_gap::{ConfigurationError, PrecisionStopSettings, SAFETY_GAP_FACTOR, StopGapCheck};
pub use ticker::{Ticker, TickerSnapshot};
