//! Market Precision Port (Driven Port)
//!
//! Interface for rounding prices to an instrument's minimum price increment.

use rust_decimal::Decimal;

use crate::domain::pairlist::PrecisionError;
use crate::domain::shared::Symbol;

/// Port for market price precision metadata.
///
/// Implementations must be deterministic for a fixed `(symbol, price)` and
/// must not block.
#[cfg_attr(test, mockall::automock)]
pub trait MarketPrecisionPort: Send + Sync {
    /// Round a price to the symbol's price precision.
    fn price_to_precision(&self, symbol: &Symbol, price: Decimal) -> Result<Decimal, PrecisionError>;
}
