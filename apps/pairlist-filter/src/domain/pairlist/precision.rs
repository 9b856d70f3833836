//! Price precision rules.
//!
//! Exchanges publish the minimum price increment of an instrument in one of
//! three modes. Rounding always goes to the nearest representable price, with
//! midpoints rounded away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Symbol};

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Price precision of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum PricePrecision {
    /// Fixed number of decimal places.
    DecimalPlaces(u32),
    /// Fixed number of significant digits.
    SignificantDigits(u32),
    /// Prices must be a multiple of the tick size.
    TickSize(Decimal),
}

impl PricePrecision {
    /// Validate the precision value.
    ///
    /// # Errors
    ///
    /// Returns error for a zero significant digit count or a non-positive tick size.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::DecimalPlaces(_) => Ok(()),
            Self::SignificantDigits(0) => Err(DomainError::InvalidValue {
                field: "precision.significant_digits".to_string(),
                message: "must be at least 1".to_string(),
            }),
            Self::SignificantDigits(_) => Ok(()),
            Self::TickSize(tick) if *tick <= Decimal::ZERO => Err(DomainError::InvalidValue {
                field: "precision.tick_size".to_string(),
                message: format!("tick size {tick} must be positive"),
            }),
            Self::TickSize(_) => Ok(()),
        }
    }

    /// Round a price to this precision.
    ///
    /// Returns `None` if the precision is invalid or the rounding overflows.
    #[must_use]
    pub fn round(&self, price: Decimal) -> Option<Decimal> {
        self.validate().ok()?;
        match *self {
            Self::DecimalPlaces(places) => Some(price.round_dp_with_strategy(places, ROUNDING)),
            Self::SignificantDigits(digits) => round_significant(price, digits),
            Self::TickSize(tick) => round_to_tick(price, tick),
        }
    }
}

fn round_to_tick(price: Decimal, tick: Decimal) -> Option<Decimal> {
    let ticks = price.checked_div(tick)?.round_dp_with_strategy(0, ROUNDING);
    Some(ticks.checked_mul(tick)?.normalize())
}

fn round_significant(price: Decimal, digits: u32) -> Option<Decimal> {
    if price.is_zero() {
        return Some(price);
    }

    let decimals = i64::from(digits) - 1 - magnitude(price.abs());
    if let Ok(places) = u32::try_from(decimals) {
        return Some(price.round_dp_with_strategy(places, ROUNDING));
    }

    // Fewer digits than the integer part: round to a power-of-ten tick
    let tick = (0..decimals.unsigned_abs()).try_fold(Decimal::ONE, |acc, _| {
        acc.checked_mul(Decimal::TEN)
    })?;
    round_to_tick(price, tick)
}

/// Position of the leading digit, i.e. `floor(log10(value))` for `value > 0`.
fn magnitude(mut value: Decimal) -> i64 {
    let mut exponent = 0;
    while value >= Decimal::TEN {
        value /= Decimal::TEN;
        exponent += 1;
    }
    while value < Decimal::ONE {
        value *= Decimal::TEN;
        exponent -= 1;
    }
    exponent
}

/// Failure to round a price for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrecisionError {
    /// No market metadata is known for the symbol.
    #[error("No market precision known for {symbol}")]
    UnknownSymbol {
        /// The unknown symbol.
        symbol: Symbol,
    },

    /// The market precision cannot be applied to the price.
    #[error("Cannot round {price} for {symbol}: {message}")]
    InvalidPrecision {
        /// The symbol being priced.
        symbol: Symbol,
        /// The price that failed to round.
        price: Decimal,
        /// Error details.
        message: String,
    },

    /// Price arithmetic overflowed.
    #[error("Price arithmetic overflowed for {symbol}")]
    Overflow {
        /// The symbol being priced.
        symbol: Symbol,
    },
}
