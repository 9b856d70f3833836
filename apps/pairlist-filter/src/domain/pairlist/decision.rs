//! Pair decisions produced by pairlist filters.

use std::fmt;

use rust_decimal::Decimal;

use super::precision::PrecisionError;
use crate::domain::shared::Symbol;

/// Which stop price a safety-gap check was run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Regular stoploss derived from the sanitized stop ratio.
    StopLoss,
    /// Trailing stop derived from the positive trailing offset.
    TrailingStop,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopLoss => write!(f, "stop limit"),
            Self::TrailingStop => write!(f, "trailing stop limit"),
        }
    }
}

/// Why a pair was removed from the pairlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The rounded stop price does not sit strictly above its rounded safety gap.
    StopGapCollision {
        /// Stop the check was run for.
        kind: StopKind,
        /// Stop price rounded to market precision.
        stop_price: Decimal,
        /// Safety-gap price rounded to market precision.
        gap_price: Decimal,
    },

    /// The ask price is zero or negative.
    InvalidAsk {
        /// The offending ask price.
        ask: Decimal,
    },

    /// Market precision could not be applied.
    PrecisionUnavailable(PrecisionError),
}

impl RejectReason {
    /// Returns true for rejections caused by unusable input data rather than precision.
    #[must_use]
    pub const fn is_data_problem(&self) -> bool {
        matches!(self, Self::InvalidAsk { .. } | Self::PrecisionUnavailable(_))
    }

    /// Human-readable removal message for a pair.
    #[must_use]
    pub fn describe(&self, symbol: &Symbol) -> String {
        match self {
            Self::StopGapCollision {
                kind,
                stop_price,
                gap_price,
            } => format!(
                "Removed {symbol} from whitelist, because stop price {stop_price} would be <= {kind} {gap_price}"
            ),
            Self::InvalidAsk { ask } => format!(
                "Removed {symbol} from whitelist, because ask price {ask} is not positive"
            ),
            Self::PrecisionUnavailable(err) => format!(
                "Removed {symbol} from whitelist, because price precision is unavailable: {err}"
            ),
        }
    }
}

/// Outcome of evaluating one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairDecision {
    /// The pair stays in the pairlist.
    Retained,
    /// The pair is removed from the pairlist.
    Rejected(RejectReason),
}

impl PairDecision {
    /// Returns true if the pair stays in the pairlist.
    #[must_use]
    pub const fn is_retained(&self) -> bool {
        matches!(self, Self::Retained)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&RejectReason> {
        match self {
            Self::Retained => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}
