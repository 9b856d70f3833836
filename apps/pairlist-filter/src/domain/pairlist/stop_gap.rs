//! Stop price vs. safety-gap rule.
//!
//! A pair can only be traded if, after rounding to market precision, its stop
//! price still sits strictly above a price 1% below it. On markets with coarse
//! precision both prices collapse onto the same tick (or cross), and a stop
//! order could not be placed reliably.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::decision::{PairDecision, RejectReason, StopKind};
use super::precision::PrecisionError;
use super::ticker::Ticker;
use crate::domain::shared::Symbol;

/// Multiplier producing the safety-gap price below a stop price.
pub const SAFETY_GAP_FACTOR: Decimal = dec!(0.99);

/// Errors raised while building filter settings from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A required key is absent from the top-level configuration.
    #[error(
        "PrecisionStopFilter can only work with {key} defined. Please add the {key} key to your \
         configuration (overwrites eventual strategy settings)."
    )]
    MissingKey {
        /// The missing configuration key.
        key: &'static str,
    },

    /// A key is present but its value cannot be used.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue {
        /// The offending configuration key.
        key: &'static str,
        /// Error details.
        message: String,
    },
}

/// Rounded stop and gap prices for one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopGapCheck {
    /// Stop price rounded to precision.
    pub stop_price: Decimal,
    /// Safety-gap price rounded to precision.
    pub gap_price: Decimal,
}

impl StopGapCheck {
    /// Round `ask * fraction` and its safety gap with the given precision function.
    ///
    /// # Errors
    ///
    /// Returns the precision function's error, or `Overflow` if the raw stop
    /// price cannot be represented.
    pub fn evaluate<F>(
        symbol: &Symbol,
        ask: Decimal,
        fraction: Decimal,
        mut to_precision: F,
    ) -> Result<Self, PrecisionError>
    where
        F: FnMut(Decimal) -> Result<Decimal, PrecisionError>,
    {
        let overflow = || PrecisionError::Overflow {
            symbol: symbol.clone(),
        };
        let raw_stop = ask.checked_mul(fraction).ok_or_else(overflow)?;
        let raw_gap = raw_stop.checked_mul(SAFETY_GAP_FACTOR).ok_or_else(overflow)?;

        Ok(Self {
            stop_price: to_precision(raw_stop)?,
            gap_price: to_precision(raw_gap)?,
        })
    }

    /// Returns true if the stop price sits strictly above the gap price.
    ///
    /// Equality counts as a collision.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.stop_price > self.gap_price
    }
}

/// Validated, immutable settings of the precision stop filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionStopSettings {
    sanitized_stop_ratio: Decimal,
    trailing_stop_positive: Decimal,
    enabled: bool,
}

impl PrecisionStopSettings {
    /// Build settings from the raw configuration values.
    ///
    /// `trailing_stop` is only checked for presence.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` naming the first absent key, checked in the order
    /// `stoploss`, `trailing_stop`, `trailing_stop_positive`.
    pub fn new(
        stoploss: Option<Decimal>,
        trailing_stop: Option<bool>,
        trailing_stop_positive: Option<Decimal>,
    ) -> Result<Self, ConfigurationError> {
        let stoploss = stoploss.ok_or(ConfigurationError::MissingKey { key: "stoploss" })?;
        trailing_stop.ok_or(ConfigurationError::MissingKey {
            key: "trailing_stop",
        })?;
        let trailing_stop_positive = trailing_stop_positive.ok_or(ConfigurationError::MissingKey {
            key: "trailing_stop_positive",
        })?;

        Ok(Self {
            sanitized_stop_ratio: Decimal::ONE - stoploss.abs(),
            trailing_stop_positive,
            enabled: !stoploss.is_zero(),
        })
    }

    /// `1 - |stoploss|`, the fraction of the ask the stop price sits at.
    #[must_use]
    pub const fn sanitized_stop_ratio(&self) -> Decimal {
        self.sanitized_stop_ratio
    }

    /// Positive trailing stop offset.
    #[must_use]
    pub const fn trailing_stop_positive(&self) -> Decimal {
        self.trailing_stop_positive
    }

    /// False when the configured stoploss is zero. Recorded only; checks still run.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Decide whether a pair can carry both a stoploss and a trailing stop.
    ///
    /// `to_precision` rounds a price to the pair's market precision.
    pub fn decide<F>(&self, ticker: &Ticker, mut to_precision: F) -> PairDecision
    where
        F: FnMut(Decimal) -> Result<Decimal, PrecisionError>,
    {
        if !ticker.has_positive_ask() {
            return PairDecision::Rejected(RejectReason::InvalidAsk { ask: ticker.ask });
        }

        let checks = [
            (StopKind::StopLoss, self.sanitized_stop_ratio),
            (StopKind::TrailingStop, self.trailing_stop_positive),
        ];

        for (kind, fraction) in checks {
            let check =
                match StopGapCheck::evaluate(&ticker.symbol, ticker.ask, fraction, &mut to_precision)
                {
                    Ok(check) => check,
                    Err(err) => return PairDecision::Rejected(RejectReason::PrecisionUnavailable(err)),
                };

            tracing::debug!(
                pair = %ticker.symbol,
                check = %kind,
                stop_price = %check.stop_price,
                gap_price = %check.gap_price,
                "Stop gap check"
            );

            if !check.has_room() {
                return PairDecision::Rejected(RejectReason::StopGapCollision {
                    kind,
                    stop_price: check.stop_price,
                    gap_price: check.gap_price,
                });
            }
        }

        PairDecision::Retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pairlist::PricePrecision;
    use proptest::prelude::*;

    fn settings(stoploss: Decimal, trailing: Decimal) -> PrecisionStopSettings {
        PrecisionStopSettings::new(Some(stoploss), Some(true), Some(trailing)).unwrap()
    }

    fn round_with(
        precision: PricePrecision,
    ) -> impl FnMut(Decimal) -> Result<Decimal, PrecisionError> {
        move |price| {
            precision
                .round(price)
                .ok_or_else(|| PrecisionError::InvalidPrecision {
                    symbol: Symbol::new("TEST/USD"),
                    price,
                    message: "rounding failed".to_string(),
                })
        }
    }

    #[test]
    fn missing_keys_are_named() {
        let cases = [
            (None, Some(true), Some(dec!(0.02)), "stoploss"),
            (Some(dec!(-0.1)), None, Some(dec!(0.02)), "trailing_stop"),
            (Some(dec!(-0.1)), Some(true), None, "trailing_stop_positive"),
        ];

        for (stoploss, trailing_stop, positive, key) in cases {
            let err = PrecisionStopSettings::new(stoploss, trailing_stop, positive).unwrap_err();
            assert_eq!(err, ConfigurationError::MissingKey { key });
            assert!(err.to_string().contains(&format!("add the {key} key")));
        }
    }

    #[test]
    fn trailing_stop_value_is_not_validated() {
        assert!(PrecisionStopSettings::new(Some(dec!(-0.1)), Some(false), Some(dec!(0.02))).is_ok());
    }

    #[test]
    fn sanitized_ratio_and_enabled() {
        let s = settings(dec!(-0.10), dec!(0.02));
        assert_eq!(s.sanitized_stop_ratio(), dec!(0.90));
        assert_eq!(s.trailing_stop_positive(), dec!(0.02));
        assert!(s.enabled());

        let zero = settings(Decimal::ZERO, dec!(0.02));
        assert_eq!(zero.sanitized_stop_ratio(), Decimal::ONE);
        assert!(!zero.enabled());
    }

    #[test]
    fn fine_precision_retains_pair() {
        let s = settings(dec!(-0.10), dec!(0.02));
        let ticker = Ticker::new("ABC/USD", dec!(100.00));

        let decision = s.decide(&ticker, round_with(PricePrecision::DecimalPlaces(2)));
        assert_eq!(decision, PairDecision::Retained);
    }

    #[test]
    fn coarse_precision_rejects_on_equal_prices() {
        let s = settings(dec!(-0.10), dec!(0.02));
        let ticker = Ticker::new("XYZ/USD", dec!(10.00));

        let decision = s.decide(&ticker, round_with(PricePrecision::TickSize(dec!(1))));
        assert_eq!(
            decision,
            PairDecision::Rejected(RejectReason::StopGapCollision {
                kind: StopKind::StopLoss,
                stop_price: dec!(9),
                gap_price: dec!(9),
            })
        );
    }

    #[test]
    fn trailing_check_runs_after_stoploss_passes() {
        // stop 900 vs gap 891 passes; trailing 0.2 vs 0.198 both round to 0
        let s = settings(dec!(-0.10), dec!(0.0002));
        let ticker = Ticker::new("BIG/USD", dec!(1000));

        let decision = s.decide(&ticker, round_with(PricePrecision::DecimalPlaces(0)));
        assert_eq!(
            decision,
            PairDecision::Rejected(RejectReason::StopGapCollision {
                kind: StopKind::TrailingStop,
                stop_price: dec!(0),
                gap_price: dec!(0),
            })
        );
    }

    #[test]
    fn non_positive_ask_is_rejected_without_rounding() {
        let s = settings(dec!(-0.10), dec!(0.02));
        let mut calls = 0;
        let decision = s.decide(&Ticker::new("ABC/USD", Decimal::ZERO), |price| {
            calls += 1;
            Ok(price)
        });

        assert_eq!(
            decision,
            PairDecision::Rejected(RejectReason::InvalidAsk { ask: Decimal::ZERO })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn precision_failure_rejects_pair() {
        let s = settings(dec!(-0.10), dec!(0.02));
        let decision = s.decide(&Ticker::new("NOPE/USD", dec!(5)), |_| {
            Err(PrecisionError::UnknownSymbol {
                symbol: Symbol::new("NOPE/USD"),
            })
        });

        assert!(matches!(
            decision,
            PairDecision::Rejected(RejectReason::PrecisionUnavailable(
                PrecisionError::UnknownSymbol { .. }
            ))
        ));
    }

    #[test]
    fn overflowing_stop_price_is_reported() {
        let check = StopGapCheck::evaluate(
            &Symbol::new("HUGE/USD"),
            Decimal::MAX,
            dec!(2),
            |price| Ok(price),
        );
        assert!(matches!(check, Err(PrecisionError::Overflow { .. })));
    }

    #[test]
    fn unrounded_prices_always_have_room() {
        let check =
            StopGapCheck::evaluate(&Symbol::new("ABC/USD"), dec!(0.0001), dec!(0.9), |p| Ok(p))
                .unwrap();
        assert!(check.has_room());
    }

    proptest! {
        #[test]
        fn sanitized_ratio_ignores_stoploss_sign(raw in 1i64..9_999) {
            let stoploss = Decimal::new(raw, 4);
            let negative = settings(-stoploss, dec!(0.02));
            let positive = settings(stoploss, dec!(0.02));
            prop_assert_eq!(negative.sanitized_stop_ratio(), positive.sanitized_stop_ratio());
            prop_assert_eq!(negative.sanitized_stop_ratio(), Decimal::ONE - stoploss);
        }

        #[test]
        fn decision_matches_rounded_comparison(ask_cents in 1i64..10_000_000, places in 0u32..6) {
            let s = settings(dec!(-0.05), dec!(0.01));
            let ticker = Ticker::new("ABC/USD", Decimal::new(ask_cents, 2));
            let precision = PricePrecision::DecimalPlaces(places);

            let stop = precision.round(ticker.ask * dec!(0.95)).unwrap();
            let gap = precision.round(ticker.ask * dec!(0.95) * SAFETY_GAP_FACTOR).unwrap();
            let trailing = precision.round(ticker.ask * dec!(0.01)).unwrap();
            let trailing_gap = precision.round(ticker.ask * dec!(0.01) * SAFETY_GAP_FACTOR).unwrap();
            let expected = stop > gap && trailing > trailing_gap;

            let decision = s.decide(&ticker, round_with(precision));
            prop_assert_eq!(decision.is_retained(), expected);
        }
    }
}
