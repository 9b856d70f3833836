//! In-memory market precision metadata.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use rust_decimal::Decimal;

use crate::application::ports::MarketPrecisionPort;
use crate::domain::pairlist::{PrecisionError, PricePrecision};
use crate::domain::shared::Symbol;

/// In-memory implementation of `MarketPrecisionPort`.
///
/// A market registered with `None` precision imposes no rounding.
#[derive(Debug, Default)]
pub struct InMemoryMarketPrecision {
    markets: RwLock<HashMap<Symbol, Option<PricePrecision>>>,
}

impl InMemoryMarketPrecision {
    /// Create an adapter with no markets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter from `(symbol, precision)` pairs.
    pub fn from_markets<I>(markets: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, Option<PricePrecision>)>,
    {
        Self {
            markets: RwLock::new(markets.into_iter().collect()),
        }
    }

    /// Register or replace a market.
    pub fn insert(&self, symbol: Symbol, precision: Option<PricePrecision>) {
        self.markets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol, precision);
    }

    /// Number of known markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if no markets are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MarketPrecisionPort for InMemoryMarketPrecision {
    fn price_to_precision(&self, symbol: &Symbol, price: Decimal) -> Result<Decimal, PrecisionError> {
        let markets = self.markets.read().unwrap_or_else(PoisonError::into_inner);
        let precision = markets
            .get(symbol)
            .ok_or_else(|| PrecisionError::UnknownSymbol {
                symbol: symbol.clone(),
            })?;

        let Some(precision) = precision else {
            return Ok(price);
        };

        precision.validate().map_err(|e| PrecisionError::InvalidPrecision {
            symbol: symbol.clone(),
            price,
            message: e.to_string(),
        })?;

        precision.round(price).ok_or_else(|| PrecisionError::Overflow {
            symbol: symbol.clone(),
        })
    }
}
