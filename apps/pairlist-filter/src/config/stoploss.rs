//! Stoploss keys read by the precision stop filter.
//!
//! These keys live at the top level of the configuration and override any
//! strategy-level values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pairlist::{ConfigurationError, PrecisionStopSettings};

/// Top-level stoploss configuration.
///
/// All keys are optional in the file. The precision stop filter refuses to
/// start without them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoplossConfig {
    /// Signed stoploss fraction, e.g. `-0.10`.
    #[serde(default)]
    pub stoploss: Option<f64>,
    /// Whether a trailing stop is enabled. Only its presence is checked.
    #[serde(default)]
    pub trailing_stop: Option<bool>,
    /// Positive trailing stop offset, e.g. `0.02`.
    #[serde(default)]
    pub trailing_stop_positive: Option<f64>,
}

impl StoplossConfig {
    /// Convert to validated filter settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for a non-finite number and `MissingKey` for
    /// the first absent key.
    pub fn to_precision_stop_settings(&self) -> Result<PrecisionStopSettings, ConfigurationError> {
        let stoploss = self
            .stoploss
            .map(|v| to_decimal("stoploss", v))
            .transpose()?;
        let trailing_stop_positive = self
            .trailing_stop_positive
            .map(|v| to_decimal("trailing_stop_positive", v))
            .transpose()?;

        PrecisionStopSettings::new(stoploss, self.trailing_stop, trailing_stop_positive)
    }
}

fn to_decimal(key: &'static str, value: f64) -> Result<Decimal, ConfigurationError> {
    Decimal::try_from(value).map_err(|e| ConfigurationError::InvalidValue {
        key,
        message: format!("{value} is not a representable number: {e}"),
    })
}
