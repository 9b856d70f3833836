//! Symbol value object for trading pair identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum accepted length of a pair symbol.
const MAX_SYMBOL_LEN: usize = 40;

/// A trading pair symbol.
///
/// Examples:
/// - Spot: "BTC/USDT", "ABC/USD"
/// - Settled futures: "BTC/USDT:USDT"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed. Case is kept: exchanges use mixed-case pair
    /// names such as "kPEPE/USDC:USDC".
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// Create a validated Symbol.
    ///
    /// # Errors
    ///
    /// Returns error if the symbol is empty, too long or contains invalid characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let symbol = Self::new(value);
        symbol.validate()?;
        Ok(symbol)
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the symbol.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty or contains invalid characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol cannot be empty".to_string(),
            });
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol exceeds maximum length".to_string(),
            });
        }

        // Alphanumerics plus the separators exchanges use in unified pair names
        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '-' | '_' | '.'))
        {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: format!("Symbol '{}' contains invalid characters", self.0),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_keeps_case() {
        let s = Symbol::new("kPEPE/USDC:USDC");
        assert_eq!(s.as_str(), "kPEPE/USDC:USDC");
        assert_ne!(Symbol::new("abc/usd"), Symbol::new("ABC/USD"));
    }

    #[test]
    fn symbol_parse_keeps_case() {
        let s = Symbol::parse(" kPEPE/USDC:USDC ").unwrap();
        assert_eq!(s.as_str(), "kPEPE/USDC:USDC");
    }

    #[test]
    fn symbol_new_trims_whitespace() {
        let s = Symbol::new("  ABC/USD ");
        assert_eq!(s.as_str(), "ABC/USD");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("ETH/BTC");
        assert_eq!(format!("{s}"), "ETH/BTC");
    }

    #[test]
    fn symbol_validate_empty() {
        let s = Symbol::new("   ");
        assert!(s.validate().is_err());
    }

    #[test]
    fn symbol_validate_too_long() {
        let s = Symbol::new("A".repeat(MAX_SYMBOL_LEN + 1));
        assert!(s.validate().is_err());
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        assert!(Symbol::new("BTC/US DT").validate().is_err());
        assert!(Symbol::new("BTC!USDT").validate().is_err());
    }

    #[test]
    fn symbol_validate_valid() {
        assert!(Symbol::new("BTC/USDT").validate().is_ok());
        assert!(Symbol::new("BTC/USDT:USDT").validate().is_ok());
        assert!(Symbol::new("1000SHIB/USDT").validate().is_ok());
    }

    #[test]
    fn symbol_parse_rejects_invalid() {
        let Err(err) = Symbol::parse("") else {
            panic!("expected error for empty symbol");
        };
        assert!(err.to_string().contains("symbol"));
        assert!(Symbol::parse("abc/usd").is_ok());
    }

    #[test]
    fn symbol_from_conversions() {
        let s1: Symbol = "abc/usd".into();
        assert_eq!(s1.as_str(), "abc/usd");

        let s2: Symbol = String::from("XYZ/USD").into();
        assert_eq!(s2.as_str(), "XYZ/USD");
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("ABC/USD");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"ABC/USD\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn symbol_hash_works() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Symbol::new("ABC/USD"));
        set.insert(Symbol::new("XYZ/USD"));
        set.insert(Symbol::new(" ABC/USD "));
        set.insert(Symbol::new("abc/usd"));

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn symbol_into_inner() {
        let s = Symbol::new("ABC/USD");
        assert_eq!(s.into_inner(), "ABC/USD");
    }
}
