//! Market Precision Adapters
//!
//! Implementations of `MarketPrecisionPort`.

mod in_memory;

pub use in_memory::InMemoryMarketPrecision;
