// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Pairlist Filter - Rust Core Library
//!
//! Precision-aware filtering of tradable pairs.
//!
//! A pair is only tradable if a stop order and its limit can be placed on
//! distinct prices. On markets with coarse price precision the stop price and
//! a price 1% below it may round onto the same tick; such pairs are removed
//! from the pairlist before any trade is considered.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core rules with no external dependencies
//!   - `shared`: `Symbol` value object, domain errors
//!   - `pairlist`: tickers, price precision, stop/safety-gap rule, decisions
//!
//! - **Application**: Filters and orchestration
//!   - `ports`: `MarketPrecisionPort`, `TickerSourcePort`, `FilterReporterPort`
//!   - `filters`: `PairListFilter` trait, `PrecisionStopFilter`
//!   - `use_cases`: `RefreshPairlistUseCase`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `market`: in-memory market precision metadata
//!   - `snapshot`: JSON market snapshot loading, static ticker source
//!   - `reporting`: filter notices as tracing events

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Filters, use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Ambient Modules
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::pairlist::{
    ConfigurationError, PairDecision, PrecisionError, PrecisionStopSettings, PricePrecision,
    RejectReason, StopKind, Ticker, TickerSnapshot,
};
pub use domain::shared::{DomainError, Symbol};

// Application re-exports
pub use application::filters::{PairListFilter, PrecisionStopFilter};
pub use application::ports::{
    FilterNotice, FilterReporterPort, InMemoryReporter, MarketPrecisionPort, NoOpReporter,
    NoticeSeverity, TickerSourceError, TickerSourcePort,
};
pub use application::use_cases::{RefreshError, RefreshPairlistUseCase, RefreshReport};

// Infrastructure re-exports
pub use infrastructure::market::InMemoryMarketPrecision;
pub use infrastructure::reporting::TracingReporter;
pub use infrastructure::snapshot::{MarketSnapshot, StaticTickerSource, load_snapshot};
