//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems the filters depend on:
//! market precision metadata, ticker data and an observability sink.

mod filter_reporter_port;
mod market_precision_port;
mod ticker_source_port;

pub use filter_reporter_port::{
    FilterNotice, FilterReporterPort, InMemoryReporter, NoOpReporter, NoticeSeverity,
};
#[cfg(test)]
pub use market_precision_port::MockMarketPrecisionPort;
pub use market_precision_port::MarketPrecisionPort;
pub use ticker_source_port::{TickerSourceError, TickerSourcePort};
