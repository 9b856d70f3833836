//! Filter Notice Reporting Adapters

mod tracing_reporter;

pub use tracing_reporter::TracingReporter;
