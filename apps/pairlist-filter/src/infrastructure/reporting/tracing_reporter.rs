//! Reporter emitting filter notices as tracing events.

use tracing::{info, warn};

use crate::application::ports::{FilterNotice, FilterReporterPort, NoticeSeverity};

/// Reporter that forwards notices to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Create a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FilterReporterPort for TracingReporter {
    fn report(&self, notice: &FilterNotice) {
        match notice.severity {
            NoticeSeverity::Info => info!(
                filter = notice.filter,
                pair = %notice.symbol,
                "{}",
                notice.message
            ),
            NoticeSeverity::Warning => warn!(
                filter = notice.filter,
                pair = %notice.symbol,
                "{}",
                notice.message
            ),
        }
    }
}
