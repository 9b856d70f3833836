//! Filter Reporter Port (Driven Port)
//!
//! Observability sink for pairlist filter notices. Filters receive the sink at
//! construction instead of logging to a global logger.

use std::sync::{Mutex, PoisonError};

use crate::domain::shared::Symbol;

/// Severity of a filter notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// Expected outcome, e.g. a pair removed for coarse precision.
    Info,
    /// Unusable input data, e.g. a non-positive ask or unknown market.
    Warning,
}

/// A notice emitted by a pairlist filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNotice {
    /// Name of the emitting filter.
    pub filter: &'static str,
    /// Pair the notice is about.
    pub symbol: Symbol,
    /// Severity.
    pub severity: NoticeSeverity,
    /// Human-readable message.
    pub message: String,
}

/// Port for reporting filter notices.
pub trait FilterReporterPort: Send + Sync {
    /// Report a notice.
    fn report(&self, notice: &FilterNotice);
}

/// No-op reporter.
#[derive(Debug, Clone, Default)]
pub struct NoOpReporter;

impl FilterReporterPort for NoOpReporter {
    fn report(&self, _notice: &FilterNotice) {}
}

/// Reporter that records notices in memory, for testing.
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    notices: Mutex<Vec<FilterNotice>>,
}

impl InMemoryReporter {
    /// Create an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices reported so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<FilterNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of notices reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FilterReporterPort for InMemoryReporter {
    fn report(&self, notice: &FilterNotice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
