//! Per-cycle message deduplication.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Remembers which messages were already emitted in the current cycle.
#[derive(Debug, Default)]
pub struct RefreshLog {
    seen: Mutex<HashSet<String>>,
}

impl RefreshLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time a message is seen in the current cycle.
    pub fn should_emit(&self, message: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        if seen.contains(message) {
            return false;
        }
        seen.insert(message.to_string())
    }

    /// Forget all messages, starting a new cycle.
    pub fn clear(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of distinct messages emitted in the current cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if nothing was emitted in the current cycle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
