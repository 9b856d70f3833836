//! Pairlist configuration.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Symbol};

/// Pairlist configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairlistConfig {
    /// Candidate pairs, in priority order.
    #[serde(default)]
    pub pairs: Vec<String>,
    /// Path to the JSON market snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Batch size at which pairs are evaluated in parallel.
    #[serde(default = "default_parallel_min_pairs")]
    pub parallel_min_pairs: usize,
}

impl Default for PairlistConfig {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            snapshot_path: default_snapshot_path(),
            parallel_min_pairs: default_parallel_min_pairs(),
        }
    }
}

impl PairlistConfig {
    /// Parse the configured pairs into symbols, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first malformed pair.
    pub fn symbols(&self) -> Result<Vec<Symbol>, DomainError> {
        self.pairs.iter().map(|p| Symbol::parse(p.as_str())).collect()
    }
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}

const fn default_parallel_min_pairs() -> usize {
    crate::application::filters::DEFAULT_PARALLEL_MIN_PAIRS
}
