//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod refresh_pairlist;

pub use refresh_pairlist::{RefreshError, RefreshPairlistUseCase, RefreshReport};
