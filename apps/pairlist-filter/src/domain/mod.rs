//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`pairlist`]: Tickers, price precision and the stop/safety-gap rule
//! - [`shared`]: Symbol and domain errors

pub mod pairlist;
pub mod shared;
