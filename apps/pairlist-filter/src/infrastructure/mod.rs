//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `market/`: Market price precision metadata
//!   - `snapshot/`: JSON market snapshot loading and ticker source
//!   - `reporting/`: Filter notices as tracing events

pub mod market;
pub mod reporting;
pub mod snapshot;
