//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with external systems
//! - **Filters**: Pairlist filters built on the domain rules
//! - **Use Cases**: Refresh cycles over a chain of filters

pub mod filters;
pub mod ports;
pub mod use_cases;

pub use filters::*;
pub use ports::*;
pub use use_cases::*;
