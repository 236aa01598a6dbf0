//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod screening;

pub use screening::*;
