//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory screening repository and catalogs

pub mod memory;

pub use memory::{InMemoryMovieCatalog, InMemoryRoomCatalog, InMemoryScreeningRepository};
