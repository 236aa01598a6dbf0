//! In-memory adapters.
//!
//! Reference implementations of the ports, used by tests and by embedders
//! that do not need durable storage.

mod catalogs;
mod screening_repository;

pub use catalogs::{InMemoryMovieCatalog, InMemoryRoomCatalog};
pub use screening_repository::InMemoryScreeningRepository;
