//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ScreeningRepository` - Versioned screening storage with compare-and-swap updates
//!
//! ## Catalog Ports
//!
//! - `RoomCatalog` - Current seat layout of a room
//! - `MovieCatalog` - Whether a movie may be scheduled

mod movie_catalog;
mod room_catalog;
mod screening_repository;

pub use movie_catalog::MovieCatalog;
pub use room_catalog::RoomCatalog;
pub use screening_repository::{ScreeningRepository, VersionedScreening};
