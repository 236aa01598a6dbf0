//! Screening repository port (write side).
//!
//! Defines the contract for persisting and retrieving Screening aggregates.
//!
//! # Design
//!
//! - **Versioned**: every stored screening carries a version that increases
//!   by one on each successful update
//! - **Compare-and-swap**: `update` only succeeds against the version the
//!   caller loaded, so concurrent bookers of one seat cannot both win
//! - **Integrity**: records that fail to hydrate surface as
//!   `DATA_INTEGRITY_VIOLATION`, never as missing screenings

use crate::domain::foundation::{DomainError, RoomId, ScreeningId};
use crate::domain::screening::Screening;
use async_trait::async_trait;

/// A stored screening together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedScreening {
    pub screening: Screening,
    pub version: u64,
}

impl VersionedScreening {
    pub fn new(screening: Screening, version: u64) -> Self {
        Self { screening, version }
    }
}

/// Repository port for Screening aggregate persistence.
#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    /// Save a new screening, returning its initial version.
    ///
    /// # Errors
    ///
    /// - `CONCURRENCY_CONFLICT` if a screening with this id already exists
    /// - `DATABASE_ERROR` on persistence failure
    async fn save(&self, screening: &Screening) -> Result<u64, DomainError>;

    /// Replace a screening if it is still at `expected_version`.
    ///
    /// Returns the new version.
    ///
    /// # Errors
    ///
    /// - `SCREENING_NOT_FOUND` if the screening doesn't exist
    /// - `CONCURRENCY_CONFLICT` if another writer updated it first
    /// - `DATABASE_ERROR` on persistence failure
    async fn update(&self, screening: &Screening, expected_version: u64)
        -> Result<u64, DomainError>;

    /// Find a screening by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ScreeningId)
        -> Result<Option<VersionedScreening>, DomainError>;

    /// Find every screening held in a room, ordered by start time.
    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Screening>, DomainError>;

    /// Delete a screening (primarily for testing).
    ///
    /// # Errors
    ///
    /// - `SCREENING_NOT_FOUND` if the screening doesn't exist
    async fn delete(&self, id: &ScreeningId) -> Result<(), DomainError>;
}
