//! In-memory screening repository.
//!
//! Stores screenings in their persisted record shape and hydrates them on
//! every read, so the same integrity checks run as against a real store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, HydrationError, RoomId, ScreeningId};
use crate::domain::screening::{Screening, ScreeningRecord};
use crate::ports::{ScreeningRepository, VersionedScreening};

#[derive(Debug, Clone)]
struct StoredScreening {
    record: ScreeningRecord,
    version: u64,
}

/// In-memory screening store with per-screening optimistic concurrency.
///
/// All writes take the write lock, so the version check and the replacement
/// in `update` happen atomically.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScreeningRepository {
    screenings: Arc<RwLock<HashMap<ScreeningId, StoredScreening>>>,
}

impl InMemoryScreeningRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw record, bypassing domain validation.
    ///
    /// Used to import existing data. The record is only checked when read.
    ///
    /// # Errors
    ///
    /// `DATA_INTEGRITY_VIOLATION` if the record has no parseable `uid`.
    pub async fn insert_record(
        &self,
        record: ScreeningRecord,
        version: u64,
    ) -> Result<ScreeningId, DomainError> {
        let raw_uid = record.uid.clone().unwrap_or_default();
        let id: ScreeningId = raw_uid.parse().map_err(|_| {
            DomainError::from(HydrationError::invalid_value("Screening", "uid", raw_uid))
        })?;

        self.screenings
            .write()
            .await
            .insert(id, StoredScreening { record, version });
        Ok(id)
    }

    /// Number of stored screenings.
    pub async fn len(&self) -> usize {
        self.screenings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.screenings.read().await.is_empty()
    }

    /// Clears all stored data (useful for tests).
    pub async fn clear(&self) {
        self.screenings.write().await.clear();
    }

    fn hydrate(id: &ScreeningId, stored: &StoredScreening) -> Result<Screening, DomainError> {
        Screening::hydrate(&stored.record).map_err(|err| {
            tracing::error!(screening_id = %id, error = %err, "stored screening failed to hydrate");
            DomainError::from(err).with_detail("screeningUID", id.to_string())
        })
    }

    fn not_found(id: &ScreeningId) -> DomainError {
        DomainError::new(
            ErrorCode::ScreeningNotFound,
            format!("Screening not found: {}", id),
        )
        .with_detail("screeningUID", id.to_string())
    }
}

#[async_trait]
impl ScreeningRepository for InMemoryScreeningRepository {
    async fn save(&self, screening: &Screening) -> Result<u64, DomainError> {
        let mut screenings = self.screenings.write().await;
        if screenings.contains_key(screening.id()) {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Screening {} already exists", screening.id()),
            ));
        }

        screenings.insert(
            *screening.id(),
            StoredScreening {
                record: screening.to_record(),
                version: 1,
            },
        );
        tracing::debug!(screening_id = %screening.id(), "screening stored");
        Ok(1)
    }

    async fn update(
        &self,
        screening: &Screening,
        expected_version: u64,
    ) -> Result<u64, DomainError> {
        let mut screenings = self.screenings.write().await;
        let stored = screenings
            .get_mut(screening.id())
            .ok_or_else(|| Self::not_found(screening.id()))?;

        if stored.version != expected_version {
            tracing::warn!(
                screening_id = %screening.id(),
                expected_version,
                actual_version = stored.version,
                "stale screening write rejected"
            );
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Screening {} is at version {}, expected {}",
                    screening.id(),
                    stored.version,
                    expected_version
                ),
            ));
        }

        stored.record = screening.to_record();
        stored.version += 1;
        Ok(stored.version)
    }

    async fn find_by_id(
        &self,
        id: &ScreeningId,
    ) -> Result<Option<VersionedScreening>, DomainError> {
        let screenings = self.screenings.read().await;
        let Some(stored) = screenings.get(id) else {
            return Ok(None);
        };

        let screening = Self::hydrate(id, stored)?;
        Ok(Some(VersionedScreening::new(screening, stored.version)))
    }

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Screening>, DomainError> {
        let room = room_id.to_string();
        let screenings = self.screenings.read().await;

        let mut found = screenings
            .iter()
            .filter(|(_, stored)| stored.record.room_uid.as_deref() == Some(room.as_str()))
            .map(|(id, stored)| Self::hydrate(id, stored))
            .collect::<Result<Vec<_>, _>>()?;
        found.sort_by(|a, b| a.starts_at().cmp(b.starts_at()));
        Ok(found)
    }

    async fn delete(&self, id: &ScreeningId) -> Result<(), DomainError> {
        self.screenings
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
