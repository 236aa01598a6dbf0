//! In-memory room and movie catalogs.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MovieId, RoomId};
use crate::domain::seating::SeatLayout;
use crate::ports::{MovieCatalog, RoomCatalog};

/// Room layouts registered by hand.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoomCatalog {
    layouts: Arc<RwLock<HashMap<RoomId, SeatLayout>>>,
}

impl InMemoryRoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a room's layout.
    pub async fn insert(&self, room_id: RoomId, layout: SeatLayout) {
        self.layouts.write().await.insert(room_id, layout);
    }
}

#[async_trait]
impl RoomCatalog for InMemoryRoomCatalog {
    async fn seat_layout(&self, room_id: &RoomId) -> Result<Option<SeatLayout>, DomainError> {
        Ok(self.layouts.read().await.get(room_id).cloned())
    }
}

/// Set of movies that may currently be scheduled.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieCatalog {
    screenable: Arc<RwLock<HashSet<MovieId>>>,
}

impl InMemoryMovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, movie_id: MovieId) {
        self.screenable.write().await.insert(movie_id);
    }

    /// Withdraws a movie from scheduling.
    pub async fn withdraw(&self, movie_id: &MovieId) {
        self.screenable.write().await.remove(movie_id);
    }
}

#[async_trait]
impl MovieCatalog for InMemoryMovieCatalog {
    async fn is_screenable(&self, movie_id: &MovieId) -> Result<bool, DomainError> {
        Ok(self.screenable.read().await.contains(movie_id))
    }
}
