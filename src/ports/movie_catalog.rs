//! Movie catalog port.

use crate::domain::foundation::{DomainError, MovieId};
use async_trait::async_trait;

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Returns true if the movie exists and may be scheduled.
    async fn is_screenable(&self, movie_id: &MovieId) -> Result<bool, DomainError>;
}
