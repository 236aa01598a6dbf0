//! Room catalog port.
//!
//! Rooms are managed elsewhere. Screenings only need the seat layout a room
//! has at the moment a screening is created; later layout changes never
//! reach existing screenings.

use crate::domain::foundation::{DomainError, RoomId};
use crate::domain::seating::SeatLayout;
use async_trait::async_trait;

#[async_trait]
pub trait RoomCatalog: Send + Sync {
    /// Current seat layout of a room.
    ///
    /// Returns `None` if the room is unknown.
    async fn seat_layout(&self, room_id: &RoomId) -> Result<Option<SeatLayout>, DomainError>;
}
