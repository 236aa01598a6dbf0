//! GetSeatAvailabilityHandler - Query handler for seat availability.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{Clock, ScreeningId};
use crate::domain::screening::{Screening, ScreeningError, ScreeningStatus, SeatOccupancy};
use crate::ports::ScreeningRepository;

/// Query for one seat.
#[derive(Debug, Clone)]
pub struct GetSeatAvailabilityQuery {
    pub screening_id: ScreeningId,
    pub row: Option<i64>,
    pub column: Option<String>,
}

/// Query for the whole seat map.
#[derive(Debug, Clone)]
pub struct GetSeatMapQuery {
    pub screening_id: ScreeningId,
}

/// Availability of a single seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAvailabilityView {
    pub screening_id: ScreeningId,
    pub status: ScreeningStatus,
    pub seat: String,
    pub preferential: bool,
    pub available: bool,
}

/// One seat in the seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat: String,
    pub row: u16,
    pub column: char,
    pub preferential: bool,
    pub booked: bool,
}

impl From<&SeatOccupancy> for SeatView {
    fn from(occupancy: &SeatOccupancy) -> Self {
        Self {
            seat: occupancy.seat.identifier().to_string(),
            row: occupancy.seat.row(),
            column: occupancy.seat.column(),
            preferential: occupancy.seat.is_preferential(),
            booked: occupancy.is_booked(),
        }
    }
}

/// Seat map of a screening, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapView {
    pub screening_id: ScreeningId,
    pub status: ScreeningStatus,
    pub capacity: usize,
    pub available: usize,
    pub seats: Vec<SeatView>,
}

/// Handler for seat availability queries.
///
/// Ticket references are never exposed, only whether a seat is taken.
pub struct GetSeatAvailabilityHandler {
    repository: Arc<dyn ScreeningRepository>,
    clock: Arc<dyn Clock>,
}

impl GetSeatAvailabilityHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        query: GetSeatAvailabilityQuery,
    ) -> Result<SeatAvailabilityView, ScreeningError> {
        let screening = self.load(&query.screening_id).await?;
        let seat = screening.find_seat(query.row, query.column.as_deref())?;
        let available = screening.ticket_for(&seat.identifier()).is_none();

        tracing::debug!(
            screening_id = %query.screening_id,
            seat = %seat.identifier(),
            available,
            "seat availability checked"
        );

        Ok(SeatAvailabilityView {
            screening_id: query.screening_id,
            status: screening.status(self.clock.as_ref()),
            seat: seat.identifier().to_string(),
            preferential: seat.is_preferential(),
            available,
        })
    }

    pub async fn handle_seat_map(
        &self,
        query: GetSeatMapQuery,
    ) -> Result<SeatMapView, ScreeningError> {
        let screening = self.load(&query.screening_id).await?;
        let seats: Vec<SeatView> = screening.seat_map().iter().map(SeatView::from).collect();

        tracing::debug!(
            screening_id = %query.screening_id,
            seats = seats.len(),
            "seat map loaded"
        );

        Ok(SeatMapView {
            screening_id: query.screening_id,
            status: screening.status(self.clock.as_ref()),
            capacity: screening.seat_layout().capacity(),
            available: screening.available_seat_count(),
            seats,
        })
    }

    async fn load(&self, id: &ScreeningId) -> Result<Screening, ScreeningError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|found| found.screening)
            .ok_or_else(|| ScreeningError::not_found(*id))
    }
}
