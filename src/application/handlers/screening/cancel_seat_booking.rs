//! CancelSeatBookingHandler - Command handler for releasing a booked seat.

use std::sync::Arc;

use crate::domain::foundation::{Clock, ScreeningId, TicketId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::domain::seating::SeatIdentifier;
use crate::ports::ScreeningRepository;

use super::versioned_write::VersionedWriter;

/// Command to release one booked seat.
#[derive(Debug, Clone)]
pub struct CancelSeatBookingCommand {
    pub screening_id: ScreeningId,
    pub row: Option<i64>,
    pub column: Option<String>,
}

/// Result of a successful release.
#[derive(Debug, Clone)]
pub struct CancelSeatBookingResult {
    pub screening: Screening,
    pub seat: SeatIdentifier,
    /// Ticket the seat was held by, for refund collaborators.
    pub released_ticket: TicketId,
    pub version: u64,
}

/// Handler for releasing seats.
pub struct CancelSeatBookingHandler {
    writer: VersionedWriter,
    clock: Arc<dyn Clock>,
}

impl CancelSeatBookingHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            writer: VersionedWriter::new(repository),
            clock,
        }
    }

    pub fn with_max_write_attempts(mut self, max_attempts: u32) -> Self {
        self.writer.set_max_attempts(max_attempts);
        self
    }

    pub async fn handle(
        &self,
        cmd: CancelSeatBookingCommand,
    ) -> Result<CancelSeatBookingResult, ScreeningError> {
        let clock = self.clock.as_ref();
        let outcome = self
            .writer
            .apply(&cmd.screening_id, "cancel_seat_booking", |screening| {
                screening.cancel_seat_booking(cmd.row, cmd.column.as_deref(), clock)
            })
            .await?;

        let (seat, released_ticket) = outcome
            .previous
            .booked_seats()
            .iter()
            .find(|(seat, _)| !outcome.screening.booked_seats().contains_key(seat))
            .map(|(seat, ticket)| (*seat, *ticket))
            .ok_or_else(|| ScreeningError::integrity("release did not remove a ledger entry"))?;

        tracing::info!(
            screening_id = %cmd.screening_id,
            seat = %seat,
            ticket_id = %released_ticket,
            version = outcome.version,
            "seat booking cancelled"
        );

        Ok(CancelSeatBookingResult {
            screening: outcome.screening,
            seat,
            released_ticket,
            version: outcome.version,
        })
    }
}
