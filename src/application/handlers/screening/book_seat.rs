//! BookSeatHandler - Command handler for booking a seat of a screening.

use std::sync::Arc;

use crate::domain::foundation::{Clock, ScreeningId, TicketId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::domain::seating::SeatIdentifier;
use crate::ports::ScreeningRepository;

use super::versioned_write::VersionedWriter;

/// Command to book one seat for a ticket.
#[derive(Debug, Clone)]
pub struct BookSeatCommand {
    pub screening_id: ScreeningId,
    pub row: Option<i64>,
    pub column: Option<String>,
    pub ticket_id: Option<TicketId>,
}

/// Result of a successful booking.
#[derive(Debug, Clone)]
pub struct BookSeatResult {
    pub screening: Screening,
    pub seat: SeatIdentifier,
    pub version: u64,
}

/// Handler for booking seats.
///
/// Two bookers racing for the same seat are arbitrated by the repository's
/// version check: the loser reloads and is rejected with
/// `SEAT_ALREADY_BOOKED`.
pub struct BookSeatHandler {
    writer: VersionedWriter,
    clock: Arc<dyn Clock>,
}

impl BookSeatHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            writer: VersionedWriter::new(repository),
            clock,
        }
    }

    /// Overrides how many load-apply-update cycles run before a conflict is reported.
    pub fn with_max_write_attempts(mut self, max_attempts: u32) -> Self {
        self.writer.set_max_attempts(max_attempts);
        self
    }

    pub async fn handle(&self, cmd: BookSeatCommand) -> Result<BookSeatResult, ScreeningError> {
        let clock = self.clock.as_ref();
        let outcome = self
            .writer
            .apply(&cmd.screening_id, "book_seat", |screening| {
                screening.book_seat(cmd.row, cmd.column.as_deref(), cmd.ticket_id, clock)
            })
            .await?;

        // Exactly one ledger entry was added.
        let seat = outcome
            .screening
            .booked_seats()
            .keys()
            .find(|seat| !outcome.previous.booked_seats().contains_key(seat))
            .copied()
            .ok_or_else(|| {
                ScreeningError::integrity("booking did not add a ledger entry")
            })?;

        tracing::info!(
            screening_id = %cmd.screening_id,
            seat = %seat,
            version = outcome.version,
            "seat booked"
        );

        Ok(BookSeatResult {
            screening: outcome.screening,
            seat,
            version: outcome.version,
        })
    }
}
