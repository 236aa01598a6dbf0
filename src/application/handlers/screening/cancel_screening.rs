//! CancelScreeningHandler - Command handler for withdrawing a screening.

use std::sync::Arc;

use crate::domain::foundation::{Clock, ScreeningId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::ports::ScreeningRepository;

use super::versioned_write::VersionedWriter;

/// Command to cancel a screening.
#[derive(Debug, Clone)]
pub struct CancelScreeningCommand {
    pub screening_id: ScreeningId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelScreeningResult {
    pub screening: Screening,
    /// Bookings still held in the ledger, left for refund handling.
    pub outstanding_bookings: usize,
    pub version: u64,
}

/// Handler for cancelling screenings.
pub struct CancelScreeningHandler {
    writer: VersionedWriter,
    clock: Arc<dyn Clock>,
}

impl CancelScreeningHandler {
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
        cmd: CancelScreeningCommand,
    ) -> Result<CancelScreeningResult, ScreeningError> {
        let clock = self.clock.as_ref();
        let outcome = self
            .writer
            .apply(&cmd.screening_id, "cancel_screening", |screening| {
                screening.cancel(clock)
            })
            .await?;

        let outstanding_bookings = outcome.screening.booked_seats().len();
        tracing::info!(
            screening_id = %cmd.screening_id,
            outstanding_bookings,
            version = outcome.version,
            "screening cancelled"
        );

        Ok(CancelScreeningResult {
            screening: outcome.screening,
            outstanding_bookings,
            version: outcome.version,
        })
    }
}
