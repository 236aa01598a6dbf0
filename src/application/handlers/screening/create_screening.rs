//! CreateScreeningHandler - Command handler for scheduling a movie into a room.

use std::sync::Arc;

use crate::domain::foundation::{
    Clock, DomainError, ErrorCode, ErrorCollector, MovieId, RoomId, Timestamp,
};
use crate::domain::screening::{AdministrativeStatus, DisplayPeriod, Screening, ScreeningError};
use crate::ports::{MovieCatalog, RoomCatalog, ScreeningRepository};

/// Command to create a new screening.
#[derive(Debug, Clone, Default)]
pub struct CreateScreeningCommand {
    pub movie_id: Option<MovieId>,
    pub room_id: Option<RoomId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Result of successful screening creation.
#[derive(Debug, Clone)]
pub struct CreateScreeningResult {
    pub screening: Screening,
    pub version: u64,
}

/// Handler for creating screenings.
///
/// The room's current layout is snapshotted into the screening, so later
/// changes to the room never affect it.
pub struct CreateScreeningHandler {
    repository: Arc<dyn ScreeningRepository>,
    rooms: Arc<dyn RoomCatalog>,
    movies: Arc<dyn MovieCatalog>,
    clock: Arc<dyn Clock>,
}

impl CreateScreeningHandler {
    pub fn new(
        repository: Arc<dyn ScreeningRepository>,
        rooms: Arc<dyn RoomCatalog>,
        movies: Arc<dyn MovieCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            rooms,
            movies,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateScreeningCommand,
    ) -> Result<CreateScreeningResult, ScreeningError> {
        // 1. Validate raw input
        let mut errors = ErrorCollector::new();
        let movie_id = errors.require(cmd.movie_id, "movieUID");
        let room_id = errors.require(cmd.room_id, "roomUID");
        let period = errors.absorb(DisplayPeriod::new(cmd.starts_at, cmd.ends_at));
        if let Some(period) = &period {
            if period.start().is_before(&self.clock.now()) {
                errors.push(
                    DomainError::new(
                        ErrorCode::DateCannotBePast,
                        format!("Screening start {} is in the past", period.start()),
                    )
                    .with_detail("field", "startsIn"),
                );
            }
        }
        let (Some(movie_id), Some(room_id), Some(period), false) =
            (movie_id, room_id, period, errors.has_errors())
        else {
            let errors = errors.into_errors();
            tracing::warn!(errors = %errors, "screening creation rejected");
            return Err(errors.into());
        };

        // 2. Check collaborators
        if !self.movies.is_screenable(&movie_id).await? {
            return Err(self.reject(
                DomainError::new(
                    ErrorCode::MovieNotScreenable,
                    format!("Movie {} cannot be screened", movie_id),
                )
                .with_detail("movieUID", movie_id.to_string()),
            ));
        }

        let layout = self.rooms.seat_layout(&room_id).await?.ok_or_else(|| {
            self.reject(
                DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", room_id))
                    .with_detail("roomUID", room_id.to_string()),
            )
        })?;

        // 3. Room must be free for the whole window
        let clash = self
            .repository
            .find_by_room(&room_id)
            .await?
            .into_iter()
            .find(|other| {
                other.administrative_status() == AdministrativeStatus::Scheduled
                    && other.display_period().overlaps(&period)
            });
        if let Some(other) = clash {
            return Err(self.reject(
                DomainError::new(
                    ErrorCode::RoomAlreadyScheduled,
                    format!(
                        "Room {} already holds screening {} from {} to {}",
                        room_id,
                        other.id(),
                        other.starts_at(),
                        other.ends_at()
                    ),
                )
                .with_detail("screeningUID", other.id().to_string()),
            ));
        }

        // 4. Create and persist
        let screening =
            Screening::create(Some(movie_id), Some(room_id), Some(period), Some(layout))?;
        let version = self.repository.save(&screening).await?;

        tracing::info!(
            screening_id = %screening.id(),
            movie_id = %movie_id,
            room_id = %room_id,
            starts_at = %screening.starts_at(),
            capacity = screening.seat_layout().capacity(),
            "screening created"
        );

        Ok(CreateScreeningResult { screening, version })
    }

    fn reject(&self, error: DomainError) -> ScreeningError {
        tracing::warn!(code = %error.code, "screening creation rejected: {}", error.message);
        ScreeningError::rejected(error)
    }
}
