//! Fixtures shared by screening handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryScreeningRepository;
use crate::domain::foundation::{Clock, FixedClock, MovieId, RoomId, Timestamp};
use crate::domain::screening::{DisplayPeriod, Screening};
use crate::domain::seating::{SeatLayout, SeatRowRecord, SeatingLimits};
use crate::ports::ScreeningRepository;

pub(crate) fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Timestamp::now()))
}

/// Two rows: A..F with A preferential, and A..H.
pub(crate) fn layout() -> SeatLayout {
    SeatLayout::create(
        &[
            SeatRowRecord::new(1, "F", &["A"]),
            SeatRowRecord::new(2, "H", &[]),
        ],
        &SeatingLimits::default(),
    )
    .unwrap()
}

pub(crate) fn screening_starting_in(clock: &FixedClock, minutes: i64) -> Screening {
    let start = clock.now().plus_minutes(minutes);
    Screening::create(
        Some(MovieId::new()),
        Some(RoomId::new()),
        Some(DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap()),
        Some(layout()),
    )
    .unwrap()
}

/// Repository holding one screening that starts in an hour.
pub(crate) async fn seeded_repository(
    clock: &FixedClock,
) -> (Arc<InMemoryScreeningRepository>, Screening) {
    let repo = Arc::new(InMemoryScreeningRepository::new());
    let screening = screening_starting_in(clock, 60);
    repo.save(&screening).await.unwrap();
    (repo, screening)
}
