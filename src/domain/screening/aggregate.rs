//! Screening aggregate entity.
//!
//! Owns a screening's administrative status, its display window, the seat
//! layout snapshot taken from the room, and the booking ledger. All
//! mutations return a new value and leave `self` untouched.

use std::collections::BTreeMap;

use crate::domain::foundation::{
    Clock, DomainError, DomainResult, ErrorCode, ErrorCollector, HydrationError, MovieId, RoomId,
    ScreeningId, StateMachine, TicketId, Timestamp,
};
use crate::domain::seating::{Seat, SeatIdentifier, SeatLayout};

use super::{AdministrativeStatus, DisplayPeriod, ScreeningRecord, ScreeningStatus};

/// One seat of the layout together with its booking, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatOccupancy {
    pub seat: Seat,
    pub ticket: Option<TicketId>,
}

impl SeatOccupancy {
    pub fn is_booked(&self) -> bool {
        self.ticket.is_some()
    }
}

/// A movie shown in a room over a display window.
///
/// # Invariants
///
/// - `display_period.start < display_period.end`
/// - every ledger key names a seat of `seat_layout`
/// - a seat is booked at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screening {
    id: ScreeningId,
    movie_id: MovieId,
    room_id: RoomId,
    administrative_status: AdministrativeStatus,
    display_period: DisplayPeriod,
    seat_layout: SeatLayout,
    booked_seats: BTreeMap<SeatIdentifier, TicketId>,
}

impl Screening {
    /// Creates a new SCHEDULED screening with an empty ledger.
    ///
    /// # Errors
    ///
    /// `MISSING_REQUIRED_DATA` once per absent argument.
    pub fn create(
        movie_id: Option<MovieId>,
        room_id: Option<RoomId>,
        display_period: Option<DisplayPeriod>,
        seat_layout: Option<SeatLayout>,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let movie_id = errors.require(movie_id, "movieUID");
        let room_id = errors.require(room_id, "roomUID");
        let display_period = errors.require(display_period, "displayPeriod");
        let seat_layout = errors.require(seat_layout, "layout");

        let (Some(movie_id), Some(room_id), Some(display_period), Some(seat_layout)) =
            (movie_id, room_id, display_period, seat_layout)
        else {
            return Err(errors.into_errors());
        };

        Ok(Self {
            id: ScreeningId::new(),
            movie_id,
            room_id,
            administrative_status: AdministrativeStatus::Scheduled,
            display_period,
            seat_layout,
            booked_seats: BTreeMap::new(),
        })
    }

    /// Rebuilds a screening from a persisted record.
    ///
    /// # Errors
    ///
    /// Returns `HydrationError` naming every missing field, or the first
    /// malformed or inconsistent value found.
    pub fn hydrate(record: &ScreeningRecord) -> Result<Self, HydrationError> {
        const ENTITY: &str = "Screening";

        let missing = record.missing_fields();
        let (
            Some(uid),
            Some(movie_uid),
            Some(room_uid),
            Some(status),
            Some(booked),
            Some(layout),
            Some(starts_in),
            Some(ends_in),
        ) = (
            record.uid.as_deref(),
            record.movie_uid.as_deref(),
            record.room_uid.as_deref(),
            record.administrative_status.as_deref(),
            record.booked_seats.as_ref(),
            record.layout.as_deref(),
            record.starts_in.as_deref(),
            record.ends_in.as_deref(),
        )
        else {
            return Err(HydrationError::missing_fields(ENTITY, missing));
        };

        let id: ScreeningId = uid
            .parse()
            .map_err(|_| HydrationError::invalid_value(ENTITY, "uid", uid))?;
        let movie_id: MovieId = movie_uid
            .parse()
            .map_err(|_| HydrationError::invalid_value(ENTITY, "movieUID", movie_uid))?;
        let room_id: RoomId = room_uid
            .parse()
            .map_err(|_| HydrationError::invalid_value(ENTITY, "roomUID", room_uid))?;
        let administrative_status = AdministrativeStatus::parse(status)
            .ok_or_else(|| HydrationError::invalid_value(ENTITY, "administrativeStatus", status))?;

        let start = Timestamp::parse_rfc3339(starts_in)
            .ok_or_else(|| HydrationError::invalid_value(ENTITY, "startsIn", starts_in))?;
        let end = Timestamp::parse_rfc3339(ends_in)
            .ok_or_else(|| HydrationError::invalid_value(ENTITY, "endsIn", ends_in))?;
        if !end.is_after(&start) {
            return Err(HydrationError::inconsistent(
                ENTITY,
                format!("window ends at {} before it starts at {}", end, start),
            ));
        }

        let seat_layout = SeatLayout::hydrate(layout)?;

        let mut booked_seats = BTreeMap::new();
        for (raw_seat, raw_ticket) in booked {
            let seat: SeatIdentifier = raw_seat
                .parse()
                .map_err(|_| HydrationError::invalid_value(ENTITY, "bookedSeatsObj", raw_seat))?;
            let ticket: TicketId = raw_ticket
                .parse()
                .map_err(|_| HydrationError::invalid_value(ENTITY, "bookedSeatsObj", raw_ticket))?;
            if !seat_layout.has_seat(seat.row(), seat.column()) {
                return Err(HydrationError::inconsistent(
                    ENTITY,
                    format!("booked seat {} is not part of the layout", seat),
                ));
            }
            if booked_seats.insert(seat, ticket).is_some() {
                return Err(HydrationError::inconsistent(
                    ENTITY,
                    format!("seat {} is booked more than once", seat),
                ));
            }
        }

        Ok(Self {
            id,
            movie_id,
            room_id,
            administrative_status,
            display_period: DisplayPeriod::from_trusted(start, end),
            seat_layout,
            booked_seats,
        })
    }

    /// Produces the persisted shape accepted by [`Screening::hydrate`].
    pub fn to_record(&self) -> ScreeningRecord {
        ScreeningRecord {
            uid: Some(self.id.to_string()),
            movie_uid: Some(self.movie_id.to_string()),
            room_uid: Some(self.room_id.to_string()),
            administrative_status: Some(self.administrative_status.as_str().to_string()),
            booked_seats: Some(
                self.booked_seats
                    .iter()
                    .map(|(seat, ticket)| (seat.to_string(), ticket.to_string()))
                    .collect(),
            ),
            layout: Some(self.seat_layout.to_records()),
            starts_in: Some(self.display_period.start().to_string()),
            ends_in: Some(self.display_period.end().to_string()),
        }
    }

    // Accessors

    pub fn id(&self) -> &ScreeningId {
        &self.id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn administrative_status(&self) -> AdministrativeStatus {
        self.administrative_status
    }

    pub fn display_period(&self) -> &DisplayPeriod {
        &self.display_period
    }

    pub fn starts_at(&self) -> &Timestamp {
        self.display_period.start()
    }

    pub fn ends_at(&self) -> &Timestamp {
        self.display_period.end()
    }

    pub fn seat_layout(&self) -> &SeatLayout {
        &self.seat_layout
    }

    pub fn booked_seats(&self) -> &BTreeMap<SeatIdentifier, TicketId> {
        &self.booked_seats
    }

    pub fn ticket_for(&self, seat: &SeatIdentifier) -> Option<&TicketId> {
        self.booked_seats.get(seat)
    }

    pub fn available_seat_count(&self) -> usize {
        self.seat_layout.capacity() - self.booked_seats.len()
    }

    /// Every seat of the layout in row order with its booking state.
    pub fn seat_map(&self) -> Vec<SeatOccupancy> {
        self.seat_layout
            .seats()
            .map(|seat| SeatOccupancy {
                ticket: self.booked_seats.get(&seat.identifier()).copied(),
                seat,
            })
            .collect()
    }

    // Status

    /// Observable status at the clock's current instant.
    pub fn status(&self, clock: &dyn Clock) -> ScreeningStatus {
        self.status_at(&clock.now())
    }

    pub fn status_at(&self, now: &Timestamp) -> ScreeningStatus {
        ScreeningStatus::observe(
            self.administrative_status,
            self.display_period.time_status(now),
        )
    }

    // Seat queries and commands

    /// Checks whether a seat is free.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` for each absent argument
    /// - `SEAT_DOES_NOT_EXIST` if the layout has no such seat
    pub fn is_seat_available(&self, row: Option<i64>, column: Option<&str>) -> DomainResult<bool> {
        let seat = self.find_seat(row, column)?;
        Ok(!self.booked_seats.contains_key(&seat.identifier()))
    }

    /// Resolves raw row/column input to a seat of this screening's layout.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` for each absent argument
    /// - `SEAT_DOES_NOT_EXIST` if the layout has no such seat
    pub fn find_seat(&self, row: Option<i64>, column: Option<&str>) -> DomainResult<Seat> {
        let mut errors = ErrorCollector::new();
        let row = errors.require(row, "row");
        let column = errors.require(column, "column");
        let (Some(row), Some(column)) = (row, column) else {
            return Err(errors.into_errors());
        };

        self.locate_seat(row, column)
    }

    /// Books a seat for a ticket.
    ///
    /// # Errors
    ///
    /// Checked in order, stopping at the first failing step:
    /// - `MISSING_REQUIRED_DATA` for each absent argument
    /// - `SCREENING_NOT_AVAILABLE_FOR_BOOKING` unless the screening is SCHEDULED
    /// - `SEAT_DOES_NOT_EXIST`
    /// - `SEAT_ALREADY_BOOKED`
    pub fn book_seat(
        &self,
        row: Option<i64>,
        column: Option<&str>,
        ticket: Option<TicketId>,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let row = errors.require(row, "row");
        let column = errors.require(column, "column");
        let ticket = errors.require(ticket, "ticketUID");
        let (Some(row), Some(column), Some(ticket)) = (row, column, ticket) else {
            return Err(errors.into_errors());
        };

        let status = self.status(clock);
        if !status.is_bookable() {
            return Err(DomainError::new(
                ErrorCode::ScreeningNotAvailableForBooking,
                format!("Screening is {} and does not accept bookings", status),
            )
            .with_detail("status", status.as_str())
            .into());
        }

        let seat = self.locate_seat(row, column)?.identifier();
        if self.booked_seats.contains_key(&seat) {
            return Err(DomainError::new(
                ErrorCode::SeatAlreadyBooked,
                format!("Seat {} is already booked", seat),
            )
            .with_detail("seat", seat.to_string())
            .into());
        }

        let mut booked_seats = self.booked_seats.clone();
        booked_seats.insert(seat, ticket);
        Ok(Self {
            booked_seats,
            ..self.clone()
        })
    }

    /// Releases a booked seat.
    ///
    /// # Errors
    ///
    /// Checked in order, stopping at the first failing step:
    /// - `MISSING_REQUIRED_DATA` for each absent argument
    /// - `SCREENING_NOT_AVAILABLE_FOR_BOOKING_CANCELLATION` unless SCHEDULED
    /// - `SEAT_DOES_NOT_EXIST`
    /// - `SEAT_NOT_BOOKED`
    pub fn cancel_seat_booking(
        &self,
        row: Option<i64>,
        column: Option<&str>,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let row = errors.require(row, "row");
        let column = errors.require(column, "column");
        let (Some(row), Some(column)) = (row, column) else {
            return Err(errors.into_errors());
        };

        let status = self.status(clock);
        if !status.is_bookable() {
            return Err(DomainError::new(
                ErrorCode::ScreeningNotAvailableForBookingCancellation,
                format!("Screening is {} and bookings can no longer be cancelled", status),
            )
            .with_detail("status", status.as_str())
            .into());
        }

        let seat = self.locate_seat(row, column)?.identifier();
        if !self.booked_seats.contains_key(&seat) {
            return Err(DomainError::new(
                ErrorCode::SeatNotBooked,
                format!("Seat {} is not booked", seat),
            )
            .with_detail("seat", seat.to_string())
            .into());
        }

        let mut booked_seats = self.booked_seats.clone();
        booked_seats.remove(&seat);
        Ok(Self {
            booked_seats,
            ..self.clone()
        })
    }

    /// Cancels the screening. Existing bookings are kept in the ledger.
    ///
    /// # Errors
    ///
    /// `SCREENING_CANNOT_CANCEL_ACTIVE_OR_FINALIZED` unless the observable
    /// status is SCHEDULED.
    pub fn cancel(&self, clock: &dyn Clock) -> DomainResult<Self> {
        let status = self.status(clock);
        if status != ScreeningStatus::Scheduled {
            return Err(DomainError::new(
                ErrorCode::ScreeningCannotCancelActiveOrFinalized,
                format!("Screening is {} and cannot be cancelled", status),
            )
            .with_detail("status", status.as_str())
            .into());
        }

        let administrative_status = self
            .administrative_status
            .transition_to(AdministrativeStatus::Cancelled)?;
        Ok(Self {
            administrative_status,
            ..self.clone()
        })
    }

    fn locate_seat(&self, row: i64, column: &str) -> DomainResult<Seat> {
        self.seat_layout.locate(row, column).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SeatDoesNotExist,
                format!("Seat {}{} does not exist in this room", column.trim(), row),
            )
            .with_detail("row", row.to_string())
            .with_detail("column", column.trim())
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FixedClock;
    use crate::domain::seating::{SeatRowRecord, SeatingLimits};

    fn layout() -> SeatLayout {
        SeatLayout::create(
            &[
                SeatRowRecord::new(1, "F", &["A"]),
                SeatRowRecord::new(2, "F", &[]),
                SeatRowRecord::new(3, "H", &["D", "E"]),
                SeatRowRecord::new(4, "H", &[]),
            ],
            &SeatingLimits::default(),
        )
        .unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(Timestamp::now())
    }

    fn screening_starting_in(clock: &FixedClock, minutes: i64) -> Screening {
        let start = clock.now().plus_minutes(minutes);
        let period = DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap();
        Screening::create(
            Some(MovieId::new()),
            Some(RoomId::new()),
            Some(period),
            Some(layout()),
        )
        .unwrap()
    }

    fn upcoming(clock: &FixedClock) -> Screening {
        screening_starting_in(clock, 60)
    }

    // Construction tests

    #[test]
    fn create_starts_scheduled_with_empty_ledger() {
        let clock = clock();
        let screening = upcoming(&clock);

        assert_eq!(screening.administrative_status(), AdministrativeStatus::Scheduled);
        assert_eq!(screening.status(&clock), ScreeningStatus::Scheduled);
        assert!(screening.booked_seats().is_empty());
        assert_eq!(screening.available_seat_count(), 28);
    }

    #[test]
    fn create_reports_every_missing_argument() {
        let errors = Screening::create(None, None, None, None).unwrap_err();
        let fields: Vec<_> = errors.errors().iter().filter_map(|e| e.detail("field")).collect();
        assert_eq!(fields, vec!["movieUID", "roomUID", "displayPeriod", "layout"]);
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let clock = clock();
        assert_ne!(upcoming(&clock).id(), upcoming(&clock).id());
    }

    // Status tests

    #[test]
    fn status_follows_clock() {
        let clock = clock();
        let screening = upcoming(&clock);

        assert_eq!(screening.status(&clock.advanced_by_minutes(90)), ScreeningStatus::InProgress);
        assert_eq!(screening.status(&clock.advanced_by_minutes(200)), ScreeningStatus::Finalized);
    }

    // Availability tests

    #[test]
    fn availability_is_case_insensitive() {
        let clock = clock();
        let screening = upcoming(&clock)
            .book_seat(Some(2), Some("c"), Some(TicketId::new()), &clock)
            .unwrap();

        assert!(!screening.is_seat_available(Some(2), Some("C")).unwrap());
        assert!(screening.is_seat_available(Some(2), Some("d")).unwrap());
    }

    #[test]
    fn availability_requires_row_and_column() {
        let clock = clock();
        let errors = upcoming(&clock).is_seat_available(None, None).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn availability_rejects_unknown_seat() {
        let clock = clock();
        let errors = upcoming(&clock).is_seat_available(Some(1), Some("G")).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatDoesNotExist]);
    }

    // Booking tests

    #[test]
    fn book_seat_records_ticket_and_keeps_original() {
        let clock = clock();
        let original = upcoming(&clock);
        let ticket = TicketId::new();

        let booked = original.book_seat(Some(1), Some("A"), Some(ticket), &clock).unwrap();

        assert_eq!(booked.ticket_for(&SeatIdentifier::new('A', 1)), Some(&ticket));
        assert!(original.booked_seats().is_empty());
        assert_eq!(booked.id(), original.id());
    }

    #[test]
    fn book_seat_preserves_other_bookings() {
        let clock = clock();
        let first = TicketId::new();
        let second = TicketId::new();

        let screening = upcoming(&clock)
            .book_seat(Some(1), Some("A"), Some(first), &clock)
            .unwrap()
            .book_seat(Some(3), Some("E"), Some(second), &clock)
            .unwrap();

        assert_eq!(screening.booked_seats().len(), 2);
        assert_eq!(screening.ticket_for(&SeatIdentifier::new('A', 1)), Some(&first));
    }

    #[test]
    fn book_seat_reports_all_missing_arguments_together() {
        let clock = clock();
        let errors = upcoming(&clock).book_seat(None, None, None, &clock).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.errors().iter().all(|e| e.code == ErrorCode::MissingRequiredData));
    }

    #[test]
    fn book_seat_checks_status_before_seat() {
        let clock = clock();
        let cancelled = upcoming(&clock).cancel(&clock).unwrap();

        let errors = cancelled
            .book_seat(Some(99), Some("Z"), Some(TicketId::new()), &clock)
            .unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::ScreeningNotAvailableForBooking]);
    }

    #[test]
    fn book_seat_rejects_finalized_screening() {
        let clock = clock();
        let screening = upcoming(&clock);
        let later = clock.advanced_by_minutes(500);

        let errors = screening
            .book_seat(Some(1), Some("A"), Some(TicketId::new()), &later)
            .unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::ScreeningNotAvailableForBooking]);
    }

    #[test]
    fn book_seat_rejects_negative_row_as_missing_seat() {
        let clock = clock();
        let errors = upcoming(&clock)
            .book_seat(Some(-1), Some("A"), Some(TicketId::new()), &clock)
            .unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatDoesNotExist]);
    }

    // Seat cancellation tests

    #[test]
    fn cancel_seat_booking_removes_entry() {
        let clock = clock();
        let screening = upcoming(&clock)
            .book_seat(Some(1), Some("B"), Some(TicketId::new()), &clock)
            .unwrap();

        let released = screening.cancel_seat_booking(Some(1), Some("b"), &clock).unwrap();
        assert!(released.booked_seats().is_empty());
        assert_eq!(screening.booked_seats().len(), 1);
    }

    #[test]
    fn cancel_seat_booking_rejects_unknown_seat() {
        let clock = clock();
        let errors = upcoming(&clock)
            .cancel_seat_booking(Some(5), Some("A"), &clock)
            .unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatDoesNotExist]);
    }

    #[test]
    fn cancel_seat_booking_rejects_started_screening() {
        let clock = clock();
        let screening = upcoming(&clock)
            .book_seat(Some(1), Some("B"), Some(TicketId::new()), &clock)
            .unwrap();

        let errors = screening
            .cancel_seat_booking(Some(1), Some("B"), &clock.advanced_by_minutes(61))
            .unwrap_err();
        assert_eq!(
            errors.codes(),
            vec![ErrorCode::ScreeningNotAvailableForBookingCancellation]
        );
    }

    // Screening cancellation tests

    #[test]
    fn cancel_keeps_ledger() {
        let clock = clock();
        let screening = upcoming(&clock)
            .book_seat(Some(1), Some("A"), Some(TicketId::new()), &clock)
            .unwrap();

        let cancelled = screening.cancel(&clock).unwrap();
        assert_eq!(cancelled.status(&clock), ScreeningStatus::Cancelled);
        assert_eq!(cancelled.booked_seats(), screening.booked_seats());
    }

    #[test]
    fn cancel_twice_fails() {
        let clock = clock();
        let cancelled = upcoming(&clock).cancel(&clock).unwrap();
        let errors = cancelled.cancel(&clock).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::ScreeningCannotCancelActiveOrFinalized]);
    }

    #[test]
    fn cancelled_status_holds_after_window() {
        let clock = clock();
        let cancelled = upcoming(&clock).cancel(&clock).unwrap();
        assert_eq!(
            cancelled.status(&clock.advanced_by_minutes(10_000)),
            ScreeningStatus::Cancelled
        );
    }

    // Seat map tests

    #[test]
    fn seat_map_marks_bookings_and_preferential_seats() {
        let clock = clock();
        let ticket = TicketId::new();
        let screening = upcoming(&clock)
            .book_seat(Some(3), Some("D"), Some(ticket), &clock)
            .unwrap();

        let map = screening.seat_map();
        assert_eq!(map.len(), screening.seat_layout().capacity());

        let d3 = map
            .iter()
            .find(|o| o.seat.identifier() == SeatIdentifier::new('D', 3))
            .unwrap();
        assert!(d3.is_booked());
        assert!(d3.seat.is_preferential());
        assert_eq!(d3.ticket, Some(ticket));
        assert_eq!(map.iter().filter(|o| o.is_booked()).count(), 1);
    }

    // Persistence shape tests

    #[test]
    fn hydrate_round_trips_record() {
        let clock = clock();
        let screening = upcoming(&clock)
            .book_seat(Some(1), Some("A"), Some(TicketId::new()), &clock)
            .unwrap()
            .cancel(&clock)
            .unwrap();

        let record = screening.to_record();
        assert_eq!(record.administrative_status.as_deref(), Some("CANCELLED"));
        assert!(record.booked_seats.as_ref().unwrap().contains_key("A1"));

        let restored = Screening::hydrate(&record).unwrap();
        assert_eq!(restored, screening);
    }

    #[test]
    fn hydrate_names_every_missing_field() {
        let clock = clock();
        let mut record = upcoming(&clock).to_record();
        record.uid = None;
        record.booked_seats = None;

        let err = Screening::hydrate(&record).unwrap_err();
        assert_eq!(
            err,
            HydrationError::missing_fields("Screening", vec!["uid", "bookedSeatsObj"])
        );
    }

    #[test]
    fn hydrate_rejects_booking_outside_layout() {
        let clock = clock();
        let mut record = upcoming(&clock).to_record();
        record
            .booked_seats
            .as_mut()
            .unwrap()
            .insert("Z9".to_string(), TicketId::new().to_string());

        assert!(matches!(
            Screening::hydrate(&record),
            Err(HydrationError::Inconsistent { .. })
        ));
    }

    #[test]
    fn hydrate_rejects_seat_keys_colliding_after_normalization() {
        let clock = clock();
        let mut record = upcoming(&clock).to_record();
        let ledger = record.booked_seats.as_mut().unwrap();
        ledger.insert("A1".to_string(), TicketId::new().to_string());
        ledger.insert("a1".to_string(), TicketId::new().to_string());

        assert!(matches!(
            Screening::hydrate(&record),
            Err(HydrationError::Inconsistent { .. })
        ));
    }

    #[test]
    fn hydrate_rejects_malformed_values() {
        let clock = clock();
        let base = upcoming(&clock).to_record();

        let mut bad_status = base.clone();
        bad_status.administrative_status = Some("ARCHIVED".to_string());
        assert!(matches!(
            Screening::hydrate(&bad_status),
            Err(HydrationError::InvalidValue { field: "administrativeStatus", .. })
        ));

        let mut bad_date = base.clone();
        bad_date.starts_in = Some("tomorrow".to_string());
        assert!(matches!(
            Screening::hydrate(&bad_date),
            Err(HydrationError::InvalidValue { field: "startsIn", .. })
        ));

        let mut inverted = base;
        inverted.ends_in = inverted.starts_in.clone();
        assert!(matches!(
            Screening::hydrate(&inverted),
            Err(HydrationError::Inconsistent { .. })
        ));
    }
}
