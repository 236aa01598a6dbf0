//! Property tests for the booking ledger.

use proptest::prelude::*;
use std::collections::BTreeMap;

use screening_engine::domain::foundation::{
    Clock, ErrorCode, FixedClock, MovieId, RoomId, TicketId, Timestamp,
};
use screening_engine::domain::screening::{DisplayPeriod, Screening, ScreeningStatus};
use screening_engine::domain::seating::{
    Seat, SeatIdentifier, SeatLayout, SeatRowRecord, SeatingLimits,
};

#[derive(Debug, Clone)]
enum Op {
    Book(i64, char),
    Release(i64, char),
}

fn op() -> impl Strategy<Value = Op> {
    // Rows and columns reach past the layout so misses are exercised too.
    let row = 0i64..=5;
    let column = prop::sample::select(vec!['A', 'C', 'E', 'F', 'G', 'J', 'a']);
    prop_oneof![
        (row.clone(), column.clone()).prop_map(|(r, c)| Op::Book(r, c)),
        (row, column).prop_map(|(r, c)| Op::Release(r, c)),
    ]
}

fn fixture(clock: &FixedClock) -> Screening {
    let start = clock.now().plus_hours(2);
    Screening::create(
        Some(MovieId::new()),
        Some(RoomId::new()),
        Some(DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap()),
        Some(
            SeatLayout::create(
                &[
                    SeatRowRecord::new(1, "F", &["A"]),
                    SeatRowRecord::new(2, "J", &[]),
                    SeatRowRecord::new(4, "E", &["C", "E"]),
                ],
                &SeatingLimits::default(),
            )
            .unwrap(),
        ),
    )
    .unwrap()
}

fn key(row: i64, column: char) -> Option<SeatIdentifier> {
    u16::try_from(row)
        .ok()
        .map(|row| SeatIdentifier::new(column.to_ascii_uppercase(), row))
}

proptest! {
    #[test]
    fn ledger_matches_model_and_stays_inside_layout(ops in prop::collection::vec(op(), 0..40)) {
        let clock = FixedClock::new(Timestamp::now());
        let mut screening = fixture(&clock);
        let mut model: BTreeMap<SeatIdentifier, TicketId> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Book(row, column) => {
                    let ticket = TicketId::new();
                    let label = column.to_string();
                    let exists = key(row, column)
                        .map(|k| screening.seat_layout().has_seat(k.row(), k.column()))
                        .unwrap_or(false);
                    match screening.book_seat(Some(row), Some(&label), Some(ticket), &clock) {
                        Ok(next) => {
                            let k = key(row, column).unwrap();
                            prop_assert!(exists);
                            prop_assert!(model.insert(k, ticket).is_none());
                            screening = next;
                        }
                        Err(errors) => {
                            let expected = match key(row, column) {
                                Some(k) if exists && model.contains_key(&k) => ErrorCode::SeatAlreadyBooked,
                                _ => ErrorCode::SeatDoesNotExist,
                            };
                            prop_assert_eq!(errors.codes(), vec![expected]);
                        }
                    }
                }
                Op::Release(row, column) => {
                    let label = column.to_string();
                    match screening.cancel_seat_booking(Some(row), Some(&label), &clock) {
                        Ok(next) => {
                            let k = key(row, column).unwrap();
                            prop_assert!(model.remove(&k).is_some());
                            screening = next;
                        }
                        Err(errors) => {
                            let code = errors.first().code;
                            prop_assert!(matches!(
                                code,
                                ErrorCode::SeatNotBooked | ErrorCode::SeatDoesNotExist
                            ));
                        }
                    }
                }
            }

            prop_assert_eq!(screening.booked_seats(), &model);
            for seat in screening.booked_seats().keys() {
                prop_assert!(screening.seat_layout().has_seat(seat.row(), seat.column()));
            }
            prop_assert_eq!(
                screening.available_seat_count() + model.len(),
                screening.seat_layout().capacity()
            );
        }
    }

    #[test]
    fn record_round_trip_preserves_screening(ops in prop::collection::vec(op(), 0..20)) {
        let clock = FixedClock::new(Timestamp::now());
        let mut screening = fixture(&clock);
        for op in ops {
            if let Op::Book(row, column) = op {
                let label = column.to_string();
                if let Ok(next) = screening.book_seat(Some(row), Some(&label), Some(TicketId::new()), &clock) {
                    screening = next;
                }
            }
        }

        let restored = Screening::hydrate(&screening.to_record()).unwrap();
        prop_assert_eq!(restored, screening);
    }

    #[test]
    fn cancellation_is_permanent(minutes in -10_000i64..10_000) {
        let clock = FixedClock::new(Timestamp::now());
        let cancelled = fixture(&clock).cancel(&clock).unwrap();
        let later = clock.advanced_by_minutes(minutes);

        prop_assert_eq!(cancelled.status(&later), ScreeningStatus::Cancelled);
        let errors = cancelled
            .book_seat(Some(1), Some("B"), Some(TicketId::new()), &later)
            .unwrap_err();
        prop_assert_eq!(errors.codes(), vec![ErrorCode::ScreeningNotAvailableForBooking]);
    }

    #[test]
    fn any_letter_and_row_in_range_makes_a_seat(column in "[a-zA-Z]", row in 1i64..=250) {
        let seat = Seat::create(Some(&column), Some(row), false).unwrap();
        prop_assert_eq!(seat.column(), column.chars().next().unwrap().to_ascii_uppercase());
        prop_assert_eq!(i64::from(seat.row()), row);
    }

    #[test]
    fn rows_above_limit_are_out_of_range(row in 251i64..100_000) {
        let errors = Seat::create(Some("A"), Some(row), false).unwrap_err();
        prop_assert_eq!(errors.codes(), vec![ErrorCode::ValueOutOfRange]);
    }
}
