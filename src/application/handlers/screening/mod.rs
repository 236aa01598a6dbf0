//! Screening command and query handlers.

mod book_seat;
mod cancel_screening;
mod cancel_seat_booking;
mod create_screening;
mod get_seat_availability;
mod versioned_write;

#[cfg(test)]
mod test_support;

pub use book_seat::{BookSeatCommand, BookSeatHandler, BookSeatResult};
pub use cancel_screening::{CancelScreeningCommand, CancelScreeningHandler, CancelScreeningResult};
pub use cancel_seat_booking::{
    CancelSeatBookingCommand, CancelSeatBookingHandler, CancelSeatBookingResult,
};
pub use create_screening::{CreateScreeningCommand, CreateScreeningHandler, CreateScreeningResult};
pub use get_seat_availability::{
    GetSeatAvailabilityHandler, GetSeatAvailabilityQuery, GetSeatMapQuery, SeatAvailabilityView,
    SeatMapView, SeatView,
};
