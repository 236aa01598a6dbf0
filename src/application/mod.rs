//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Screening commands
    BookSeatCommand, BookSeatHandler, BookSeatResult,
    CancelScreeningCommand, CancelScreeningHandler, CancelScreeningResult,
    CancelSeatBookingCommand, CancelSeatBookingHandler, CancelSeatBookingResult,
    CreateScreeningCommand, CreateScreeningHandler, CreateScreeningResult,
    // Screening queries
    GetSeatAvailabilityHandler, GetSeatAvailabilityQuery, GetSeatMapQuery,
    SeatAvailabilityView, SeatMapView, SeatView,
};
