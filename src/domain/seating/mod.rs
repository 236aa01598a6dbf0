//! Seating domain module.
//!
//! Value model of a room's seats as booked by a screening.
//!
//! # Module Structure
//!
//! - `seat` - Seat value object and its ledger identifier
//! - `seat_row` - SeatRow shape (width, preferential columns)
//! - `seat_layout` - SeatLayout snapshot and its persisted record shape
//! - `limits` - SeatingLimits for row validation

mod limits;
mod seat;
mod seat_layout;
mod seat_row;

pub use limits::{SeatingLimits, MAX_ROW_NUMBER};
pub use seat::{Seat, SeatIdentifier};
pub use seat_layout::{SeatLayout, SeatRowRecord};
pub use seat_row::SeatRow;
