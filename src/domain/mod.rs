//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, clock, errors)
//! - `seating` - Seat, row and layout value model
//! - `scheduling` - Booking slots for room operations
//! - `screening` - Screening aggregate, status model and booking ledger

pub mod foundation;
pub mod scheduling;
pub mod screening;
pub mod seating;
