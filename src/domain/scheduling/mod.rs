//! Scheduling domain module.
//!
//! Time intervals reserved in a room for screenings and room operations.

mod booking_slot;
mod slot_type;

pub use booking_slot::BookingSlot;
pub use slot_type::{BookingSlotLimits, BookingSlotType, DurationBounds};
