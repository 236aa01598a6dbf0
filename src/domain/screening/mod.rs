//! Screening domain module.
//!
//! The Screening aggregate: a movie shown in a room over a display window,
//! with its seat layout snapshot and booking ledger.
//!
//! # Module Structure
//!
//! - `aggregate` - Screening entity and its seat commands
//! - `status` - Administrative, time-derived and observable statuses
//! - `display_period` - Validated display window
//! - `record` - Persisted record shape
//! - `errors` - Application-facing error type

mod aggregate;
mod display_period;
mod errors;
mod record;
mod status;

pub use aggregate::{Screening, SeatOccupancy};
pub use display_period::DisplayPeriod;
pub use errors::ScreeningError;
pub use record::ScreeningRecord;
pub use status::{AdministrativeStatus, ScreeningStatus, TimeStatus};
