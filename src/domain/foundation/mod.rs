//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the clock abstraction, the state
//! machine trait and the error types that form the vocabulary of the
//! screening domain.

mod clock;
mod errors;
mod hydration;
mod ids;
mod state_machine;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DomainError, DomainErrors, DomainResult, ErrorCode, ErrorCollector};
pub use hydration::HydrationError;
pub use ids::{MovieId, RoomId, ScreeningId, TicketId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
