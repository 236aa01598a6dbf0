//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on explicit lifecycle statuses.

use super::{DomainError, ErrorCode};

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AdministrativeStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Scheduled, Cancelled))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Scheduled => vec![Cancelled],
///             Cancelled => vec![],
///         }
///     }
/// }
///
/// let cancelled = status.transition_to(AdministrativeStatus::Cancelled)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
