//! Screening-specific error types.
//!
//! Outcome of a screening command or query as seen by callers of the
//! application layer.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | Rejected | Domain validation or business rule failure |
//! | NotFound | No screening with the given id |
//! | Conflict | Concurrent writers kept winning, attempts exhausted |
//! | Integrity | Stored data could not be rebuilt |
//! | Infrastructure | Collaborator failure |

use thiserror::Error;

use crate::domain::foundation::{DomainError, DomainErrors, ErrorCode, HydrationError, ScreeningId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    /// One or more domain rules rejected the request.
    #[error("{0}")]
    Rejected(DomainErrors),

    #[error("Screening not found: {0}")]
    NotFound(ScreeningId),

    #[error("Concurrent update conflict: {0}")]
    Conflict(String),

    #[error("Data integrity violation: {0}")]
    Integrity(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ScreeningError {
    pub fn rejected(error: DomainError) -> Self {
        ScreeningError::Rejected(error.into())
    }

    pub fn not_found(id: ScreeningId) -> Self {
        ScreeningError::NotFound(id)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ScreeningError::Conflict(message.into())
    }

    pub fn integrity(message: impl Into<String>) -> Self {
        ScreeningError::Integrity(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ScreeningError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    ///
    /// For rejections this is the code of the first failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScreeningError::Rejected(errors) => errors.first().code,
            ScreeningError::NotFound(_) => ErrorCode::ScreeningNotFound,
            ScreeningError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            ScreeningError::Integrity(_) => ErrorCode::DataIntegrityViolation,
            ScreeningError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Every domain failure behind a rejection, empty otherwise.
    pub fn failures(&self) -> &[DomainError] {
        match self {
            ScreeningError::Rejected(errors) => errors.errors(),
            _ => &[],
        }
    }
}

impl From<DomainErrors> for ScreeningError {
    fn from(errors: DomainErrors) -> Self {
        ScreeningError::Rejected(errors)
    }
}

impl From<HydrationError> for ScreeningError {
    fn from(err: HydrationError) -> Self {
        ScreeningError::Integrity(err.to_string())
    }
}

/// Maps errors reported by ports.
impl From<DomainError> for ScreeningError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrencyConflict => ScreeningError::Conflict(err.message),
            ErrorCode::DataIntegrityViolation => ScreeningError::Integrity(err.message),
            ErrorCode::DatabaseError => ScreeningError::Infrastructure(err.message),
            _ => ScreeningError::Rejected(err.into()),
        }
    }
}
