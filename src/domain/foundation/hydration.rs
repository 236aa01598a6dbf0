//! Integrity errors raised while rebuilding aggregates from storage.
//!
//! Persisted aggregates are always written from valid domain values, so a
//! record that fails to hydrate means the store or an earlier layer is
//! corrupted. These errors are kept apart from [`DomainErrors`](super::DomainErrors)
//! and must be propagated, never retried or shown as user input problems.

use thiserror::Error;

use super::{DomainError, ErrorCode};

/// Failure to reconstruct a domain value from a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrationError {
    #[error("{entity} record is missing required fields: {}", fields.join(", "))]
    MissingFields {
        entity: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{entity} record has invalid '{field}' value '{value}'")]
    InvalidValue {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity} record is inconsistent: {reason}")]
    Inconsistent { entity: &'static str, reason: String },
}

impl HydrationError {
    pub fn missing_fields(entity: &'static str, fields: Vec<&'static str>) -> Self {
        HydrationError::MissingFields { entity, fields }
    }

    pub fn invalid_value(
        entity: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        HydrationError::InvalidValue {
            entity,
            field,
            value: value.into(),
        }
    }

    pub fn inconsistent(entity: &'static str, reason: impl Into<String>) -> Self {
        HydrationError::Inconsistent {
            entity,
            reason: reason.into(),
        }
    }
}

impl From<HydrationError> for DomainError {
    fn from(err: HydrationError) -> Self {
        DomainError::new(ErrorCode::DataIntegrityViolation, err.to_string())
    }
}
