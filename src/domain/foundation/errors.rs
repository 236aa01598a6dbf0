//! Error types for the domain layer.
//!
//! Validating operations return [`DomainResult`], whose error side is a
//! non-empty list of [`DomainError`]s. Independent checks push into the same
//! list so a caller sees every problem in one round trip.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    MissingRequiredData,
    ValueOutOfRange,

    // Seat and layout errors
    SeatDoesNotExist,
    SeatWithInvalidColumnIdentifier,
    SeatWithInvalidRowNumber,
    InvalidSeatColumn,
    SeatColumnOutOfRange,
    PreferentialSeatsLimitExceeded,
    PreferentialSeatNotInRow,
    DuplicatePreferentialSeat,
    DuplicateRowNumber,

    // Booking errors
    SeatAlreadyBooked,
    SeatNotBooked,
    ScreeningNotAvailableForBooking,
    ScreeningNotAvailableForBookingCancellation,

    // State errors
    ScreeningCannotCancelActiveOrFinalized,
    InvalidStateTransition,

    // Scheduling errors
    DateWithInvalidSequence,
    DateCannotBePast,
    InvalidOperationDuration,
    RoomAlreadyScheduled,

    // Not found errors
    ScreeningNotFound,
    RoomNotFound,
    MovieNotScreenable,

    // Infrastructure errors
    ConcurrencyConflict,
    DataIntegrityViolation,
    DatabaseError,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredData => "MISSING_REQUIRED_DATA",
            ErrorCode::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            ErrorCode::SeatDoesNotExist => "SEAT_DOES_NOT_EXIST",
            ErrorCode::SeatWithInvalidColumnIdentifier => "SEAT_WITH_INVALID_COLUMN_IDENTIFIER",
            ErrorCode::SeatWithInvalidRowNumber => "SEAT_WITH_INVALID_ROW_NUMBER",
            ErrorCode::InvalidSeatColumn => "INVALID_SEAT_COLUMN",
            ErrorCode::SeatColumnOutOfRange => "SEAT_COLUMN_OUT_OF_RANGE",
            ErrorCode::PreferentialSeatsLimitExceeded => "PREFERENTIAL_SEATS_LIMIT_EXCEEDED",
            ErrorCode::PreferentialSeatNotInRow => "PREFERENTIAL_SEAT_NOT_IN_ROW",
            ErrorCode::DuplicatePreferentialSeat => "DUPLICATE_PREFERENTIAL_SEAT",
            ErrorCode::DuplicateRowNumber => "DUPLICATE_ROW_NUMBER",
            ErrorCode::SeatAlreadyBooked => "SEAT_ALREADY_BOOKED",
            ErrorCode::SeatNotBooked => "SEAT_NOT_BOOKED",
            ErrorCode::ScreeningNotAvailableForBooking => "SCREENING_NOT_AVAILABLE_FOR_BOOKING",
            ErrorCode::ScreeningNotAvailableForBookingCancellation => {
                "SCREENING_NOT_AVAILABLE_FOR_BOOKING_CANCELLATION"
            }
            ErrorCode::ScreeningCannotCancelActiveOrFinalized => {
                "SCREENING_CANNOT_CANCEL_ACTIVE_OR_FINALIZED"
            }
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::DateWithInvalidSequence => "DATE_WITH_INVALID_SEQUENCE",
            ErrorCode::DateCannotBePast => "DATE_CANNOT_BE_PAST",
            ErrorCode::InvalidOperationDuration => "INVALID_OPERATION_DURATION",
            ErrorCode::RoomAlreadyScheduled => "ROOM_ALREADY_SCHEDULED",
            ErrorCode::ScreeningNotFound => "SCREENING_NOT_FOUND",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::MovieNotScreenable => "MOVIE_NOT_SCREENABLE",
            ErrorCode::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorCode::DataIntegrityViolation => "DATA_INTEGRITY_VIOLATION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a `MISSING_REQUIRED_DATA` error naming the absent field.
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::MissingRequiredData,
            format!("Required field '{}' is missing", field),
        )
        .with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns a detail value by key.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

/// Non-empty list of failures returned by validating operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainErrors(Vec<DomainError>);

impl DomainErrors {
    /// Wraps a list of failures, returning `None` when the list is empty.
    pub fn from_vec(errors: Vec<DomainError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Returns the first failure.
    pub fn first(&self) -> &DomainError {
        &self.0[0]
    }

    /// Returns all failures in the order they were detected.
    pub fn errors(&self) -> &[DomainError] {
        &self.0
    }

    /// Returns the codes of all failures.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.0.iter().map(|e| e.code).collect()
    }

    /// Checks whether any failure carries the given code.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.0.iter().any(|e| e.code == code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<DomainError> {
        self.0
    }
}

impl From<DomainError> for DomainErrors {
    fn from(err: DomainError) -> Self {
        Self(vec![err])
    }
}

impl fmt::Display for DomainErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl Error for DomainErrors {}

/// Result of a validating domain operation.
pub type DomainResult<T> = Result<T, DomainErrors>;

/// Collects independent failures before deciding whether to proceed.
///
/// # Example
///
/// ```ignore
/// let mut errors = ErrorCollector::new();
/// let movie = errors.require(movie_id, "movieUID");
/// let room = errors.require(room_id, "roomUID");
/// errors.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DomainError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure.
    pub fn push(&mut self, error: DomainError) {
        self.errors.push(error);
    }

    /// Records every failure from a nested validation.
    pub fn extend(&mut self, errors: DomainErrors) {
        self.errors.extend(errors.into_vec());
    }

    /// Unwraps a required value, recording `MISSING_REQUIRED_DATA` when absent.
    pub fn require<T>(&mut self, value: Option<T>, field: &str) -> Option<T> {
        if value.is_none() {
            self.push(DomainError::missing(field));
        }
        value
    }

    /// Keeps the success value of a nested validation, recording its failures.
    pub fn absorb<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.extend(errors);
                None
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `Err` with every recorded failure, or `Ok` if none were recorded.
    pub fn finish(self) -> DomainResult<()> {
        match DomainErrors::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    /// Converts the recorded failures into the error list.
    ///
    /// Only meaningful after at least one failure was recorded, typically in
    /// the `else` arm of a `let` that destructures required values.
    pub fn into_errors(self) -> DomainErrors {
        DomainErrors(self.errors)
    }
}
