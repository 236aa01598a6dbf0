//! BookingSlot value object.
//!
//! A room interval reserved for one operational purpose. Room-scheduling
//! collaborators lay these out around screenings (entry buffer, projection,
//! exit buffer, cleaning) and check them against each other for overlap.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Clock, DomainError, DomainResult, ErrorCode, ErrorCollector, ScreeningId, Timestamp,
};

use super::{BookingSlotLimits, BookingSlotType};

/// Validated time interval attached to an operational purpose.
///
/// # Invariants
///
/// - `start_time < end_time`
/// - duration lies within the type's bounds at creation
/// - projection-related types carry a screening reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    #[serde(rename = "screeningUID")]
    screening_id: Option<ScreeningId>,
    start_time: Timestamp,
    end_time: Timestamp,
    #[serde(rename = "type")]
    slot_type: BookingSlotType,
}

impl BookingSlot {
    /// Validates and creates a booking slot.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` for absent `startTime`, `endTime`, `type`, or
    ///   a missing `screeningUID` on SCREENING/ENTRY_TIME/EXIT_TIME
    /// - `DATE_CANNOT_BE_PAST` if the slot starts before now
    /// - `DATE_WITH_INVALID_SEQUENCE` if it does not end after it starts
    /// - `INVALID_OPERATION_DURATION` if the duration is outside the type's bounds
    pub fn create(
        screening_id: Option<ScreeningId>,
        start_time: Option<Timestamp>,
        end_time: Option<Timestamp>,
        slot_type: Option<BookingSlotType>,
        limits: &BookingSlotLimits,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let start = errors.require(start_time, "startTime");
        let end = errors.require(end_time, "endTime");
        let kind = errors.require(slot_type, "type");
        if let Some(kind) = kind {
            if kind.requires_screening() && screening_id.is_none() {
                errors.push(
                    DomainError::missing("screeningUID").with_detail("type", kind.as_str()),
                );
            }
        }
        let (Some(start), Some(end), Some(kind), false) = (start, end, kind, errors.has_errors())
        else {
            return Err(errors.into_errors());
        };

        let mut errors = ErrorCollector::new();
        let now = clock.now();
        if start.is_before(&now) {
            errors.push(
                DomainError::new(
                    ErrorCode::DateCannotBePast,
                    format!("Slot start {} is in the past", start),
                )
                .with_detail("field", "startTime"),
            );
        }
        if !end.is_after(&start) {
            errors.push(
                DomainError::new(
                    ErrorCode::DateWithInvalidSequence,
                    format!("Slot end {} must be after start {}", end, start),
                )
                .with_detail("field", "endTime"),
            );
        }
        errors.finish()?;

        let minutes = start.minutes_between(&end);
        let bounds = limits.bounds_for(kind);
        if !bounds.contains(minutes) {
            return Err(DomainError::new(
                ErrorCode::InvalidOperationDuration,
                format!(
                    "{} slot of {} minutes must last between {} and {} minutes",
                    kind, minutes, bounds.min_minutes, bounds.max_minutes
                ),
            )
            .with_detail("type", kind.as_str())
            .with_detail("minutes", minutes.to_string())
            .into());
        }

        Ok(Self {
            screening_id,
            start_time: start,
            end_time: end,
            slot_type: kind,
        })
    }

    pub fn screening_id(&self) -> Option<&ScreeningId> {
        self.screening_id.as_ref()
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    pub fn end_time(&self) -> &Timestamp {
        &self.end_time
    }

    pub fn slot_type(&self) -> BookingSlotType {
        self.slot_type
    }

    /// Whole minutes between start and end.
    pub fn duration_in_minutes(&self) -> i64 {
        self.start_time.minutes_between(&self.end_time)
    }

    /// Checks whether two slots share any instant.
    ///
    /// Slots are half-open: one ending exactly when another starts does not
    /// overlap it.
    pub fn overlaps(&self, other: &BookingSlot) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}
