//! Display window of a screening.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, DomainResult, ErrorCode, ErrorCollector, Timestamp};

use super::TimeStatus;

/// Validated `[start, end]` window with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPeriod {
    start: Timestamp,
    end: Timestamp,
}

impl DisplayPeriod {
    /// Creates a display period from raw caller input.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` for each absent bound
    /// - `DATE_WITH_INVALID_SEQUENCE` if `end` is not after `start`
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let start = errors.require(start, "startsIn");
        let end = errors.require(end, "endsIn");
        let (Some(start), Some(end)) = (start, end) else {
            return Err(errors.into_errors());
        };

        if !end.is_after(&start) {
            return Err(DomainError::new(
                ErrorCode::DateWithInvalidSequence,
                format!("Screening end {} must be after start {}", end, start),
            )
            .with_detail("field", "endsIn")
            .into());
        }

        Ok(Self { start, end })
    }

    /// Builds a window known to be ordered.
    pub(crate) fn from_trusted(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    pub fn end(&self) -> &Timestamp {
        &self.end
    }

    pub fn duration_in_minutes(&self) -> i64 {
        self.start.minutes_between(&self.end)
    }

    pub fn time_status(&self, now: &Timestamp) -> TimeStatus {
        TimeStatus::derive(now, &self.start, &self.end)
    }

    /// Checks whether two windows share any instant.
    ///
    /// Bounds are inclusive, so a screening starting exactly when another
    /// ends still conflicts with it.
    pub fn overlaps(&self, other: &DisplayPeriod) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_window() {
        let start = Timestamp::now();
        let period = DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap();
        assert_eq!(period.duration_in_minutes(), 120);
        assert_eq!(period.start(), &start);
    }

    #[test]
    fn new_reports_each_missing_bound() {
        let errors = DisplayPeriod::new(None, None).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.errors().iter().all(|e| e.code == ErrorCode::MissingRequiredData));
    }

    #[test]
    fn new_rejects_inverted_or_empty_window() {
        let start = Timestamp::now();
        let inverted = DisplayPeriod::new(Some(start), Some(start.minus_minutes(1))).unwrap_err();
        assert_eq!(inverted.codes(), vec![ErrorCode::DateWithInvalidSequence]);

        let empty = DisplayPeriod::new(Some(start), Some(start)).unwrap_err();
        assert_eq!(empty.codes(), vec![ErrorCode::DateWithInvalidSequence]);
    }

    #[test]
    fn overlapping_windows_conflict() {
        let start = Timestamp::now();
        let evening = DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap();
        let late = DisplayPeriod::new(Some(start.plus_hours(1)), Some(start.plus_hours(3))).unwrap();
        let touching =
            DisplayPeriod::new(Some(start.plus_hours(2)), Some(start.plus_hours(4))).unwrap();
        let next_day = DisplayPeriod::new(Some(start.add_days(1)), Some(start.add_days(2))).unwrap();

        assert!(evening.overlaps(&late));
        assert!(evening.overlaps(&touching));
        assert!(!evening.overlaps(&next_day));
    }

    #[test]
    fn time_status_is_derived_from_window() {
        let start = Timestamp::now();
        let period = DisplayPeriod::new(Some(start), Some(start.plus_hours(2))).unwrap();
        assert_eq!(period.time_status(&start.minus_minutes(5)), TimeStatus::Scheduled);
        assert_eq!(period.time_status(&start.plus_hours(1)), TimeStatus::InProgress);
        assert_eq!(period.time_status(&start.plus_hours(3)), TimeStatus::Finalized);
    }
}
