//! Screening status model.
//!
//! A screening carries two states. The administrative status is explicit
//! and only ever moves from SCHEDULED to CANCELLED. The time status is never
//! stored: it is derived from the display window and the current instant.
//! What callers observe combines the two.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, Timestamp};

/// Explicit, persisted lifecycle status of a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdministrativeStatus {
    /// Open for bookings until the screening starts.
    Scheduled,

    /// Withdrawn by the cinema. Terminal.
    Cancelled,
}

impl AdministrativeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdministrativeStatus::Scheduled => "SCHEDULED",
            AdministrativeStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parses the persisted representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SCHEDULED" => Some(AdministrativeStatus::Scheduled),
            "CANCELLED" => Some(AdministrativeStatus::Cancelled),
            _ => None,
        }
    }
}

impl StateMachine for AdministrativeStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AdministrativeStatus::*;
        matches!((self, target), (Scheduled, Cancelled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AdministrativeStatus::*;
        match self {
            Scheduled => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for AdministrativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status implied by the display window at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeStatus {
    /// Not started yet.
    Scheduled,
    /// Between start and end, both inclusive.
    InProgress,
    /// Past its end.
    Finalized,
}

impl TimeStatus {
    /// Derives the time status of a `[start, end]` window at `now`.
    pub fn derive(now: &Timestamp, start: &Timestamp, end: &Timestamp) -> Self {
        if now.is_before(start) {
            TimeStatus::Scheduled
        } else if now.is_after(end) {
            TimeStatus::Finalized
        } else {
            TimeStatus::InProgress
        }
    }
}

/// Status observed by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningStatus {
    Scheduled,
    InProgress,
    Finalized,
    Cancelled,
}

impl ScreeningStatus {
    /// Combines both states: cancellation wins, otherwise time decides.
    pub fn observe(administrative: AdministrativeStatus, time: TimeStatus) -> Self {
        match (administrative, time) {
            (AdministrativeStatus::Cancelled, _) => ScreeningStatus::Cancelled,
            (AdministrativeStatus::Scheduled, TimeStatus::Scheduled) => ScreeningStatus::Scheduled,
            (AdministrativeStatus::Scheduled, TimeStatus::InProgress) => {
                ScreeningStatus::InProgress
            }
            (AdministrativeStatus::Scheduled, TimeStatus::Finalized) => ScreeningStatus::Finalized,
        }
    }

    /// Returns true if seats may be booked or released.
    pub fn is_bookable(&self) -> bool {
        matches!(self, ScreeningStatus::Scheduled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningStatus::Scheduled => "SCHEDULED",
            ScreeningStatus::InProgress => "IN_PROGRESS",
            ScreeningStatus::Finalized => "FINALIZED",
            ScreeningStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ScreeningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    // Administrative transitions

    #[test]
    fn scheduled_can_be_cancelled() {
        let status = AdministrativeStatus::Scheduled;
        assert_eq!(
            status.transition_to(AdministrativeStatus::Cancelled).unwrap(),
            AdministrativeStatus::Cancelled
        );
    }

    #[test]
    fn cancelled_is_terminal() {
        let status = AdministrativeStatus::Cancelled;
        assert!(status.is_terminal());
        let err = status
            .transition_to(AdministrativeStatus::Scheduled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(status.transition_to(AdministrativeStatus::Cancelled).is_err());
    }

    #[test]
    fn administrative_status_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&AdministrativeStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        assert_eq!(
            AdministrativeStatus::parse("scheduled"),
            Some(AdministrativeStatus::Scheduled)
        );
        assert_eq!(AdministrativeStatus::parse("ARCHIVED"), None);
    }

    // Time derivation

    #[test]
    fn time_status_follows_window() {
        let start = Timestamp::now();
        let end = start.plus_hours(2);

        assert_eq!(
            TimeStatus::derive(&start.minus_minutes(1), &start, &end),
            TimeStatus::Scheduled
        );
        assert_eq!(TimeStatus::derive(&start, &start, &end), TimeStatus::InProgress);
        assert_eq!(TimeStatus::derive(&end, &start, &end), TimeStatus::InProgress);
        assert_eq!(
            TimeStatus::derive(&end.plus_minutes(1), &start, &end),
            TimeStatus::Finalized
        );
    }

    // Observation

    #[test]
    fn cancellation_overrides_time() {
        for time in [TimeStatus::Scheduled, TimeStatus::InProgress, TimeStatus::Finalized] {
            assert_eq!(
                ScreeningStatus::observe(AdministrativeStatus::Cancelled, time),
                ScreeningStatus::Cancelled
            );
        }
    }

    #[test]
    fn scheduled_screening_reports_time_status() {
        assert_eq!(
            ScreeningStatus::observe(AdministrativeStatus::Scheduled, TimeStatus::InProgress),
            ScreeningStatus::InProgress
        );
        assert_eq!(
            ScreeningStatus::observe(AdministrativeStatus::Scheduled, TimeStatus::Finalized),
            ScreeningStatus::Finalized
        );
    }

    #[test]
    fn only_scheduled_is_bookable() {
        assert!(ScreeningStatus::Scheduled.is_bookable());
        assert!(!ScreeningStatus::InProgress.is_bookable());
        assert!(!ScreeningStatus::Finalized.is_bookable());
        assert!(!ScreeningStatus::Cancelled.is_bookable());
    }

    #[test]
    fn observable_status_displays_screaming_snake_case() {
        assert_eq!(ScreeningStatus::InProgress.to_string(), "IN_PROGRESS");
    }
}
