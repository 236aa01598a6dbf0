//! Booking slot types and their duration windows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Operational purpose of a booked room interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingSlotType {
    /// The projection itself.
    Screening,
    /// Room cleaning between screenings.
    Cleaning,
    /// Technical maintenance, may span days.
    Maintenance,
    /// Audience entry buffer before a projection.
    EntryTime,
    /// Audience exit buffer after a projection.
    ExitTime,
}

impl BookingSlotType {
    pub const ALL: [BookingSlotType; 5] = [
        BookingSlotType::Screening,
        BookingSlotType::Cleaning,
        BookingSlotType::Maintenance,
        BookingSlotType::EntryTime,
        BookingSlotType::ExitTime,
    ];

    /// Returns true if slots of this type must reference a screening.
    pub fn requires_screening(&self) -> bool {
        matches!(
            self,
            BookingSlotType::Screening | BookingSlotType::EntryTime | BookingSlotType::ExitTime
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingSlotType::Screening => "SCREENING",
            BookingSlotType::Cleaning => "CLEANING",
            BookingSlotType::Maintenance => "MAINTENANCE",
            BookingSlotType::EntryTime => "ENTRY_TIME",
            BookingSlotType::ExitTime => "EXIT_TIME",
        }
    }
}

impl fmt::Display for BookingSlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingSlotType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("Unknown booking slot type '{}'", s),
                )
                .with_detail("field", "type")
            })
    }
}

/// Inclusive duration window in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBounds {
    pub min_minutes: i64,
    pub max_minutes: i64,
}

impl DurationBounds {
    pub const fn new(min_minutes: i64, max_minutes: i64) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }

    pub fn contains(&self, minutes: i64) -> bool {
        minutes >= self.min_minutes && minutes <= self.max_minutes
    }
}

/// Duration windows per slot type.
///
/// | Type | Min | Max |
/// |------|-----|-----|
/// | SCREENING | 30 min | 6 h |
/// | CLEANING | 10 min | 2 h |
/// | MAINTENANCE | 30 min | 3 days |
/// | ENTRY_TIME | 15 min | 20 min |
/// | EXIT_TIME | 15 min | 30 min |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSlotLimits {
    pub screening: DurationBounds,
    pub cleaning: DurationBounds,
    pub maintenance: DurationBounds,
    pub entry_time: DurationBounds,
    pub exit_time: DurationBounds,
}

impl BookingSlotLimits {
    pub fn bounds_for(&self, slot_type: BookingSlotType) -> DurationBounds {
        match slot_type {
            BookingSlotType::Screening => self.screening,
            BookingSlotType::Cleaning => self.cleaning,
            BookingSlotType::Maintenance => self.maintenance,
            BookingSlotType::EntryTime => self.entry_time,
            BookingSlotType::ExitTime => self.exit_time,
        }
    }
}

impl Default for BookingSlotLimits {
    fn default() -> Self {
        Self {
            screening: DurationBounds::new(30, 360),
            cleaning: DurationBounds::new(10, 120),
            maintenance: DurationBounds::new(30, 3 * 24 * 60),
            entry_time: DurationBounds::new(15, 20),
            exit_time: DurationBounds::new(15, 30),
        }
    }
}
