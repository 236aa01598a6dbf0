//! Shape of a single seat row.

use std::collections::BTreeSet;

use crate::domain::foundation::{DomainError, DomainResult, ErrorCode};

use super::seat::normalize_column;
use super::{Seat, SeatingLimits};

/// One row's shape: columns `A..=last_column`, some of them preferential.
///
/// # Invariants
///
/// - `last_column` is an uppercase ASCII letter
/// - every preferential column lies in `A..=last_column`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    last_column: char,
    preferential_seats: BTreeSet<char>,
}

impl SeatRow {
    /// Validates a row shape against the configured limits.
    ///
    /// Checks run in order and stop at the first failure:
    ///
    /// 1. `INVALID_SEAT_COLUMN` - `last_column` is not a single letter
    /// 2. `SEAT_COLUMN_OUT_OF_RANGE` - row width outside the limits
    /// 3. `PREFERENTIAL_SEATS_LIMIT_EXCEEDED` - too many preferential seats
    /// 4. `INVALID_SEAT_COLUMN` / `PREFERENTIAL_SEAT_NOT_IN_ROW` /
    ///    `DUPLICATE_PREFERENTIAL_SEAT` - per preferential entry
    pub fn create<S: AsRef<str>>(
        row_index: u16,
        last_column: &str,
        preferential_seats: &[S],
        limits: &SeatingLimits,
    ) -> DomainResult<Self> {
        let last = normalize_column(last_column).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidSeatColumn,
                format!(
                    "Row {}: last column '{}' must be a single letter",
                    row_index,
                    last_column.trim()
                ),
            )
            .with_detail("row", row_index.to_string())
            .with_detail("column", last_column.trim())
        })?;

        let width = column_width(last);
        if !limits.allows_width(width) {
            return Err(DomainError::new(
                ErrorCode::SeatColumnOutOfRange,
                format!(
                    "Row {}: width {} must be between {} and {} columns",
                    row_index, width, limits.min_row_width, limits.max_row_width
                ),
            )
            .with_detail("row", row_index.to_string())
            .with_detail("width", width.to_string())
            .into());
        }

        if preferential_seats.len() > limits.max_preferential_seats {
            return Err(DomainError::new(
                ErrorCode::PreferentialSeatsLimitExceeded,
                format!(
                    "Row {}: {} preferential seats requested, at most {} allowed",
                    row_index,
                    preferential_seats.len(),
                    limits.max_preferential_seats
                ),
            )
            .with_detail("row", row_index.to_string())
            .with_detail("max", limits.max_preferential_seats.to_string())
            .into());
        }

        let mut preferential = BTreeSet::new();
        for raw in preferential_seats {
            let raw = raw.as_ref();
            let column = normalize_column(raw).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidSeatColumn,
                    format!("Row {}: preferential seat '{}' must be a single letter", row_index, raw.trim()),
                )
                .with_detail("row", row_index.to_string())
                .with_detail("column", raw.trim())
            })?;

            if column > last {
                return Err(DomainError::new(
                    ErrorCode::PreferentialSeatNotInRow,
                    format!(
                        "Row {}: preferential seat {} is outside A-{}",
                        row_index, column, last
                    ),
                )
                .with_detail("row", row_index.to_string())
                .with_detail("column", column.to_string())
                .into());
            }

            if !preferential.insert(column) {
                return Err(DomainError::new(
                    ErrorCode::DuplicatePreferentialSeat,
                    format!("Row {}: preferential seat {} listed twice", row_index, column),
                )
                .with_detail("row", row_index.to_string())
                .with_detail("column", column.to_string())
                .into());
            }
        }

        Ok(Self {
            last_column: last,
            preferential_seats: preferential,
        })
    }

    /// Rebuilds a row from trusted persisted data without validation.
    pub(crate) fn hydrate(last_column: char, preferential_seats: BTreeSet<char>) -> Self {
        Self {
            last_column,
            preferential_seats,
        }
    }

    pub fn last_column(&self) -> char {
        self.last_column
    }

    /// Number of seats in the row.
    pub fn width(&self) -> u8 {
        column_width(self.last_column)
    }

    /// Checks whether `column` lies within the row. Case-insensitive.
    pub fn contains(&self, column: char) -> bool {
        let column = column.to_ascii_uppercase();
        column.is_ascii_uppercase() && column <= self.last_column
    }

    /// Checks whether `column` is a preferential seat. Case-insensitive.
    pub fn is_preferential(&self, column: char) -> bool {
        self.preferential_seats.contains(&column.to_ascii_uppercase())
    }

    pub fn preferential_seats(&self) -> impl Iterator<Item = char> + '_ {
        self.preferential_seats.iter().copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = char> {
        'A'..=self.last_column
    }

    /// Seats of this row when placed at `row_number`.
    pub fn seats(&self, row_number: u16) -> impl Iterator<Item = Seat> + '_ {
        self.columns()
            .map(move |column| Seat::from_parts(column, row_number, self.is_preferential(column)))
    }
}

fn column_width(last_column: char) -> u8 {
    (last_column as u8).saturating_sub(b'A') + 1
}
