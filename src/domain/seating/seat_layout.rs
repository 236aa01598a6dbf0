//! Full seat map of a room, snapshotted per screening.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{DomainError, DomainResult, ErrorCode, ErrorCollector, HydrationError};

use super::limits::MAX_ROW_NUMBER;
use super::seat::normalize_column;
use super::{Seat, SeatRow, SeatingLimits};

/// Persisted shape of one layout row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRowRecord {
    pub row_number: Option<i64>,
    pub last_letter_column: Option<String>,
    #[serde(default)]
    pub preferential_seats: Vec<String>,
}

impl SeatRowRecord {
    pub fn new(row_number: i64, last_letter_column: &str, preferential_seats: &[&str]) -> Self {
        Self {
            row_number: Some(row_number),
            last_letter_column: Some(last_letter_column.to_string()),
            preferential_seats: preferential_seats.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Immutable map of row number to row shape.
///
/// # Invariants
///
/// - at least one row
/// - row numbers are unique and within `1..=250`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    rows: BTreeMap<u16, SeatRow>,
}

impl SeatLayout {
    /// Validates a full layout. Failures from different rows accumulate.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` if there are no rows, or a row lacks its
    ///   number or last column
    /// - `VALUE_OUT_OF_RANGE` if a row number is outside `1..=250`
    /// - `DUPLICATE_ROW_NUMBER` if a row number repeats
    /// - any [`SeatRow::create`] failure
    pub fn create(rows: &[SeatRowRecord], limits: &SeatingLimits) -> DomainResult<Self> {
        if rows.is_empty() {
            return Err(DomainError::missing("layout").into());
        }

        let mut errors = ErrorCollector::new();
        let mut built = BTreeMap::new();

        for record in rows {
            let row_number = errors.require(record.row_number, "rowNumber");
            let last_column = errors.require(record.last_letter_column.as_deref(), "lastLetterColumn");
            let (Some(row_number), Some(last_column)) = (row_number, last_column) else {
                continue;
            };

            let Some(row_index) = u16::try_from(row_number)
                .ok()
                .filter(|n| (1..=MAX_ROW_NUMBER).contains(n))
            else {
                errors.push(
                    DomainError::new(
                        ErrorCode::ValueOutOfRange,
                        format!("Row number {} must be between 1 and {}", row_number, MAX_ROW_NUMBER),
                    )
                    .with_detail("row", row_number.to_string()),
                );
                continue;
            };

            if built.contains_key(&row_index) {
                errors.push(
                    DomainError::new(
                        ErrorCode::DuplicateRowNumber,
                        format!("Row number {} appears more than once", row_index),
                    )
                    .with_detail("row", row_index.to_string()),
                );
                continue;
            }

            let row = SeatRow::create(row_index, last_column, &record.preferential_seats, limits);
            if let Some(row) = errors.absorb(row) {
                built.insert(row_index, row);
            }
        }

        errors.finish()?;
        Ok(Self { rows: built })
    }

    /// Rebuilds a layout from trusted persisted rows.
    ///
    /// # Errors
    ///
    /// Returns `HydrationError` if the records are incomplete or malformed.
    pub fn hydrate(rows: &[SeatRowRecord]) -> Result<Self, HydrationError> {
        const ENTITY: &str = "SeatLayout";

        if rows.is_empty() {
            return Err(HydrationError::inconsistent(ENTITY, "layout has no rows"));
        }

        let mut built = BTreeMap::new();
        for record in rows {
            let mut missing = Vec::new();
            if record.row_number.is_none() {
                missing.push("rowNumber");
            }
            if record.last_letter_column.is_none() {
                missing.push("lastLetterColumn");
            }
            let (Some(row_number), Some(last_column)) =
                (record.row_number, record.last_letter_column.as_deref())
            else {
                return Err(HydrationError::missing_fields(ENTITY, missing));
            };

            let row_index = u16::try_from(row_number)
                .ok()
                .filter(|n| (1..=MAX_ROW_NUMBER).contains(n))
                .ok_or_else(|| {
                    HydrationError::invalid_value(ENTITY, "rowNumber", row_number.to_string())
                })?;
            let last = normalize_column(last_column).ok_or_else(|| {
                HydrationError::invalid_value(ENTITY, "lastLetterColumn", last_column)
            })?;

            let mut preferential = BTreeSet::new();
            for raw in &record.preferential_seats {
                let column = normalize_column(raw)
                    .filter(|c| *c <= last)
                    .ok_or_else(|| {
                        HydrationError::invalid_value(ENTITY, "preferentialSeats", raw.as_str())
                    })?;
                preferential.insert(column);
            }

            if built
                .insert(row_index, SeatRow::hydrate(last, preferential))
                .is_some()
            {
                return Err(HydrationError::inconsistent(
                    ENTITY,
                    format!("row {} appears more than once", row_index),
                ));
            }
        }

        Ok(Self { rows: built })
    }

    /// Produces the persisted shape of this layout, ordered by row number.
    pub fn to_records(&self) -> Vec<SeatRowRecord> {
        self.rows
            .iter()
            .map(|(number, row)| SeatRowRecord {
                row_number: Some(i64::from(*number)),
                last_letter_column: Some(row.last_column().to_string()),
                preferential_seats: row.preferential_seats().map(String::from).collect(),
            })
            .collect()
    }

    /// Checks whether the seat exists. Column matching is case-insensitive.
    pub fn has_seat(&self, row: u16, column: char) -> bool {
        self.rows
            .get(&row)
            .map(|r| r.contains(column))
            .unwrap_or(false)
    }

    /// Checks whether the seat exists and is preferential.
    pub fn is_preferential(&self, row: u16, column: char) -> bool {
        self.rows
            .get(&row)
            .map(|r| r.contains(column) && r.is_preferential(column))
            .unwrap_or(false)
    }

    /// Returns the seat at `row`/`column` if it exists.
    pub fn seat(&self, row: u16, column: char) -> Option<Seat> {
        let row_shape = self.rows.get(&row)?;
        if !row_shape.contains(column) {
            return None;
        }
        let column = column.to_ascii_uppercase();
        Some(Seat::from_parts(column, row, row_shape.is_preferential(column)))
    }

    /// Resolves raw caller input to a seat of this layout.
    ///
    /// Anything that cannot name a seat here (negative rows, multi-letter
    /// columns, rows beyond the layout) resolves to `None`.
    pub fn locate(&self, row: i64, column: &str) -> Option<Seat> {
        let row = u16::try_from(row).ok()?;
        let column = normalize_column(column)?;
        self.seat(row, column)
    }

    pub fn row(&self, number: u16) -> Option<&SeatRow> {
        self.rows.get(&number)
    }

    /// Rows ordered by row number.
    pub fn rows(&self) -> impl Iterator<Item = (u16, &SeatRow)> {
        self.rows.iter().map(|(number, row)| (*number, row))
    }

    /// Every seat, row by row.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.rows.iter().flat_map(|(number, row)| row.seats(*number))
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.rows.values().map(|r| usize::from(r.width())).sum()
    }

    /// Number of preferential seats.
    pub fn preferential_capacity(&self) -> usize {
        self.rows.values().map(|r| r.preferential_seats().count()).sum()
    }
}
