//! Seat value object and its ledger identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, DomainResult, ErrorCode, ErrorCollector};

use super::limits::MAX_ROW_NUMBER;

/// Normalizes a raw column label to a single uppercase letter.
///
/// Returns `None` unless the trimmed input is exactly one ASCII letter.
pub(crate) fn normalize_column(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// One physical seat.
///
/// Equality covers column, row and the preferential flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    column: char,
    row: u16,
    preferential: bool,
}

impl Seat {
    /// Validates raw seat input.
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_DATA` for each of `column`, `row` that is absent
    /// - `SEAT_WITH_INVALID_COLUMN_IDENTIFIER` if the column is not one letter
    /// - `SEAT_WITH_INVALID_ROW_NUMBER` if the row is not positive
    /// - `VALUE_OUT_OF_RANGE` if the row exceeds 250
    pub fn create(column: Option<&str>, row: Option<i64>, preferential: bool) -> DomainResult<Self> {
        let mut errors = ErrorCollector::new();
        let column = errors.require(column, "column");
        let row = errors.require(row, "row");
        let (Some(column), Some(row)) = (column, row) else {
            return Err(errors.into_errors());
        };

        let mut errors = ErrorCollector::new();
        let normalized = normalize_column(column);
        if normalized.is_none() {
            errors.push(
                DomainError::new(
                    ErrorCode::SeatWithInvalidColumnIdentifier,
                    format!("Seat column '{}' must be a single letter A-Z", column.trim()),
                )
                .with_detail("column", column.trim()),
            );
        }

        if row <= 0 {
            errors.push(
                DomainError::new(
                    ErrorCode::SeatWithInvalidRowNumber,
                    format!("Seat row {} must be a positive integer", row),
                )
                .with_detail("row", row.to_string()),
            );
        } else if row > i64::from(MAX_ROW_NUMBER) {
            errors.push(
                DomainError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("Seat row {} exceeds maximum of {}", row, MAX_ROW_NUMBER),
                )
                .with_detail("row", row.to_string())
                .with_detail("max", MAX_ROW_NUMBER.to_string()),
            );
        }

        match (normalized, u16::try_from(row)) {
            (Some(column), Ok(row)) if !errors.has_errors() => Ok(Self {
                column,
                row,
                preferential,
            }),
            _ => Err(errors.into_errors()),
        }
    }

    /// Builds a seat from already-validated parts.
    pub(crate) fn from_parts(column: char, row: u16, preferential: bool) -> Self {
        Self {
            column,
            row,
            preferential,
        }
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn is_preferential(&self) -> bool {
        self.preferential
    }

    /// Ledger key for this seat, e.g. `B12`.
    pub fn identifier(&self) -> SeatIdentifier {
        SeatIdentifier::new(self.column, self.row)
    }

    /// Returns a copy with the given preferential flag.
    pub fn with_preferential_status(self, preferential: bool) -> Self {
        if self.preferential == preferential {
            return self;
        }
        Self {
            preferential,
            ..self
        }
    }
}

/// Normalized `column + row` key used by the booking ledger.
///
/// Orders by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatIdentifier {
    row: u16,
    column: char,
}

impl SeatIdentifier {
    pub fn new(column: char, row: u16) -> Self {
        Self {
            row,
            column: column.to_ascii_uppercase(),
        }
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> u16 {
        self.row
    }
}

impl fmt::Display for SeatIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for SeatIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || {
            DomainError::new(
                ErrorCode::SeatWithInvalidColumnIdentifier,
                format!("'{}' is not a seat identifier", trimmed),
            )
            .with_detail("seat", trimmed)
        };

        let mut chars = trimmed.chars();
        let column = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(invalid)?;
        let row: u16 = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 || row > MAX_ROW_NUMBER {
            return Err(invalid());
        }
        Ok(Self::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Construction tests

    #[test]
    fn create_normalizes_column() {
        let seat = Seat::create(Some(" b "), Some(12), false).unwrap();
        assert_eq!(seat.column(), 'B');
        assert_eq!(seat.row(), 12);
        assert!(!seat.is_preferential());
    }

    #[test]
    fn create_reports_both_missing_fields() {
        let errors = Seat::create(None, None, false).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.errors().iter().all(|e| e.code == ErrorCode::MissingRequiredData));
        assert_eq!(errors.errors()[0].detail("field"), Some("column"));
        assert_eq!(errors.errors()[1].detail("field"), Some("row"));
    }

    #[test]
    fn create_rejects_multi_letter_column() {
        let errors = Seat::create(Some("AB"), Some(1), false).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatWithInvalidColumnIdentifier]);
    }

    #[test]
    fn create_rejects_non_letter_column() {
        let errors = Seat::create(Some("7"), Some(1), false).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatWithInvalidColumnIdentifier]);
    }

    #[test]
    fn create_rejects_non_positive_row() {
        let errors = Seat::create(Some("A"), Some(0), false).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatWithInvalidRowNumber]);

        let errors = Seat::create(Some("A"), Some(-3), false).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::SeatWithInvalidRowNumber]);
    }

    #[test]
    fn create_rejects_row_above_maximum() {
        assert!(Seat::create(Some("A"), Some(250), false).is_ok());

        let errors = Seat::create(Some("A"), Some(251), false).unwrap_err();
        assert_eq!(errors.codes(), vec![ErrorCode::ValueOutOfRange]);
    }

    #[test]
    fn create_accumulates_column_and_row_failures() {
        let errors = Seat::create(Some("??"), Some(0), false).unwrap_err();
        assert_eq!(
            errors.codes(),
            vec![
                ErrorCode::SeatWithInvalidColumnIdentifier,
                ErrorCode::SeatWithInvalidRowNumber
            ]
        );
    }

    // Value semantics

    #[test]
    fn equality_includes_preferential_flag() {
        let plain = Seat::create(Some("C"), Some(4), false).unwrap();
        let preferential = Seat::create(Some("C"), Some(4), true).unwrap();
        assert_ne!(plain, preferential);
        assert_eq!(plain.identifier(), preferential.identifier());
    }

    #[test]
    fn with_preferential_status_returns_updated_copy() {
        let seat = Seat::create(Some("C"), Some(4), false).unwrap();
        let upgraded = seat.with_preferential_status(true);

        assert!(upgraded.is_preferential());
        assert!(!seat.is_preferential());
        assert_eq!(seat.with_preferential_status(false), seat);
    }

    // Identifier tests

    #[test]
    fn identifier_renders_column_then_row() {
        let seat = Seat::create(Some("b"), Some(12), false).unwrap();
        assert_eq!(seat.identifier().to_string(), "B12");
    }

    #[test]
    fn identifier_parses_case_insensitively() {
        let id: SeatIdentifier = "c7".parse().unwrap();
        assert_eq!(id, SeatIdentifier::new('C', 7));
    }

    #[test]
    fn identifier_rejects_malformed_input() {
        for raw in ["", "7A", "A", "A0", "A251", "AB1", "A-1"] {
            assert!(raw.parse::<SeatIdentifier>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn identifiers_order_by_row_then_column() {
        let mut ids = vec![
            SeatIdentifier::new('B', 2),
            SeatIdentifier::new('A', 10),
            SeatIdentifier::new('C', 1),
            SeatIdentifier::new('A', 2),
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["C1", "A2", "B2", "A10"]);
    }
}
