//! Tunable bounds for seat-row shapes.

use serde::{Deserialize, Serialize};

/// Highest row number a layout may contain.
pub const MAX_ROW_NUMBER: u16 = 250;

/// Limits applied when validating a [`SeatRow`](super::SeatRow).
///
/// | Limit | Default |
/// |-------|---------|
/// | `min_row_width` | 4 (A–D) |
/// | `max_row_width` | 26 (A–Z) |
/// | `max_preferential_seats` | 4 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingLimits {
    /// Narrowest row allowed, in columns.
    pub min_row_width: u8,
    /// Widest row allowed, in columns. Never more than 26.
    pub max_row_width: u8,
    /// Maximum preferential seats per row.
    pub max_preferential_seats: usize,
}

impl SeatingLimits {
    /// Checks whether a row of `width` columns is allowed.
    pub fn allows_width(&self, width: u8) -> bool {
        width >= self.min_row_width && width <= self.max_row_width
    }
}

impl Default for SeatingLimits {
    fn default() -> Self {
        Self {
            min_row_width: 4,
            max_row_width: 26,
            max_preferential_seats: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let limits = SeatingLimits::default();
        assert_eq!(limits.min_row_width, 4);
        assert_eq!(limits.max_row_width, 26);
        assert_eq!(limits.max_preferential_seats, 4);
    }

    #[test]
    fn allows_width_is_inclusive() {
        let limits = SeatingLimits::default();
        assert!(!limits.allows_width(3));
        assert!(limits.allows_width(4));
        assert!(limits.allows_width(26));
        assert!(!limits.allows_width(27));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let limits: SeatingLimits =
            serde_json::from_str(r#"{"max_preferential_seats": 6}"#).unwrap();
        assert_eq!(limits.max_preferential_seats, 6);
        assert_eq!(limits.min_row_width, 4);
    }
}
