//! Persisted shape of a screening.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::seating::SeatRowRecord;

/// Raw screening record as stored by persistence collaborators.
///
/// Every field is optional so that incomplete rows can be reported as
/// integrity failures by [`Screening::hydrate`](super::Screening::hydrate)
/// instead of failing deserialization. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningRecord {
    pub uid: Option<String>,

    #[serde(rename = "movieUID")]
    pub movie_uid: Option<String>,

    #[serde(rename = "roomUID")]
    pub room_uid: Option<String>,

    #[serde(rename = "administrativeStatus")]
    pub administrative_status: Option<String>,

    /// Seat identifier ("B12") to ticket uid.
    #[serde(rename = "bookedSeatsObj")]
    pub booked_seats: Option<BTreeMap<String, String>>,

    pub layout: Option<Vec<SeatRowRecord>>,

    #[serde(rename = "startsIn")]
    pub starts_in: Option<String>,

    #[serde(rename = "endsIn")]
    pub ends_in: Option<String>,
}

impl ScreeningRecord {
    /// Names of required fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.uid.is_none() {
            missing.push("uid");
        }
        if self.movie_uid.is_none() {
            missing.push("movieUID");
        }
        if self.room_uid.is_none() {
            missing.push("roomUID");
        }
        if self.administrative_status.is_none() {
            missing.push("administrativeStatus");
        }
        if self.booked_seats.is_none() {
            missing.push("bookedSeatsObj");
        }
        if self.layout.is_none() {
            missing.push("layout");
        }
        if self.starts_in.is_none() {
            missing.push("startsIn");
        }
        if self.ends_in.is_none() {
            missing.push("endsIn");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_reports_every_required_field() {
        let record = ScreeningRecord::default();
        assert_eq!(
            record.missing_fields(),
            vec![
                "uid",
                "movieUID",
                "roomUID",
                "administrativeStatus",
                "bookedSeatsObj",
                "layout",
                "startsIn",
                "endsIn"
            ]
        );
    }

    #[test]
    fn record_deserializes_wire_shape() {
        let json = r#"{
            "uid": "7c0f3a52-8a51-4f4e-9a0a-3c1f9b1d2e11",
            "movieUID": "0b5e6f2a-1111-4c3b-8f00-2a4b6c8d0e12",
            "roomUID": "c3d4e5f6-2222-4a1b-9c00-1a2b3c4d5e13",
            "administrativeStatus": "SCHEDULED",
            "bookedSeatsObj": { "A1": "9f8e7d6c-3333-4b2a-8d00-0a1b2c3d4e14" },
            "layout": [
                { "rowNumber": 1, "lastLetterColumn": "F", "preferentialSeats": ["A"] }
            ],
            "startsIn": "2030-01-01T18:00:00Z",
            "endsIn": "2030-01-01T20:00:00Z"
        }"#;

        let record: ScreeningRecord = serde_json::from_str(json).unwrap();
        assert!(record.missing_fields().is_empty());
        assert_eq!(record.booked_seats.as_ref().unwrap().len(), 1);
        assert_eq!(record.layout.as_ref().unwrap()[0].row_number, Some(1));
    }

    #[test]
    fn partial_record_deserializes_with_gaps() {
        let record: ScreeningRecord =
            serde_json::from_str(r#"{ "uid": "x", "layout": [] }"#).unwrap();
        assert!(record.missing_fields().contains(&"movieUID"));
        assert!(!record.missing_fields().contains(&"layout"));
    }
}
