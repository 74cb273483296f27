//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub people: i32,
    /// `YYYY-MM-DD`; backends may send a full timestamp
    pub reservation_date: String,
    /// `HH:MM`; backends may send `HH:MM:SS`
    pub reservation_time: String,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// Create/edit reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub people: i32,
    pub reservation_date: String,
    pub reservation_time: String,
    /// Defaults to `booked` on the backend when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");

        let status: ReservationStatus = serde_json::from_str("\"seated\"").unwrap();
        assert_eq!(status, ReservationStatus::Seated);
    }

    #[test]
    fn missing_status_defaults_to_booked() {
        let reservation: Reservation = serde_json::from_value(serde_json::json!({
            "reservation_id": 1,
            "first_name": "Rick",
            "last_name": "Sanchez",
            "mobile_number": "202-555-0164",
            "people": 6,
            "reservation_date": "2025-12-30",
            "reservation_time": "20:00"
        }))
        .unwrap();
        assert_eq!(reservation.status, ReservationStatus::Booked);
    }
}
