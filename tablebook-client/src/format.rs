//! Reservation date/time normalization
//!
//! Backends may return `reservation_date` as a full timestamp and
//! `reservation_time` with seconds; dashboards expect plain `YYYY-MM-DD`
//! and `HH:MM`. Values that do not parse pass through untouched.
//!
//! Reservation-returning calls apply dates first, then times.

use chrono::{NaiveDate, NaiveTime};
use shared::models::Reservation;

/// Normalize `reservation_date` on a single record.
pub fn format_date(mut reservation: Reservation) -> Reservation {
    reservation.reservation_date = normalize_date(&reservation.reservation_date);
    reservation
}

/// Normalize `reservation_time` on a single record.
pub fn format_time(mut reservation: Reservation) -> Reservation {
    reservation.reservation_time = normalize_time(&reservation.reservation_time);
    reservation
}

/// Normalize dates across a result set.
pub fn format_reservation_dates(reservations: Vec<Reservation>) -> Vec<Reservation> {
    reservations.into_iter().map(format_date).collect()
}

/// Normalize times across a result set.
pub fn format_reservation_times(reservations: Vec<Reservation>) -> Vec<Reservation> {
    reservations.into_iter().map(format_time).collect()
}

fn normalize_date(raw: &str) -> String {
    // "2025-12-30T05:00:00.000Z" and "2025-12-30" both start with the date
    match raw.get(..10).map(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d")) {
        Some(Ok(date)) => date.format("%Y-%m-%d").to_string(),
        _ => raw.to_string(),
    }
}

fn normalize_time(raw: &str) -> String {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ReservationStatus;

    fn reservation(date: &str, time: &str) -> Reservation {
        Reservation {
            reservation_id: 1,
            first_name: "Frank".to_string(),
            last_name: "Sinatra".to_string(),
            mobile_number: "555-0100".to_string(),
            people: 2,
            reservation_date: date.to_string(),
            reservation_time: time.to_string(),
            status: ReservationStatus::Booked,
        }
    }

    #[test]
    fn timestamp_reduces_to_date_part() {
        let formatted = format_date(reservation("2025-12-30T05:00:00.000Z", "20:00"));
        assert_eq!(formatted.reservation_date, "2025-12-30");
    }

    #[test]
    fn plain_date_passes_through() {
        let formatted = format_date(reservation("2025-12-30", "20:00"));
        assert_eq!(formatted.reservation_date, "2025-12-30");
    }

    #[test]
    fn unparseable_date_is_left_alone() {
        let formatted = format_date(reservation("next tuesday", "20:00"));
        assert_eq!(formatted.reservation_date, "next tuesday");
    }

    #[test]
    fn seconds_are_dropped_from_time() {
        let formatted = format_time(reservation("2025-12-30", "20:45:00"));
        assert_eq!(formatted.reservation_time, "20:45");
    }

    #[test]
    fn short_time_passes_through() {
        let formatted = format_time(reservation("2025-12-30", "20:45"));
        assert_eq!(formatted.reservation_time, "20:45");
    }

    #[test]
    fn unparseable_time_is_left_alone() {
        let formatted = format_time(reservation("2025-12-30", "dinner"));
        assert_eq!(formatted.reservation_time, "dinner");
    }

    #[test]
    fn list_forms_map_every_record() {
        let formatted = format_reservation_times(format_reservation_dates(vec![
            reservation("2025-12-30T05:00:00.000Z", "20:45:00"),
            reservation("2025-12-31", "21:15"),
        ]));
        assert_eq!(formatted[0].reservation_date, "2025-12-30");
        assert_eq!(formatted[0].reservation_time, "20:45");
        assert_eq!(formatted[1].reservation_date, "2025-12-31");
        assert_eq!(formatted[1].reservation_time, "21:15");
    }
}
