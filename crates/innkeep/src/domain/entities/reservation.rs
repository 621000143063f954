//! Reservation - A customer's claim on a room
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation - Binds one customer, one room, and a date range
///
/// Immutable after construction. The booked room is referenced by its
/// number; the room's availability flag lives on the room itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier, positive and assigned monotonically
    pub id: u32,
    /// Number of the booked room
    pub room_number: u32,
    /// Free-text customer name
    pub customer_name: String,
    /// First night of the stay
    pub start_date: NaiveDate,
    /// Check-out date, strictly after the start
    pub end_date: NaiveDate,
}

impl Reservation {
    pub fn new(
        id: u32,
        room_number: u32,
        customer_name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            room_number,
            customer_name,
            start_date,
            end_date,
        }
    }

    /// Number of nights, as the whole-day difference between the dates
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn nights_is_whole_day_difference() {
        let r = Reservation::new(
            1,
            101,
            "Alice".to_string(),
            date("2024-01-01"),
            date("2024-01-04"),
        );
        assert_eq!(r.nights(), 3);
    }

    #[test]
    fn nights_spans_month_boundary() {
        let r = Reservation::new(
            2,
            201,
            "Bob".to_string(),
            date("2024-01-30"),
            date("2024-02-02"),
        );
        assert_eq!(r.nights(), 3);
    }
}
