//! Room - Bookable hotel inventory
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RoomCategory;

/// Room - A unit of bookable inventory
///
/// The room number is unique across the hotel for the whole process
/// lifetime. Everything except the availability flag is fixed at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number
    pub number: u32,
    /// Category of the room (standard, deluxe, suite)
    pub category: RoomCategory,
    /// Price per night, non-negative
    pub nightly_price: f64,
    /// Whether the room can currently be booked
    pub available: bool,
}

impl Room {
    /// Create a new room, available by default
    pub fn new(number: u32, category: RoomCategory, nightly_price: f64) -> Self {
        Self {
            number,
            category,
            nightly_price,
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_starts_available() {
        let room = Room::new(101, RoomCategory::Standard, 100.0);
        assert_eq!(room.number, 101);
        assert_eq!(room.category, RoomCategory::Standard);
        assert!(room.available);
    }
}
