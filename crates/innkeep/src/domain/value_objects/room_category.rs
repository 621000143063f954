//! RoomCategory - Classification of room inventory

use serde::{Deserialize, Serialize};

/// Room category classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    #[default]
    Standard,
    Deluxe,
    Suite,
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomCategory::Standard => write!(f, "Standard"),
            RoomCategory::Deluxe => write!(f, "Deluxe"),
            RoomCategory::Suite => write!(f, "Suite"),
        }
    }
}

impl std::str::FromStr for RoomCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(RoomCategory::Standard),
            "deluxe" => Ok(RoomCategory::Deluxe),
            "suite" => Ok(RoomCategory::Suite),
            _ => Err(format!("Unknown room category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(RoomCategory::from_str("Suite").unwrap(), RoomCategory::Suite);
        assert_eq!(
            RoomCategory::from_str("deluxe").unwrap(),
            RoomCategory::Deluxe
        );
        assert!(RoomCategory::from_str("penthouse").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for cat in [
            RoomCategory::Standard,
            RoomCategory::Deluxe,
            RoomCategory::Suite,
        ] {
            assert_eq!(RoomCategory::from_str(&cat.to_string()).unwrap(), cat);
        }
    }
}
