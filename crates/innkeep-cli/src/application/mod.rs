//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the repository and the payment gateway.

mod hotel_service;

pub use hotel_service::{BookingOutcome, HotelService};
