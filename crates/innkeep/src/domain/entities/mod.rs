//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Room: a unit of bookable inventory with an availability flag
//! - Reservation: a customer's claim on one room for a date range

mod reservation;
mod room;

pub use reservation::*;
pub use room::*;
