//! Reservation Repository Port
//!
//! Abstract interface for reservation persistence. The store holds one
//! whole-list snapshot: every save overwrites the previous one.

use crate::domain::{errors::DomainError, Reservation};

/// Repository interface for Reservation snapshots
pub trait ReservationRepository {
    /// Overwrite the stored snapshot with the given collection
    fn save_all(&self, reservations: &[Reservation]) -> Result<(), DomainError>;

    /// Load the stored snapshot
    ///
    /// An absent store is an empty collection; an unreadable or corrupt
    /// store is an error, so callers can tell the two apart.
    fn load_all(&self) -> Result<Vec<Reservation>, DomainError>;
}
