//! Hotel Application Service (Use Case)
//!
//! Sole authority over room and reservation state. Mutations go through
//! here: availability checks, payment sequencing, and snapshot
//! persistence. The snapshot is written before the in-memory commit, so
//! disk and memory never disagree.

use chrono::NaiveDate;

use innkeep::{
    DomainError, PaymentGateway, PaymentStatus, Reservation, ReservationRepository, Room,
    RoomCategory,
};

/// Fixed room inventory, created once per service
const SEED_ROOMS: [(u32, RoomCategory, f64); 3] = [
    (101, RoomCategory::Standard, 100.0),
    (102, RoomCategory::Deluxe, 150.0),
    (201, RoomCategory::Suite, 200.0),
];

/// Outcome of a booking attempt
///
/// Unavailable rooms and declined payments are normal business outcomes;
/// errors are reserved for bad input and infrastructure failures.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed { reservation: Reservation, total: f64 },
    RoomUnavailable,
    PaymentDeclined { total: f64 },
}

/// Application service for hotel operations
pub struct HotelService<R: ReservationRepository, P: PaymentGateway> {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    /// Next reservation id; monotonic, never reused after cancellation
    next_id: u32,
    repository: R,
    payment: P,
}

impl<R: ReservationRepository, P: PaymentGateway> HotelService<R, P> {
    /// Create a service with the fixed seed inventory, all rooms available
    pub fn new(repository: R, payment: P) -> Self {
        let rooms = SEED_ROOMS
            .iter()
            .map(|&(number, category, price)| Room::new(number, category, price))
            .collect();

        Self {
            rooms,
            reservations: Vec::new(),
            next_id: 1,
            repository,
            payment,
        }
    }

    /// Replace the in-memory reservations with the stored snapshot
    ///
    /// Reconciles room flags afterwards: every room referenced by a loaded
    /// reservation is marked unavailable. The id counter resumes past the
    /// highest loaded id.
    pub fn load(&mut self) -> Result<(), DomainError> {
        let loaded = self.repository.load_all()?;

        self.next_id = loaded.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        for room in &mut self.rooms {
            room.available = true;
        }
        for reservation in &loaded {
            match self
                .rooms
                .iter_mut()
                .find(|room| room.number == reservation.room_number)
            {
                Some(room) => room.available = false,
                None => tracing::warn!(
                    "Reservation {} references unknown room {}",
                    reservation.id,
                    reservation.room_number
                ),
            }
        }

        tracing::info!("Loaded {} reservation(s)", loaded.len());
        self.reservations = loaded;
        Ok(())
    }

    /// Rooms currently available, in creation order
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|room| room.available).collect()
    }

    /// Current reservations, oldest first
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }

    /// Book a room for the given customer and date range
    ///
    /// The charge is attempted before anything is mutated or persisted, so
    /// a declined payment leaves no trace in memory or on disk.
    pub fn book(
        &mut self,
        room_number: u32,
        customer_name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<BookingOutcome, DomainError> {
        if end_date <= start_date {
            return Err(DomainError::Validation(format!(
                "End date {} must be after start date {}",
                end_date, start_date
            )));
        }

        let room_index = self
            .rooms
            .iter()
            .position(|room| room.number == room_number)
            .ok_or_else(|| DomainError::not_found("Room", room_number))?;

        if !self.rooms[room_index].available {
            return Ok(BookingOutcome::RoomUnavailable);
        }

        let reservation = Reservation::new(
            self.next_id,
            room_number,
            customer_name,
            start_date,
            end_date,
        );
        let total = self.rooms[room_index].nightly_price * reservation.nights() as f64;

        match self.payment.charge(total)? {
            PaymentStatus::Declined => {
                tracing::warn!(
                    "Payment of ${:.2} declined for room {}",
                    total,
                    room_number
                );
                Ok(BookingOutcome::PaymentDeclined { total })
            }
            PaymentStatus::Approved => {
                let mut snapshot = self.reservations.clone();
                snapshot.push(reservation.clone());
                self.repository.save_all(&snapshot)?;

                self.reservations = snapshot;
                self.rooms[room_index].available = false;
                self.next_id += 1;

                tracing::info!(
                    "Booked room {} for {} ({} nights, ${:.2})",
                    room_number,
                    reservation.customer_name,
                    reservation.nights(),
                    total
                );
                Ok(BookingOutcome::Confirmed { reservation, total })
            }
        }
    }

    /// Cancel the reservation with the given id, freeing its room
    pub fn cancel(&mut self, reservation_id: u32) -> Result<Reservation, DomainError> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.id == reservation_id)
            .ok_or_else(|| DomainError::not_found("Reservation", reservation_id))?;

        let mut snapshot = self.reservations.clone();
        let removed = snapshot.remove(position);
        self.repository.save_all(&snapshot)?;

        self.reservations = snapshot;
        match self
            .rooms
            .iter_mut()
            .find(|room| room.number == removed.room_number)
        {
            Some(room) => room.available = true,
            None => tracing::warn!(
                "Cancelled reservation {} referenced unknown room {}",
                removed.id,
                removed.room_number
            ),
        }

        tracing::info!("Cancelled reservation {}", reservation_id);
        Ok(removed)
    }
}
