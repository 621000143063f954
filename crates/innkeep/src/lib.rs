//! Innkeep Domain Library
//!
//! Core domain types and interfaces for the innkeep hotel reservation
//! manager.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Room, Reservation)
//!   - `value_objects/`: Immutable value types (RoomCategory)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use innkeep::domain::{Room, Reservation, RoomCategory};
//! use innkeep::ports::{ReservationRepository, PaymentGateway};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Reservation, Room, RoomCategory};
pub use ports::{PaymentGateway, PaymentStatus, ReservationRepository};
