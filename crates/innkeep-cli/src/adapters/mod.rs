//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod file_store;
pub mod payment;

// Re-exports
pub use file_store::JsonReservationRepository;
pub use payment::StubPaymentGateway;
