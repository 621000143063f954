//! Service Ports
//!
//! Abstract interfaces for external services.

mod payment;

pub use payment::*;
