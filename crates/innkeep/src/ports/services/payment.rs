//! Payment Gateway Port
//!
//! Abstract interface for charging a customer. Real payment processing is
//! out of scope; implementations only have to report the outcome.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Outcome of a charge attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Declined,
}

/// Gateway interface for payment processing
///
/// A declined charge is a business outcome, not an error; `Err` is
/// reserved for the gateway itself failing.
pub trait PaymentGateway {
    /// Attempt to charge the given amount
    fn charge(&self, amount: f64) -> Result<PaymentStatus, DomainError>;
}
