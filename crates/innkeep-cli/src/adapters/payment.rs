//! Stub Payment Gateway
//!
//! Placeholder implementation of the `PaymentGateway` port. Logs the
//! amount and approves every charge; swap in a real processor behind the
//! same trait when one exists.

use innkeep::{DomainError, PaymentGateway, PaymentStatus};

/// Payment gateway that approves everything
pub struct StubPaymentGateway;

impl PaymentGateway for StubPaymentGateway {
    fn charge(&self, amount: f64) -> Result<PaymentStatus, DomainError> {
        tracing::info!("Processing payment of ${:.2}", amount);
        Ok(PaymentStatus::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_approves_any_amount() {
        let gateway = StubPaymentGateway;
        assert_eq!(gateway.charge(300.0).unwrap(), PaymentStatus::Approved);
        assert_eq!(gateway.charge(0.0).unwrap(), PaymentStatus::Approved);
    }
}
