//! # Payment Strategy Trait
//!
//! Strategy seam for payment providers. The backend ships a single
//! simulated gateway (`charge-sim`); a real provider would implement the
//! same trait and be swapped in through `AppState`.

use crate::error::ChargeResult;
use crate::payment::{PaymentConfirmation, PaymentIntent, PaymentIntentRequest, PaymentResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Create a payment intent for an amount of energy.
    ///
    /// # Returns
    /// A `PaymentIntent` with the client secret the caller confirms with.
    async fn create_intent(&self, request: &PaymentIntentRequest) -> ChargeResult<PaymentIntent>;

    /// Confirm a payment with card details.
    ///
    /// A declined card is an `Ok` result with `PaymentStatus::Failed`;
    /// `Err` is reserved for the provider itself failing.
    async fn confirm(&self, confirmation: &PaymentConfirmation) -> ChargeResult<PaymentResult>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;
