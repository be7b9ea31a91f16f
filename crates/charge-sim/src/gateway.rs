//! # Simulated Gateway
//!
//! `PaymentStrategy` implementation that validates inputs and fabricates
//! identifiers instead of calling a processor.

use async_trait::async_trait;
use charge_core::{
    luhn_check, ChargeResult, Currency, PaymentConfirmation, PaymentIntent,
    PaymentIntentRequest, PaymentResult, PaymentStrategy,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Prefix of generated client secrets
pub const CLIENT_SECRET_PREFIX: &str = "pi_";

/// Prefix of generated transaction ids
pub const TRANSACTION_PREFIX: &str = "txn_";

const TRANSACTION_ID_HEX_LEN: usize = 12;

/// Gateway that accepts any Luhn-valid card
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    currency: Currency,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currency intents are priced in
    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn client_secret() -> String {
        format!("{}{}", CLIENT_SECRET_PREFIX, Uuid::new_v4().simple())
    }

    fn transaction_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}{}", TRANSACTION_PREFIX, &hex[..TRANSACTION_ID_HEX_LEN])
    }
}

#[async_trait]
impl PaymentStrategy for SimulatedGateway {
    #[instrument(skip(self), fields(station_id = %request.station_id))]
    async fn create_intent(&self, request: &PaymentIntentRequest) -> ChargeResult<PaymentIntent> {
        request.validate()?;

        let intent = PaymentIntent {
            client_secret: Self::client_secret(),
            amount_tnd: request.amount(self.currency),
            currency: self.currency,
        };

        info!(
            "Created payment intent: {} kWh x {} = {} {}",
            request.kwh, request.price_tnd_per_kwh, intent.amount_tnd, intent.currency
        );
        Ok(intent)
    }

    #[instrument(skip(self, confirmation), fields(client_secret = %confirmation.client_secret))]
    async fn confirm(&self, confirmation: &PaymentConfirmation) -> ChargeResult<PaymentResult> {
        if !luhn_check(&confirmation.card_number) {
            warn!("Card number failed Luhn check");
            return Ok(PaymentResult::failed("Invalid card number"));
        }

        let result = PaymentResult::succeeded(Self::transaction_id());
        info!("Payment confirmed: {:?}", result.transaction_id);
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "simulated"
    }
}
