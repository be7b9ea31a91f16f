//! # Payment Types
//!
//! Request and response types for the two-step payment simulation:
//! create an intent, then confirm it with card details.
//! None of these are persisted; they live for one request/response cycle.

use crate::error::{ChargeError, ChargeResult};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Tunisian dinar
    #[default]
    TND,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::TND => "TND",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (TND is divided into 1000 millimes)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::TND => 3,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Above 2^52 every f64 is already a whole number of smallest units
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round an amount to the precision of `currency`, half away from zero.
///
/// Stays in f64 so amounts beyond the range of a smallest-unit integer
/// come back unchanged instead of saturating.
pub fn round_amount(amount: f64, currency: Currency) -> f64 {
    let multiplier = 10_f64.powi(currency.decimal_places() as i32);
    let scaled = amount * multiplier;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return amount;
    }
    scaled.round() / multiplier
}

/// Payload for `POST /payments/intent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Station the energy is bought at (not looked up)
    pub station_id: String,

    /// Energy to charge, in kWh (> 0)
    pub kwh: f64,

    /// Unit price in TND per kWh (>= 0)
    pub price_tnd_per_kwh: f64,
}

impl PaymentIntentRequest {
    pub fn new(station_id: impl Into<String>, kwh: f64, price_tnd_per_kwh: f64) -> Self {
        Self {
            station_id: station_id.into(),
            kwh,
            price_tnd_per_kwh,
        }
    }

    /// Check the numeric constraints on the request
    pub fn validate(&self) -> ChargeResult<()> {
        if !self.kwh.is_finite() || self.kwh <= 0.0 {
            return Err(ChargeError::validation("kwh", "must be greater than 0"));
        }
        if !self.price_tnd_per_kwh.is_finite() || self.price_tnd_per_kwh < 0.0 {
            return Err(ChargeError::validation(
                "price_tnd_per_kwh",
                "must be greater than or equal to 0",
            ));
        }
        if !(self.kwh * self.price_tnd_per_kwh).is_finite() {
            return Err(ChargeError::validation(
                "amount_tnd",
                "kwh * price_tnd_per_kwh is too large",
            ));
        }
        Ok(())
    }

    /// Total to charge, rounded to millimes
    pub fn amount(&self, currency: Currency) -> f64 {
        round_amount(self.kwh * self.price_tnd_per_kwh, currency)
    }
}

/// A created payment intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Opaque handshake token (`pi_...`)
    pub client_secret: String,

    /// Amount to pay
    pub amount_tnd: f64,

    /// Currency of `amount_tnd`
    #[serde(default)]
    pub currency: Currency,
}

/// Payload for `POST /payments/confirm`.
///
/// Only `card_number` is checked. Expiry and CVC are carried through unverified.
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub client_secret: String,
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
    pub cvc: String,
}

impl std::fmt::Debug for PaymentConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfirmation")
            .field("client_secret", &self.client_secret)
            .field("card_number", &"<redacted>")
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &"<redacted>")
            .finish()
    }
}

/// Outcome of a confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    Failed,
}

/// Result of `POST /payments/confirm`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub status: PaymentStatus,

    /// Set only when the payment succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PaymentResult {
    pub fn succeeded(transaction_id: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Succeeded,
            transaction_id: Some(transaction_id.into()),
            message: Some("Payment confirmed".to_string()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Failed,
            transaction_id: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(Currency::TND.decimal_places(), 3);
        assert_eq!(Currency::TND.to_string(), "TND");
        assert_eq!(serde_json::to_value(Currency::TND).unwrap(), "TND");
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(1.2344, Currency::TND), 1.234);
        assert_eq!(round_amount(1.2346, Currency::TND), 1.235);
        assert_eq!(round_amount(0.0, Currency::TND), 0.0);
    }

    #[test]
    fn test_large_amount_is_not_clamped() {
        let request = PaymentIntentRequest::new("st", 1e20, 1.0);
        assert!(request.validate().is_ok());
        assert_eq!(request.amount(Currency::TND), 1e20);

        let request = PaymentIntentRequest::new("st", 1e13, 1.5);
        assert_eq!(request.amount(Currency::TND), 1.5e13);
    }

    #[test]
    fn test_overflowing_amount_is_rejected() {
        let err = PaymentIntentRequest::new("st", 1e300, 1e300)
            .validate()
            .unwrap_err();
        assert!(
            matches!(err, ChargeError::Validation { ref field, .. } if field == "amount_tnd")
        );
    }

    #[test]
    fn test_amount_rounds_to_millimes() {
        let request = PaymentIntentRequest::new("st_1", 12.3456, 1.0);
        assert_eq!(request.amount(Currency::TND), 12.346);

        let request = PaymentIntentRequest::new("st_1", 20.0, 1.2);
        assert_eq!(request.amount(Currency::TND), 24.0);
    }

    #[test]
    fn test_intent_validation() {
        assert!(PaymentIntentRequest::new("st", 10.0, 0.0).validate().is_ok());

        let err = PaymentIntentRequest::new("st", 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ChargeError::Validation { ref field, .. } if field == "kwh"));

        let err = PaymentIntentRequest::new("st", 5.0, -0.5).validate().unwrap_err();
        assert!(
            matches!(err, ChargeError::Validation { ref field, .. } if field == "price_tnd_per_kwh")
        );

        assert!(PaymentIntentRequest::new("st", f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_result_serialization_omits_missing_fields() {
        let failed = serde_json::to_value(PaymentResult::failed("Invalid card number")).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({"status": "failed", "message": "Invalid card number"})
        );

        let ok = serde_json::to_value(PaymentResult::succeeded("txn_abc")).unwrap();
        assert_eq!(ok["status"], "succeeded");
        assert_eq!(ok["transaction_id"], "txn_abc");
    }

    #[test]
    fn test_confirmation_debug_redacts_card() {
        let confirmation = PaymentConfirmation {
            client_secret: "pi_1".into(),
            card_number: "4242424242424242".into(),
            exp_month: 12,
            exp_year: 2030,
            cvc: "123".into(),
        };
        let debug = format!("{:?}", confirmation);
        assert!(!debug.contains("4242"));
        assert!(debug.contains("pi_1"));
    }

    #[test]
    fn test_confirmation_accepts_any_expiry() {
        let confirmation: PaymentConfirmation = serde_json::from_value(serde_json::json!({
            "client_secret": "pi_1",
            "card_number": "4242424242424242",
            "exp_month": -3,
            "exp_year": -1,
            "cvc": ""
        }))
        .unwrap();
        assert_eq!(confirmation.exp_month, -3);
        assert_eq!(confirmation.exp_year, -1);
    }
}
