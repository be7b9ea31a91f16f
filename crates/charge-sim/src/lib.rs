//! # charge-sim
//!
//! Simulated payment gateway for the ChargeTunis backend.
//!
//! No money moves. The gateway mimics the intent/confirm handshake of a
//! hosted card processor:
//!
//! 1. `create_intent` prices the requested energy and hands back a random
//!    `pi_...` client secret.
//! 2. `confirm` runs the Luhn check on the card number and either issues a
//!    `txn_...` transaction id or reports the card as invalid.
//!
//! Nothing is remembered between the two calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charge_core::{PaymentIntentRequest, PaymentStrategy};
//! use charge_sim::SimulatedGateway;
//!
//! let gateway = SimulatedGateway::new();
//! let intent = gateway
//!     .create_intent(&PaymentIntentRequest::new("st_1", 20.0, 1.2))
//!     .await?;
//! assert_eq!(intent.amount_tnd, 24.0);
//! ```

pub mod gateway;

pub use gateway::{SimulatedGateway, CLIENT_SECRET_PREFIX, TRANSACTION_PREFIX};
