//! # charge-core
//!
//! Core types and traits for the ChargeTunis charging-station backend.
//!
//! This crate provides:
//! - `luhn_check` for sanity-checking card numbers
//! - `Station`, `StationRecord` and `StationCatalog` for the station list
//! - `StationStore` trait and `InMemoryStationStore` for document storage
//! - `PaymentStrategy` trait for the two-step payment simulation
//! - `ChargeError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use charge_core::{seed_if_empty, InMemoryStationStore, StationCatalog, StationStore};
//!
//! let store = InMemoryStationStore::new();
//! seed_if_empty(&store, &StationCatalog::builtin()).await?;
//!
//! let second = chrono::Utc::now().second();
//! for record in store.list().await? {
//!     println!("{}: {} free", record.station.name, record.available_at(second));
//! }
//! ```

pub mod error;
pub mod luhn;
pub mod payment;
pub mod seed;
pub mod station;
pub mod store;
pub mod strategy;

// Re-exports for convenience
pub use error::{ChargeError, ChargeResult};
pub use luhn::{luhn_check, normalize_card_number, MIN_CARD_DIGITS};
pub use payment::{
    round_amount, Currency, PaymentConfirmation, PaymentIntent, PaymentIntentRequest,
    PaymentResult, PaymentStatus,
};
pub use seed::seed_if_empty;
pub use station::{
    simulated_availability, Station, StationCatalog, StationRecord, StationView,
    DEFAULT_CAPACITY,
};
pub use store::{InMemoryStationStore, SharedStationStore, StationStore, STATION_COLLECTION};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy};
