//! # charge-api
//!
//! HTTP API layer for the ChargeTunis backend.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Station listing with simulated availability
//! - Two-step payment simulation (intent, then confirm)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness message |
//! | GET | `/health` | Health check |
//! | GET | `/stations` | List stations with free connectors |
//! | POST | `/payments/intent` | Create payment intent |
//! | POST | `/payments/confirm` | Confirm payment with a card |
//! | GET | `/test` | Store diagnostics |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
