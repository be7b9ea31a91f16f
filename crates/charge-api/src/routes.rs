//! # Routes
//!
//! Axum router configuration for the ChargeTunis API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  / - Liveness message
/// - GET  /health - Health check
/// - GET  /test - Store diagnostics
/// - GET  /stations - List stations with simulated availability
/// - POST /payments/intent - Create payment intent
/// - POST /payments/confirm - Confirm payment
pub fn create_router(state: AppState) -> Router {
    // The frontend is served from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let payment_routes = Router::new()
        .route("/intent", post(handlers::create_payment_intent))
        .route("/confirm", post(handlers::confirm_payment));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/test", get(handlers::diagnostics))
        .route("/stations", get(handlers::list_stations))
        .nest("/payments", payment_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
