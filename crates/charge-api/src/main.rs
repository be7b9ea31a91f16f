//! # ChargeTunis
//!
//! EV charging-station locator backend with a simulated payment flow.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export PORT=8000
//! export STATIONS_FILE=config/stations.toml
//! export LOG_FORMAT=json
//!
//! # Run the server
//! charge-tunis
//! ```

use charge_api::{routes, AppConfig, AppState, LogFormat};
use charge_core::{PaymentStrategy, StationStore};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(config.log_format);

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    // Initialize application state
    let state = AppState::initialize(config).await?;

    info!("Environment: {}", state.config.environment);
    info!(
        "Stations in {} store: {}",
        state.store.kind(),
        state.store.count().await?
    );
    info!("Payment provider: {}", state.strategy.provider_name());

    let app = routes::create_router(state);

    info!("ChargeTunis starting on http://{}", addr);
    if !is_prod {
        info!("Stations: GET http://{}/stations", addr);
        info!("Payments: POST http://{}/payments/intent", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("ChargeTunis stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
