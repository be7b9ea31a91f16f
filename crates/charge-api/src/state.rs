//! # Application State
//!
//! Shared state for the Axum application.
//! Contains configuration, the station store and the payment strategy.

use charge_core::{
    seed_if_empty, BoxedPaymentStrategy, InMemoryStationStore, SharedStationStore,
    StationCatalog,
};
use charge_sim::SimulatedGateway;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Explicit station catalog file
    pub stations_file: Option<String>,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            stations_file: std::env::var("STATIONS_FILE").ok().filter(|p| !p.is_empty()),
            log_format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            stations_file: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Station document store
    pub store: SharedStationStore,
    /// Payment provider
    pub strategy: BoxedPaymentStrategy,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Assemble state from already-built parts
    pub fn with_parts(
        config: AppConfig,
        store: SharedStationStore,
        strategy: BoxedPaymentStrategy,
    ) -> Self {
        Self {
            store,
            strategy,
            config,
        }
    }

    /// Create state with an in-memory store seeded from the station catalog
    /// and the simulated payment gateway
    pub async fn initialize(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = load_station_catalog(config.stations_file.as_deref())?;

        let store: SharedStationStore = Arc::new(InMemoryStationStore::new());

        // A failed seed leaves the server up with whatever the store holds
        if let Err(e) = seed_if_empty(store.as_ref(), &catalog).await {
            error!("Seed error: {}", e);
        }

        let strategy: BoxedPaymentStrategy = Arc::new(SimulatedGateway::new());

        Ok(Self::with_parts(config, store, strategy))
    }
}

/// Load the seed catalog from `explicit_path`, `config/stations.toml`, or
/// fall back to the built-in stations
pub fn load_station_catalog(explicit_path: Option<&str>) -> anyhow::Result<StationCatalog> {
    if let Some(path) = explicit_path {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
        return parse_catalog(&content, path);
    }

    let config_paths = [
        "config/stations.toml",
        "../config/stations.toml",
        "../../config/stations.toml",
    ];

    for path in config_paths {
        if Path::new(path).is_file() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
            return parse_catalog(&content, path);
        }
    }

    warn!("No station catalog found, using built-in stations");
    Ok(StationCatalog::builtin())
}

fn parse_catalog(content: &str, path: &str) -> anyhow::Result<StationCatalog> {
    let catalog = StationCatalog::from_toml(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
    info!("Loaded {} stations from {}", catalog.len(), path);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use charge_core::{PaymentStrategy, StationStore};

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(!config.is_production());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..AppConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }

    #[test]
    fn test_missing_explicit_catalog_is_an_error() {
        assert!(load_station_catalog(Some("/nonexistent/stations.toml")).is_err());
    }

    #[tokio::test]
    async fn test_initialize_seeds_store() {
        let state = AppState::initialize(AppConfig::default()).await.unwrap();
        assert!(state.store.count().await.unwrap() > 0);
        assert_eq!(state.strategy.provider_name(), "simulated");
    }
}
