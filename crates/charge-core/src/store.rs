//! # Station Store
//!
//! Document-store seam for stations. The backend only needs to count,
//! insert (at seed time) and list stations.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          StationStore (trait)            │
//! │  ├── count()                             │
//! │  ├── insert()                            │
//! │  ├── list()                              │
//! │  └── collections()                       │
//! └──────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴───────────┐
//!  ┌───────┴────────────┐
//!  │InMemoryStationStore│
//!  └────────────────────┘
//! ```

use crate::error::ChargeResult;
use crate::station::{Station, StationRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the collection stations live in
pub const STATION_COLLECTION: &str = "station";

/// Storage backend for stations
#[async_trait]
pub trait StationStore: Send + Sync {
    /// Number of stored stations
    async fn count(&self) -> ChargeResult<usize>;

    /// Validate and store a station, returning it with its assigned id
    async fn insert(&self, station: Station) -> ChargeResult<StationRecord>;

    /// All stored stations, in insertion order
    async fn list(&self) -> ChargeResult<Vec<StationRecord>>;

    /// Names of the collections that hold documents
    async fn collections(&self) -> ChargeResult<Vec<String>>;

    /// Backend name (for logging and diagnostics)
    fn kind(&self) -> &'static str;
}

/// Type alias for a shared store (dynamic dispatch)
pub type SharedStationStore = Arc<dyn StationStore>;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStationStore {
    stations: RwLock<Vec<StationRecord>>,
}

impl InMemoryStationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StationStore for InMemoryStationStore {
    async fn count(&self) -> ChargeResult<usize> {
        Ok(self.stations.read().await.len())
    }

    async fn insert(&self, station: Station) -> ChargeResult<StationRecord> {
        station.validate()?;
        let record = StationRecord {
            id: Uuid::new_v4().simple().to_string(),
            station,
        };
        self.stations.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> ChargeResult<Vec<StationRecord>> {
        Ok(self.stations.read().await.clone())
    }

    async fn collections(&self) -> ChargeResult<Vec<String>> {
        if self.stations.read().await.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![STATION_COLLECTION.to_string()])
        }
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
