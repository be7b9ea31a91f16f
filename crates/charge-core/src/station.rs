//! # Station Types
//!
//! Charging stations as stored in the document store, plus the seed
//! catalog loaded from `config/stations.toml`.
//!
//! Availability is never stored. It is simulated per request from the
//! wall-clock second, see [`simulated_availability`].

use crate::error::{ChargeError, ChargeResult};
use serde::{Deserialize, Serialize};

/// Connector count assumed for documents stored without one
pub const DEFAULT_CAPACITY: u32 = 4;

const MIN_POWER_KW: u32 = 3;
const MAX_POWER_KW: u32 = 350;

/// A charging station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Display name (e.g., "Lac 1 Supercharger")
    pub name: String,

    /// City name
    pub city: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Power rating in kW (3..=350)
    pub power_kw: u32,

    /// Price in TND per kWh (>= 0)
    pub price_tnd_per_kwh: f64,

    /// Total number of connectors (>= 1)
    #[serde(default = "default_capacity")]
    pub capacity: u32,

    /// Operator brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

impl Station {
    /// Create a station with the required fields
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        latitude: f64,
        longitude: f64,
        power_kw: u32,
        price_tnd_per_kwh: f64,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            latitude,
            longitude,
            power_kw,
            price_tnd_per_kwh,
            capacity,
            brand: None,
        }
    }

    /// Builder: set brand
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Check field constraints before the station is stored
    pub fn validate(&self) -> ChargeResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChargeError::validation("name", "must not be empty"));
        }
        if self.city.trim().is_empty() {
            return Err(ChargeError::validation("city", "must not be empty"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChargeError::validation("latitude", "must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChargeError::validation(
                "longitude",
                "must be between -180 and 180",
            ));
        }
        if !(MIN_POWER_KW..=MAX_POWER_KW).contains(&self.power_kw) {
            return Err(ChargeError::validation(
                "power_kw",
                format!("must be between {} and {}", MIN_POWER_KW, MAX_POWER_KW),
            ));
        }
        if !self.price_tnd_per_kwh.is_finite() || self.price_tnd_per_kwh < 0.0 {
            return Err(ChargeError::validation(
                "price_tnd_per_kwh",
                "must be greater than or equal to 0",
            ));
        }
        if self.capacity < 1 {
            return Err(ChargeError::validation("capacity", "must be at least 1"));
        }
        Ok(())
    }
}

/// Number of free connectors for a station of `capacity` at wall-clock `second`.
///
/// `second % (capacity + 1)` connectors are treated as occupied, so the
/// result cycles through `capacity..=0` and never exceeds `capacity`.
pub fn simulated_availability(capacity: u32, second: u32) -> u32 {
    let occupied = second % (capacity.saturating_add(1));
    capacity.saturating_sub(occupied)
}

/// A station as held by the store, with its assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,

    #[serde(flatten)]
    pub station: Station,
}

impl StationRecord {
    /// Simulated free connectors at wall-clock `second`
    pub fn available_at(&self, second: u32) -> u32 {
        simulated_availability(self.station.capacity, second)
    }

    /// Attach the simulated availability for a listing response
    pub fn view_at(self, second: u32) -> StationView {
        let available = self.available_at(second);
        StationView {
            record: self,
            available,
        }
    }
}

/// A station as returned by `GET /stations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationView {
    #[serde(flatten)]
    pub record: StationRecord,

    /// Free connectors at the time of the request
    pub available: u32,
}

/// Seed catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationCatalog {
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl StationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
        }
    }

    /// Add a station to the catalog
    pub fn add(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// The four ChargeTunis stations used when no catalog file is configured
    pub fn builtin() -> Self {
        Self {
            stations: vec![
                Station::new("Lac 1 Supercharger", "Tunis", 36.849, 10.283, 120, 1.2, 6)
                    .with_brand("ChargeTunis"),
                Station::new("La Marsa Marina", "La Marsa", 36.878, 10.325, 50, 1.0, 4)
                    .with_brand("ChargeTunis"),
                Station::new("Sfax City Center", "Sfax", 34.739, 10.760, 60, 0.9, 3)
                    .with_brand("ChargeTunis"),
                Station::new("Sousse Corniche", "Sousse", 35.830, 10.638, 80, 1.1, 5)
                    .with_brand("ChargeTunis"),
            ],
        }
    }

    /// Load catalog from TOML string, validating every station
    pub fn from_toml(toml_str: &str) -> ChargeResult<Self> {
        let catalog: StationCatalog = toml::from_str(toml_str)?;
        for station in &catalog.stations {
            station.validate()?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
