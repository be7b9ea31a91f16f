//! # Seeding
//!
//! Populates an empty store with the seed catalog at startup.

use crate::error::ChargeResult;
use crate::station::StationCatalog;
use crate::store::StationStore;
use tracing::{debug, info};

/// Insert every catalog station if, and only if, the store is empty.
///
/// Returns the number of stations inserted (0 when the store already had data).
pub async fn seed_if_empty(
    store: &dyn StationStore,
    catalog: &StationCatalog,
) -> ChargeResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        debug!("Store already holds {} stations, skipping seed", existing);
        return Ok(0);
    }

    for station in &catalog.stations {
        let record = store.insert(station.clone()).await?;
        debug!("Seeded station {} ({})", record.station.name, record.id);
    }

    info!("Seeded {} stations into {} store", catalog.len(), store.kind());
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Station;
    use crate::store::InMemoryStationStore;

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let store = InMemoryStationStore::new();
        let inserted = seed_if_empty(&store, &StationCatalog::builtin()).await.unwrap();

        assert_eq!(inserted, 4);
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_skips_non_empty_store() {
        let store = InMemoryStationStore::new();
        store
            .insert(Station::new("Existing", "Tunis", 36.8, 10.1, 22, 0.5, 1))
            .await
            .unwrap();

        let inserted = seed_if_empty(&store, &StationCatalog::builtin()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seeding_twice_is_a_noop() {
        let store = InMemoryStationStore::new();
        let catalog = StationCatalog::builtin();
        seed_if_empty(&store, &catalog).await.unwrap();
        seed_if_empty(&store, &catalog).await.unwrap();

        assert_eq!(store.count().await.unwrap(), catalog.len());
    }
}
