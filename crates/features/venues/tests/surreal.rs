#![cfg(feature = "surreal")]

use encontra_database::Database;
use encontra_venues::{
    LookupError, StoreError, SurrealVenueStore, VenueLookupCoordinator, VenueRecord,
};
use serde_json::{Value, json};

fn record(value: Value) -> VenueRecord {
    serde_json::from_value(value).unwrap()
}

async fn store() -> SurrealVenueStore {
    let db = Database::in_memory("test", "venues").await.unwrap();
    let store = SurrealVenueStore::bootstrap(db).await.unwrap();

    for value in [
        json!({
            "id": "venue:1", "slug": "cafe-austral", "regionCode": "tdf", "name": "Café Austral"
        }),
        json!({ "id": "venue:2", "slug": "dique", "regionCode": "CBA", "name": "Dique" }),
    ] {
        store.seed(&record(value)).await.unwrap();
    }
    store
}

#[tokio::test]
async fn scoped_and_global_reads() {
    let coordinator = VenueLookupCoordinator::new(store().await);

    let details = coordinator.lookup(Some("tdf"), "cafe-austral").await.unwrap();
    assert_eq!(details.venue.id, "venue:1");

    let details = coordinator.lookup(None, "dique").await.unwrap();
    assert_eq!(details.venue.region_code.as_str(), "cba");
    assert!(coordinator.lookup(Some("cba"), "dique").await.is_ok());

    let err = coordinator.lookup(Some("cba"), "cafe-austral").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn slug_is_unique_per_region_only() {
    let store = store().await;
    let other = json!({ "id": "venue:3", "slug": "dique", "regionCode": "tdf", "name": "Otro" });
    store.seed(&record(other)).await.unwrap();

    let coordinator = VenueLookupCoordinator::new(store);
    let tdf = coordinator.lookup(Some("tdf"), "dique").await.unwrap();
    assert_eq!(tdf.venue.id, "venue:3");
    let cba = coordinator.lookup(Some("cba"), "dique").await.unwrap();
    assert_eq!(cba.venue.id, "venue:2");

    // Shared slugs resolve globally to the lowest region code.
    let global = coordinator.lookup(None, "dique").await.unwrap();
    assert_eq!(global.venue.id, "venue:2");

    let copy = json!({ "id": "venue:4", "slug": "dique", "regionCode": "tdf", "name": "Copia" });
    let err = coordinator.store().seed(&record(copy)).await.unwrap_err();
    assert!(matches!(err, StoreError::Database { .. }));
}

#[tokio::test]
async fn malformed_document_is_store_unavailable() {
    let db = Database::in_memory("test", "broken").await.unwrap();
    let store = SurrealVenueStore::bootstrap(db.clone()).await.unwrap();
    db.execute("CREATE venue SET slug = 'roto', region_code = 'tdf', document = '{not json';")
        .await
        .unwrap();

    let err = VenueLookupCoordinator::new(store).lookup(Some("tdf"), "roto").await.unwrap_err();
    assert!(matches!(
        err,
        LookupError::StoreUnavailable { source: StoreError::Malformed { .. }, .. }
    ));
}
