// Integration tests for favorites durability: state written by one store
// instance must be visible to a fresh instance hydrating from the same
// backend, which is exactly what an app restart looks like.

use std::sync::Arc;

use magick_core::{App, Catalog, DeckSelector, FavoritesStore, FileStorage, MemoryStorage};

#[tokio::test]
async fn test_favorite_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()));

    {
        let mut store = FavoritesStore::new(storage.clone());
        store.hydrate().await;
        store.toggle("mixer_1").await.unwrap();
        assert!(store.is_favorite("mixer_1"));
    }

    // Fresh instance over the same directory, as after a process restart.
    let mut store = FavoritesStore::new(storage);
    store.hydrate().await;
    assert!(store.is_favorite("mixer_1"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_unfavorite_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()));

    {
        let mut store = FavoritesStore::new(storage.clone());
        store.hydrate().await;
        store.toggle("mixer_1").await.unwrap();
        store.toggle("mixer_2").await.unwrap();
        store.toggle("mixer_1").await.unwrap();
    }

    let mut store = FavoritesStore::new(storage);
    store.hydrate().await;
    assert!(!store.is_favorite("mixer_1"));
    assert!(store.is_favorite("mixer_2"));
}

#[tokio::test]
async fn test_add_order_survives_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()));

    {
        let mut store = FavoritesStore::new(storage.clone());
        store.hydrate().await;
        store.toggle("midnight_2").await.unwrap();
        store.toggle("mixer_1").await.unwrap();
        store.toggle("mixer_3").await.unwrap();
    }

    let mut store = FavoritesStore::new(storage);
    store.hydrate().await;
    let ids: Vec<&str> = store
        .resolve(Catalog::builtin())
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["midnight_2", "mixer_1", "mixer_3"]);
}

#[tokio::test]
async fn test_legacy_payload_upgrades_and_persists_as_records() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(tmp.path()));

    // Seed the backend with the bare-id array an early build wrote.
    use magick_core::KeyValueStorage;
    storage
        .set("card_favorites", r#"["mixer_1","mixer_3"]"#)
        .await
        .unwrap();

    let mut store = FavoritesStore::new(storage.clone());
    store.hydrate().await;
    assert!(store.is_favorite("mixer_1"));
    assert!(store.is_favorite("mixer_3"));

    // The next persist writes the canonical timestamped shape.
    store.toggle("mixer_2").await.unwrap();
    let raw = storage.get("card_favorites").await.unwrap().unwrap();
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(values.len(), 3);
    for value in &values {
        assert!(value["cardId"].is_string());
        assert!(value["timestamp"].is_i64() || value["timestamp"].is_u64());
    }
}

// The product scenario end to end: draw from the mixer deck, heart a card,
// see it listed, un-heart it, see the list empty.
#[tokio::test]
async fn test_full_app_scenario() {
    let mut app = App::new(Arc::new(MemoryStorage::new()));
    app.init().await;

    let selector = DeckSelector::deck("magickmixer");
    for _ in 0..1000 {
        let card = app.draw(&selector).unwrap();
        assert!(["mixer_1", "mixer_2", "mixer_3"].contains(&card.id.as_str()));
    }

    app.toggle_favorite("mixer_2").await.unwrap();
    assert!(app.is_favorite("mixer_2"));
    let ids: Vec<&str> = app.favorite_cards().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["mixer_2"]);

    app.toggle_favorite("mixer_2").await.unwrap();
    assert!(app.favorite_cards().is_empty());
}

#[tokio::test]
async fn test_hydrate_failure_leaves_app_usable() {
    // Surface the store's degradation warnings when run with RUST_LOG set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let storage = Arc::new(MemoryStorage::new());
    storage.set_fail_reads(true);

    let mut app = App::new(storage.clone());
    app.init().await;

    // Degraded to defaults, still fully usable.
    assert_eq!(app.favorite_count(), 0);
    assert!(app.draw(&DeckSelector::AllDecks).is_ok());

    storage.set_fail_reads(false);
    app.toggle_favorite("mixer_1").await.unwrap();
    assert!(app.is_favorite("mixer_1"));
}
