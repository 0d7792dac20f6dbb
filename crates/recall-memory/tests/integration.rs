//! Integration tests for the memory store.
//!
//! These exercise the JSON-backed store end-to-end: persistence,
//! similarity retrieval, keyword search, and recovery from bad logs.

use recall_memory::{MemoryStore, StoreConfig};
use serde_json::json;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        path: dir.path().join("memory_store.json"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_store_and_retrieve_near_identical_topic() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store
        .store("Adam optimizer", json!({"confidence": 0.9}))
        .await
        .unwrap();

    // Same letters, different case: cosine similarity ~1.0.
    let hit = store.retrieve("adam optimizer", 0.85).await;
    assert_eq!(hit, Some(json!({"confidence": 0.9})));
}

#[tokio::test]
async fn test_retrieve_dissimilar_topic_misses() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store
        .store("Adam optimizer", json!({"confidence": 0.9}))
        .await
        .unwrap();

    let hit = store.retrieve("completely different text xyz", 0.85).await;
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_threshold_monotonicity() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store.store("neural networks", json!({"n": 1})).await.unwrap();

    // A hit at a higher threshold implies a hit at every lower one.
    assert!(store.retrieve("neural networks", 0.95).await.is_some());
    assert!(store.retrieve("neural networks", 0.85).await.is_some());
    assert!(store.retrieve("neural networks", 0.5).await.is_some());
}

#[tokio::test]
async fn test_append_only_ids_and_order() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    let id1 = store.store("first topic", json!({"n": 1})).await.unwrap();
    assert_eq!(id1, "mem_1");
    assert_eq!(store.count().await, 1);

    let id2 = store.store("second topic", json!({"n": 2})).await.unwrap();
    assert_eq!(id2, "mem_2");
    assert_eq!(store.count().await, 2);

    // Prior records are untouched and order is insertion order.
    let all = store.get_all().await;
    assert_eq!(all, vec![json!({"n": 1}), json!({"n": 2})]);
}

#[tokio::test]
async fn test_first_record_wins_similarity_ties() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store.store("alpha", json!({"which": "first"})).await.unwrap();
    store.store("alpha", json!({"which": "second"})).await.unwrap();

    let hit = store.retrieve("alpha", 0.99).await;
    assert_eq!(hit, Some(json!({"which": "first"})));
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store.store("topic", json!({"n": 1})).await.unwrap();
    store.clear().await.unwrap();
    assert_eq!(store.count().await, 0);
    assert!(store.get_all().await.is_empty());

    store.clear().await.unwrap();
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    {
        let store = MemoryStore::open(config.clone()).await.unwrap();
        store
            .store("Adam optimizer", json!({"confidence": 0.9}))
            .await
            .unwrap();
    }

    let store = MemoryStore::open(config).await.unwrap();
    assert_eq!(store.count().await, 1);
    assert_eq!(
        store.retrieve("adam optimizer", 0.85).await,
        Some(json!({"confidence": 0.9}))
    );
}

#[tokio::test]
async fn test_corrupt_log_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    std::fs::write(&config.path, "{not valid json").unwrap();

    let store = MemoryStore::open(config).await.unwrap();
    assert_eq!(store.count().await, 0);

    // The store is still usable after the reset.
    store.store("topic", json!({"n": 1})).await.unwrap();
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_missing_log_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_search_by_keywords() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store
        .store("optimizers", json!({"n": 1, "keywords": ["adam", "sgd"]}))
        .await
        .unwrap();
    store
        .store("networks", json!({"n": 2, "keywords": ["cnn"]}))
        .await
        .unwrap();
    store
        .store("both worlds", json!({"n": 3, "keywords": ["sgd", "cnn"]}))
        .await
        .unwrap();

    let hits = store.search_by_keywords(&["sgd".to_string()]).await;
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["n"], 1);
    assert_eq!(hits[1]["n"], 3);

    let none = store.search_by_keywords(&["missing".to_string()]).await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_persisted_log_format() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let store = MemoryStore::open(config.clone()).await.unwrap();

    store
        .store(
            "Adam optimizer",
            json!({"confidence": 0.9, "source_agent": "knowledge", "keywords": ["adam"]}),
        )
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&config.path).unwrap();
    let log: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &log[0];

    assert_eq!(entry["id"], "mem_1");
    assert_eq!(entry["topic"], "Adam optimizer");
    assert_eq!(entry["vector"].as_array().unwrap().len(), 26);
    assert_eq!(entry["record"]["confidence"], 0.9);
    // Metadata copied out of the payload.
    assert_eq!(entry["confidence"], 0.9);
    assert_eq!(entry["source_agent"], "knowledge");
    assert_eq!(entry["keywords"][0], "adam");
    assert!(entry["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_ids_restart_after_clear() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::open(test_config(&dir)).await.unwrap();

    store.store("topic", json!({"n": 1})).await.unwrap();
    store.clear().await.unwrap();

    let id = store.store("topic", json!({"n": 2})).await.unwrap();
    assert_eq!(id, "mem_1");
}
