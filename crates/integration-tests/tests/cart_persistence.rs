//! Integration tests for file-backed cart persistence.
//!
//! These tests reopen a `FileStorage` directory with a fresh `CartStore`,
//! the way the app reloads its cart after a restart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use go_marketplace_cart::{CartError, CartStore, DEFAULT_STORAGE_KEY, FileStorage, KeyValueStorage};
use go_marketplace_core::{ProductId, Quantity};
use go_marketplace_integration_tests::product;

fn id(s: &str) -> ProductId {
    ProductId::parse(s).unwrap()
}

async fn open(dir: &std::path::Path) -> CartStore<FileStorage> {
    let store = CartStore::new(FileStorage::new(dir));
    store.load().await.unwrap();
    store
}

// =============================================================================
// Restart Tests
// =============================================================================

#[tokio::test]
async fn test_fresh_device_starts_with_empty_cart() {
    let temp = tempfile::tempdir().unwrap();
    let store = open(temp.path()).await;

    assert!(store.products().unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let temp = tempfile::tempdir().unwrap();

    let before = {
        let store = open(temp.path()).await;
        store.add_to_cart(product("1", "400").unwrap()).await.unwrap();
        store.add_to_cart(product("2", "12.9").unwrap()).await.unwrap();
        store.add_to_cart(product("1", "400").unwrap()).await.unwrap();
        store.decrement(&id("2")).await.unwrap();
        store.increment(&id("1")).await.unwrap()
    };

    let store = open(temp.path()).await;
    let after = store.products().unwrap();

    assert_eq!(after, before);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, id("1"));
    assert_eq!(after[0].quantity, Quantity::new(3));
}

#[tokio::test]
async fn test_persisted_file_is_json_array_under_cart_key() {
    let temp = tempfile::tempdir().unwrap();
    let store = open(temp.path()).await;
    store.add_to_cart(product("7", "19.9").unwrap()).await.unwrap();

    let raw = store.storage().get_item(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{
            "id": "7",
            "title": "Product 7",
            "image_url": "https://cdn.example.com/products/7.png",
            "price": 19.9,
            "quantity": 1
        }])
    );
}

#[tokio::test]
async fn test_cart_written_by_mobile_client_loads() {
    let temp = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(temp.path());
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"1","title":"Cadeira Rivatti","image_url":"https://cdn.example.com/1.png","price":400,"quantity":2}]"#,
        )
        .await
        .unwrap();

    let store = CartStore::new(storage);
    let products = store.load().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Cadeira Rivatti");
    assert_eq!(products[0].quantity, Quantity::new(2));
}

#[tokio::test]
async fn test_corrupt_file_reports_serialization_error() {
    let temp = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.set_item(DEFAULT_STORAGE_KEY, "[{\"id\":").await.unwrap();

    let store = CartStore::new(storage);

    assert!(matches!(
        store.load().await,
        Err(CartError::Serialization(_))
    ));
    assert!(matches!(store.products(), Err(CartError::NotLoaded)));
}

#[tokio::test]
async fn test_removing_last_unit_persists_empty_list() {
    let temp = tempfile::tempdir().unwrap();
    {
        let store = open(temp.path()).await;
        store.add_to_cart(product("1", "5").unwrap()).await.unwrap();
        store.decrement(&id("1")).await.unwrap();
    }

    let store = open(temp.path()).await;
    assert!(store.products().unwrap().is_empty());
    assert_eq!(
        store.storage().get_item(DEFAULT_STORAGE_KEY).await.unwrap().as_deref(),
        Some("[]")
    );
}

#[tokio::test]
async fn test_clear_survives_restart() {
    let temp = tempfile::tempdir().unwrap();
    {
        let store = open(temp.path()).await;
        store.add_to_cart(product("1", "5").unwrap()).await.unwrap();
        store.clear().await.unwrap();
    }

    let store = open(temp.path()).await;
    assert!(store.products().unwrap().is_empty());
}

#[tokio::test]
async fn test_separate_keys_hold_separate_carts() {
    let temp = tempfile::tempdir().unwrap();
    let first = CartStore::with_key(FileStorage::new(temp.path()), "@GoMarketplace:products");
    let second = CartStore::with_key(FileStorage::new(temp.path()), "@GoMarketplace:wishlist");
    first.load().await.unwrap();
    second.load().await.unwrap();

    first.add_to_cart(product("1", "5").unwrap()).await.unwrap();

    assert_eq!(first.products().unwrap().len(), 1);
    assert!(second.products().unwrap().is_empty());
}
