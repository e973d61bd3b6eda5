//! Integration tests for concurrent use of one cart store.
//!
//! UI code may fire several mutations before the first write lands. The store
//! must apply all of them and leave storage matching memory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use go_marketplace_cart::{CartStore, FileStorage};
use go_marketplace_core::{ProductId, Quantity};
use go_marketplace_integration_tests::product;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_rapid_adds_from_many_tasks_are_all_applied() {
    let temp = tempfile::tempdir().unwrap();
    let store = CartStore::new(FileStorage::new(temp.path()));
    store.load().await.unwrap();

    let tasks: Vec<_> = (0..10)
        .flat_map(|_| ["1", "2", "3"])
        .map(|id| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .add_to_cart(product(id, "1.5").unwrap())
                    .await
                    .map(|_| ())
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let products = store.products().unwrap();
    assert_eq!(products.len(), 3);
    for item in products.iter() {
        assert_eq!(item.quantity, Quantity::new(10));
    }

    let reopened = CartStore::new(FileStorage::new(temp.path()));
    assert_eq!(reopened.load().await.unwrap(), products);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_increments_and_decrements_net_out() {
    let temp = tempfile::tempdir().unwrap();
    let store = CartStore::new(FileStorage::new(temp.path()));
    store.load().await.unwrap();
    store.add_to_cart(product("1", "3").unwrap()).await.unwrap();
    for _ in 0..9 {
        store.increment(&ProductId::parse("1").unwrap()).await.unwrap();
    }

    let tasks: Vec<_> = (0..8)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                let id = ProductId::parse("1").unwrap();
                if n % 2 == 0 {
                    store.increment(&id).await.map(|_| ())
                } else {
                    store.decrement(&id).await.map(|_| ())
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let products = store.products().unwrap();
    assert_eq!(products[0].quantity, Quantity::new(10));

    let reopened = CartStore::new(FileStorage::new(temp.path()));
    assert_eq!(reopened.load().await.unwrap(), products);
}
