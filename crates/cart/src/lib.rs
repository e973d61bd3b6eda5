//! GoMarketplace Cart - Persisted shopping-cart store.
//!
//! Holds the cart list for one user on one device, persists the whole list
//! to key-value storage after every change and lets UI code subscribe to
//! committed changes.
//!
//! # Example
//!
//! ```rust,no_run
//! use go_marketplace_cart::{CartStore, FileStorage};
//! use go_marketplace_core::{NewCartItem, Price, ProductId};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CartStore::new(FileStorage::new(".go-marketplace"));
//! store.load().await?;
//!
//! let id = ProductId::parse("1")?;
//! store
//!     .add_to_cart(NewCartItem {
//!         id: id.clone(),
//!         title: "Cadeira Rivatti".to_owned(),
//!         image_url: "https://cdn.example.com/chair.png".to_owned(),
//!         price: Price::parse("400")?,
//!     })
//!     .await?;
//! store.increment(&id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`store`] - The cart store and its subscriptions
//! - [`lines`] - Pure list transforms behind each store operation
//! - [`storage`] - Key-value storage trait and backends
//! - [`summary`] - Derived totals
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod lines;
pub mod storage;
pub mod store;
pub mod summary;

pub use config::{CartConfig, ConfigError, DEFAULT_STORAGE_KEY};
pub use error::{CartError, StorageError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CartStore, CartSubscription, Products};
pub use summary::CartSummary;
