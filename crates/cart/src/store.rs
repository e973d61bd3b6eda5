//! The cart store.
//!
//! [`CartStore`] owns the committed cart list. Every mutation runs under one
//! async lock: compute the next list, write it to storage, then commit it in
//! memory and notify subscribers. A failed write leaves the committed list
//! untouched, so storage and memory never disagree.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use go_marketplace_core::{CartItem, NewCartItem, ProductId};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument};

use crate::config::{CartConfig, DEFAULT_STORAGE_KEY};
use crate::error::{CartError, Result};
use crate::lines;
use crate::storage::KeyValueStorage;
use crate::summary::CartSummary;

/// A shared, immutable snapshot of the cart list.
pub type Products = Arc<[CartItem]>;

/// Persisted cart store.
///
/// This struct is cheaply cloneable via `Arc`; clones share the same list,
/// storage and subscribers.
#[derive(Debug)]
pub struct CartStore<S> {
    inner: Arc<CartStoreInner<S>>,
}

#[derive(Debug)]
struct CartStoreInner<S> {
    storage: S,
    key: String,
    /// `None` until `load()` succeeds.
    committed: Mutex<Option<Products>>,
    loaded: AtomicBool,
    updates: watch::Sender<Products>,
}

impl<S> Clone for CartStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Create a store persisting under the default `@GoMarketplace:products` key.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create a store persisting under `key`.
    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let (updates, _) = watch::channel(Products::from(Vec::new()));

        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                key: key.into(),
                committed: Mutex::new(None),
                loaded: AtomicBool::new(false),
                updates,
            }),
        }
    }

    /// Create a store using the key from `config`.
    #[must_use]
    pub fn from_config(storage: S, config: &CartConfig) -> Self {
        Self::with_key(storage, config.storage_key.clone())
    }

    /// Storage key the list is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.inner.storage
    }

    /// Returns `true` once `load()` has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.loaded.load(Ordering::Acquire)
    }

    /// Load the persisted list, replacing whatever the store holds.
    ///
    /// A missing key yields an empty cart. Lines that fail to decode are
    /// skipped (see [`lines::decode`]), and zero-quantity lines and duplicate
    /// ids are repaired (see [`lines::normalize`]).
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the read fails and
    /// `CartError::Serialization` if the stored value is not a JSON array.
    /// On error the store keeps its previous state.
    #[instrument(skip_all, fields(key = %self.inner.key))]
    pub async fn load(&self) -> Result<Products> {
        let mut committed = self.inner.committed.lock().await;

        let items = match self.inner.storage.get_item(&self.inner.key).await? {
            Some(json) => lines::normalize(lines::decode(&json)?),
            None => {
                debug!("no persisted cart, starting empty");
                Vec::new()
            }
        };

        let products = self.publish(&mut committed, items.into());
        self.inner.loaded.store(true, Ordering::Release);
        info!(lines = products.len(), "cart loaded");
        Ok(products)
    }

    /// The current cart list.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotLoaded` before `load()` has succeeded.
    pub fn products(&self) -> Result<Products> {
        self.ensure_loaded()?;
        Ok(Arc::clone(&self.inner.updates.borrow()))
    }

    /// Totals for the current cart list.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotLoaded` before `load()` has succeeded.
    pub fn summary(&self) -> Result<CartSummary> {
        Ok(CartSummary::of(&self.products()?))
    }

    /// Subscribe to committed changes of the cart list.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotLoaded` before `load()` has succeeded.
    pub fn subscribe(&self) -> Result<CartSubscription> {
        self.ensure_loaded()?;
        Ok(CartSubscription {
            rx: self.inner.updates.subscribe(),
        })
    }

    /// Add a product, or one more unit of it if it is already in the cart.
    ///
    /// An existing line takes the product's new title, image and price.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotLoaded` before `load()`, or a storage or
    /// serialization error if the write fails.
    #[instrument(skip_all, fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: NewCartItem) -> Result<Products> {
        self.apply(move |items| Ok(lines::add(items, product))).await
    }

    /// One more unit of `id`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemNotFound` if `id` is not in the cart,
    /// `CartError::NotLoaded` before `load()`, or a storage or
    /// serialization error if the write fails.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) -> Result<Products> {
        self.apply(|items| {
            lines::increment(items, id).ok_or_else(|| CartError::ItemNotFound(id.clone()))
        })
        .await
    }

    /// One fewer unit of `id`, removing the line when it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemNotFound` if `id` is not in the cart,
    /// `CartError::NotLoaded` before `load()`, or a storage or
    /// serialization error if the write fails.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) -> Result<Products> {
        self.apply(|items| {
            lines::decrement(items, id).ok_or_else(|| CartError::ItemNotFound(id.clone()))
        })
        .await
    }

    /// Empty the cart and remove its storage key.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotLoaded` before `load()`, or a storage error if
    /// the removal fails.
    #[instrument(skip_all, fields(key = %self.inner.key))]
    pub async fn clear(&self) -> Result<Products> {
        let mut committed = self.inner.committed.lock().await;
        if committed.is_none() {
            return Err(CartError::NotLoaded);
        }

        self.inner.storage.remove_item(&self.inner.key).await?;

        Ok(self.publish(&mut committed, Products::from(Vec::new())))
    }

    /// Compute, persist and commit the next list.
    async fn apply<F>(&self, next_list: F) -> Result<Products>
    where
        F: FnOnce(&[CartItem]) -> Result<Vec<CartItem>> + Send,
    {
        let mut committed = self.inner.committed.lock().await;
        let current = committed.as_deref().ok_or(CartError::NotLoaded)?;

        let next = Products::from(next_list(current)?);

        let json = serde_json::to_string(&*next)?;
        self.inner.storage.set_item(&self.inner.key, &json).await?;
        debug!(lines = next.len(), "cart persisted");

        Ok(self.publish(&mut committed, next))
    }

    fn publish(&self, committed: &mut Option<Products>, next: Products) -> Products {
        *committed = Some(Arc::clone(&next));
        self.inner.updates.send_replace(Arc::clone(&next));
        next
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(CartError::NotLoaded)
        }
    }
}

/// A receiver of committed cart lists.
///
/// Rapid successive commits may be coalesced: a slow subscriber sees the
/// latest list, not every intermediate one.
#[derive(Debug, Clone)]
pub struct CartSubscription {
    rx: watch::Receiver<Products>,
}

impl CartSubscription {
    /// The latest committed list.
    #[must_use]
    pub fn current(&self) -> Products {
        Arc::clone(&self.rx.borrow())
    }

    /// Wait for the next commit and return the list it produced.
    ///
    /// Returns `None` once every handle to the store has been dropped.
    pub async fn changed(&mut self) -> Option<Products> {
        self.rx.changed().await.ok()?;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }
}
