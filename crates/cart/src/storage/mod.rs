//! Key-value persistence for the cart.
//!
//! The cart persists through a minimal string key-value interface, the same
//! shape as a mobile device's async storage: read a key, overwrite a key,
//! remove a key. Backends:
//!
//! - [`MemoryStorage`] - process-local map, for tests and ephemeral sessions
//! - [`FileStorage`] - one file per key under a directory

use std::sync::Arc;

use crate::error::StorageError;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// An async string key-value store.
///
/// Implementations must make `set_item` replace the whole value: after it
/// returns `Ok`, `get_item` for the same key yields exactly the written value.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<S: KeyValueStorage> KeyValueStorage for Arc<S> {
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send {
        (**self).get_item(key)
    }

    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).remove_item(key)
    }
}
