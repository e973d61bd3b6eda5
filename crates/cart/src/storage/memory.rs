use std::collections::HashMap;

use tokio::sync::RwLock;

use super::KeyValueStorage;
use crate::error::StorageError;

/// In-memory key-value storage.
///
/// Values live as long as the `MemoryStorage` itself. Wrap it in an `Arc` to
/// share one map between several stores (e.g., to simulate an app restart).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with a single key.
    #[must_use]
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns `true` if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "one").await.unwrap();
        storage.set_item("k", "two").await.unwrap();

        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let storage = MemoryStorage::with_item("k", "v");
        storage.remove_item("k").await.unwrap();
        storage.remove_item("k").await.unwrap();

        assert!(storage.is_empty().await);
    }
}
