//! Error types for the cart store and its storage backends.

use go_marketplace_core::ProductId;
use thiserror::Error;

/// Errors raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the value for a key failed.
    #[error("Storage I/O error for key {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be stored by this backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors raised by [`CartStore`](crate::CartStore) operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The store was used before `load()` completed.
    #[error("cart store used before load() completed")]
    NotLoaded,

    /// No cart line has the given product id.
    #[error("Item not in cart: {0}")]
    ItemNotFound(ProductId),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted list could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::ItemNotFound(ProductId::parse("42").unwrap());
        assert_eq!(err.to_string(), "Item not in cart: 42");

        let err = CartError::Storage(StorageError::InvalidKey(String::new()));
        assert_eq!(err.to_string(), "Storage error: Invalid storage key: ");
    }

    #[test]
    fn test_serialization_error_converts() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CartError = json_err.into();
        assert!(matches!(err, CartError::Serialization(_)));
    }
}
