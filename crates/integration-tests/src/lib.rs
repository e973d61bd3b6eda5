//! Integration tests for GoMarketplace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p go-marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - File-backed carts surviving restarts
//! - `cart_concurrency` - Concurrent mutations against one store
//!
//! Shared fixtures live here so each test file builds products the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use go_marketplace_core::{NewCartItem, Price, PriceError, ProductId, ProductIdError};

/// Build a catalog product with a deterministic title and image URL.
///
/// # Errors
///
/// Returns an error if `id` or `price` is invalid.
pub fn product(id: &str, price: &str) -> Result<NewCartItem, FixtureError> {
    Ok(NewCartItem {
        id: ProductId::parse(id)?,
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/products/{id}.png"),
        price: Price::parse(price)?,
    })
}

/// Errors building test fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The id is not a valid product id.
    #[error("invalid fixture id: {0}")]
    Id(#[from] ProductIdError),
    /// The price is not a valid price.
    #[error("invalid fixture price: {0}")]
    Price(#[from] PriceError),
}
