//! Core types for GoMarketplace.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod cart_item;
pub mod id;
pub mod price;
pub mod quantity;

pub use cart_item::{CartItem, NewCartItem};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use quantity::Quantity;
