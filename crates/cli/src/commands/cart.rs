//! Cart commands.
//!
//! Every command loads the cart from file storage, applies at most one
//! mutation and prints the resulting list.
//!
//! # Environment Variables
//!
//! - `GO_MARKETPLACE_STORAGE_DIR` - Directory holding the cart file
//! - `GO_MARKETPLACE_STORAGE_KEY` - Key the cart is stored under
//! - `GO_MARKETPLACE_CURRENCY` - Currency used for display

use core::fmt::Write as _;

use go_marketplace_cart::{
    CartConfig, CartError, CartStore, CartSummary, ConfigError, FileStorage, Products,
};
use go_marketplace_core::{CartItem, CurrencyCode, NewCartItem, Price, ProductId};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The product id argument is invalid.
    #[error("Invalid product id {0:?}: {1}")]
    InvalidProductId(String, String),

    /// The price argument is invalid.
    #[error("Invalid price {0:?}: {1}")]
    InvalidPrice(String, String),

    /// The cart could not be encoded for output.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// A loaded file-backed cart plus display settings.
pub struct CartContext {
    store: CartStore<FileStorage>,
    currency: CurrencyCode,
}

impl CartContext {
    /// Load configuration and the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the cart cannot be read.
    pub async fn open() -> Result<Self, CommandError> {
        let config = CartConfig::from_env()?;
        let storage = FileStorage::new(config.storage_dir.clone());
        let store = CartStore::from_config(storage, &config);

        store.load().await?;
        info!(
            dir = %store.storage().dir().display(),
            key = store.key(),
            "Cart opened"
        );

        Ok(Self {
            store,
            currency: config.currency,
        })
    }

    /// Print the cart, as a table or as the persisted JSON list.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not loaded or cannot be encoded.
    pub fn show(&self, json: bool) -> Result<(), CommandError> {
        let products = self.store.products()?;
        if json {
            emit(&serde_json::to_string_pretty(&*products)?);
        } else {
            emit(&render(&products, self.currency));
        }
        Ok(())
    }

    /// Add a product, or one more unit of it.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid or the write fails.
    pub async fn add(
        &self,
        id: &str,
        title: String,
        image_url: String,
        price: &str,
    ) -> Result<(), CommandError> {
        let product = NewCartItem {
            id: parse_id(id)?,
            title,
            image_url,
            price: Price::parse(price)
                .map_err(|e| CommandError::InvalidPrice(price.to_owned(), e.to_string()))?,
        };

        let products = self.store.add_to_cart(product).await?;
        emit(&render(&products, self.currency));
        Ok(())
    }

    /// Add one unit of a product in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is invalid or not in the cart, or the write fails.
    pub async fn increment(&self, id: &str) -> Result<(), CommandError> {
        let products = self.store.increment(&parse_id(id)?).await?;
        emit(&render(&products, self.currency));
        Ok(())
    }

    /// Remove one unit of a product in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is invalid or not in the cart, or the write fails.
    pub async fn decrement(&self, id: &str) -> Result<(), CommandError> {
        let products = self.store.decrement(&parse_id(id)?).await?;
        emit(&render(&products, self.currency));
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage key cannot be removed.
    pub async fn clear(&self) -> Result<(), CommandError> {
        let products = self.store.clear().await?;
        emit(&render(&products, self.currency));
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<ProductId, CommandError> {
    ProductId::parse(id).map_err(|e| CommandError::InvalidProductId(id.to_owned(), e.to_string()))
}

#[allow(clippy::print_stdout)]
fn emit(output: &str) {
    println!("{output}");
}

/// Render the cart as a plain-text table with a totals footer.
fn render(products: &Products, currency: CurrencyCode) -> String {
    if products.is_empty() {
        return "Cart is empty".to_owned();
    }

    let mut out = String::new();
    for item in products.iter() {
        let _ = writeln!(out, "{}", render_line(item, currency));
    }

    let summary = CartSummary::of(products);
    let _ = write!(
        out,
        "{} item(s), subtotal {}",
        summary.item_count,
        summary.subtotal_display(currency)
    );
    out
}

fn render_line(item: &CartItem, currency: CurrencyCode) -> String {
    format!(
        "{id}\t{title}\tx{quantity}\t{price}\t{total}",
        id = item.id,
        title = item.title,
        quantity = item.quantity,
        price = item.price.display(currency),
        total = item.line_total().display(currency),
    )
}
