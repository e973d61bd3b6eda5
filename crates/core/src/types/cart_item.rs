//! Cart line items.
//!
//! The persisted cart is a JSON array of [`CartItem`] records:
//!
//! ```json
//! [{"id":"1","title":"Cadeira Rivatti","image_url":"https://...","price":400.0,"quantity":2}]
//! ```

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::quantity::Quantity;

/// A product reference with a quantity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product id, unique within a cart.
    pub id: ProductId,
    /// Product title shown on the cart line.
    pub title: String,
    /// Product thumbnail URL.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units in the cart.
    pub quantity: Quantity,
}

impl CartItem {
    /// Total price of this line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A product as handed to the cart by a catalog screen.
///
/// The catalog passes whole product records, so a `quantity` field in the
/// input is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Catalog product id.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product thumbnail URL.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewCartItem {
    /// Turn this product into a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(self, quantity: Quantity) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

impl From<CartItem> for NewCartItem {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn chair() -> NewCartItem {
        NewCartItem {
            id: ProductId::parse("1").unwrap(),
            title: "Cadeira Rivatti".to_owned(),
            image_url: "https://example.com/chair.png".to_owned(),
            price: Price::parse("400").unwrap(),
        }
    }

    #[test]
    fn test_line_total() {
        let item = chair().with_quantity(Quantity::new(3));
        assert_eq!(item.line_total(), Price::parse("1200").unwrap());
    }

    #[test]
    fn test_wire_format_field_names() {
        let item = chair().with_quantity(Quantity::new(2));
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["image_url"], "https://example.com/chair.png");
        assert_eq!(value["price"], 400.0);
        assert_eq!(value["quantity"], 2);
    }

    #[test]
    fn test_new_item_ignores_incoming_quantity() {
        let json = r#"{"id":"7","title":"Mesa","image_url":"u","price":12.5,"quantity":9}"#;
        let item: NewCartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "7");
        assert_eq!(item.price, Price::parse("12.5").unwrap());
    }
}
