//! Cart totals for badge and footer display.

use go_marketplace_core::{CartItem, CurrencyCode, Price};

/// Totals derived from a cart list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of all line quantities.
    pub item_count: u32,
    /// Sum of `price * quantity` over all lines.
    pub subtotal: Price,
}

impl CartSummary {
    /// Compute the totals for `items`.
    #[must_use]
    pub fn of(items: &[CartItem]) -> Self {
        Self {
            line_count: items.len(),
            item_count: items
                .iter()
                .fold(0_u32, |total, item| total.saturating_add(item.quantity.get())),
            subtotal: items.iter().map(CartItem::line_total).sum(),
        }
    }

    /// Subtotal formatted for display (e.g., `$12.50`).
    #[must_use]
    pub fn subtotal_display(&self, currency: CurrencyCode) -> String {
        self.subtotal.display(currency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use go_marketplace_core::{NewCartItem, ProductId, Quantity};

    use super::*;

    fn line(id: &str, price: &str, quantity: u32) -> CartItem {
        NewCartItem {
            id: ProductId::parse(id).unwrap(),
            title: id.to_owned(),
            image_url: String::new(),
            price: Price::parse(price).unwrap(),
        }
        .with_quantity(Quantity::new(quantity))
    }

    #[test]
    fn test_empty_cart() {
        let summary = CartSummary::of(&[]);
        assert_eq!(summary, CartSummary::default());
        assert_eq!(summary.subtotal_display(CurrencyCode::USD), "$0.00");
    }

    #[test]
    fn test_totals() {
        let summary = CartSummary::of(&[line("1", "2.50", 2), line("2", "7.5", 1)]);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, Price::parse("12.50").unwrap());
        assert_eq!(summary.subtotal_display(CurrencyCode::USD), "$12.50");
    }
}
