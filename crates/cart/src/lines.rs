//! Pure cart-line transforms.
//!
//! Each function takes the current list and computes the next one without
//! touching storage. [`CartStore`](crate::CartStore) persists the value these
//! return, so what is written is always the freshly computed list.

use go_marketplace_core::{CartItem, NewCartItem, ProductId, Quantity};
use tracing::{debug, warn};

/// Add a product to the cart.
///
/// A product already in the cart takes the new metadata (title, image, price)
/// and one more unit; a new product is appended with quantity 1.
#[must_use]
pub fn add(items: &[CartItem], product: NewCartItem) -> Vec<CartItem> {
    let existing = items.iter().find(|item| item.id == product.id);

    match existing {
        Some(found) => {
            let merged = product.with_quantity(found.quantity.incremented());
            items
                .iter()
                .map(|item| {
                    if item.id == merged.id {
                        merged.clone()
                    } else {
                        item.clone()
                    }
                })
                .collect()
        }
        None => {
            let mut next = items.to_vec();
            next.push(product.with_quantity(Quantity::ONE));
            next
        }
    }
}

/// One more unit of `id`, or `None` if it is not in the cart.
#[must_use]
pub fn increment(items: &[CartItem], id: &ProductId) -> Option<Vec<CartItem>> {
    if !contains(items, id) {
        return None;
    }

    Some(
        items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.id == *id {
                    item.quantity = item.quantity.incremented();
                }
                item
            })
            .collect(),
    )
}

/// One fewer unit of `id`, or `None` if it is not in the cart.
///
/// Lines that end up at zero are dropped. A line that is already at zero is
/// dropped outright rather than decremented.
#[must_use]
pub fn decrement(items: &[CartItem], id: &ProductId) -> Option<Vec<CartItem>> {
    let found = items.iter().find(|item| item.id == *id)?;

    if found.quantity.is_zero() {
        debug!(id = %id, "line already at zero, removing");
        return Some(items.iter().filter(|item| item.id != *id).cloned().collect());
    }

    Some(
        items
            .iter()
            .filter_map(|item| {
                let mut item = item.clone();
                if item.id == *id {
                    item.quantity = item.quantity.decremented()?;
                }
                (!item.quantity.is_zero()).then_some(item)
            })
            .collect(),
    )
}

/// Decode a persisted list, dropping lines that do not decode.
///
/// A line with an empty id or an out-of-range price is skipped with a warning
/// so the rest of the cart still loads.
///
/// # Errors
///
/// Returns an error if `json` is not a JSON array.
pub fn decode(json: &str) -> serde_json::Result<Vec<CartItem>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;

    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(index, error = %e, "dropping unreadable line from persisted cart");
                None
            }
        })
        .collect())
}

/// Repair a list read from storage.
///
/// Zero-quantity lines are dropped. Duplicate ids are merged into the first
/// occurrence, keeping its metadata and summing the quantities.
#[must_use]
pub fn normalize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut next: Vec<CartItem> = Vec::with_capacity(items.len());

    for item in items {
        if item.quantity.is_zero() {
            warn!(id = %item.id, "dropping zero-quantity line from persisted cart");
            continue;
        }

        if let Some(first) = next.iter_mut().find(|line| line.id == item.id) {
            warn!(id = %item.id, "merging duplicate line in persisted cart");
            first.quantity = first.quantity.saturating_add(item.quantity);
        } else {
            next.push(item);
        }
    }

    next
}

fn contains(items: &[CartItem], id: &ProductId) -> bool {
    items.iter().any(|item| item.id == *id)
}
