//! Cart line items.

use serde::{Deserialize, Serialize};
use vetcare_core::{Price, ProductId};

/// One product entry in the cart.
///
/// `name` and `price` are denormalized snapshots captured when the item is
/// first added; they are not re-synced if the catalog entry changes later.
/// Serializes to the persisted snapshot shape:
/// `{"id": "1", "name": "...", "price": 45.0, "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identity key.
    pub id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Number of units; always at least 1 in a stored cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_quantity_one() {
        let item = LineItem::new(ProductId::new("1"), "Adult Dog Food 15kg", Price::from_whole(45));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), Price::from_whole(45));
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut item = LineItem::new(ProductId::new("4"), "LED Ball", Price::from_whole(18));
        item.quantity = 3;
        assert_eq!(item.line_total(), Price::from_whole(54));
    }

    #[test]
    fn test_snapshot_shape() {
        let item = LineItem::new(ProductId::new("2"), "Reflective Collar", Price::from_whole(15));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "2",
                "name": "Reflective Collar",
                "price": 15.0,
                "quantity": 1,
            })
        );
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let item = LineItem::new(ProductId::new("3"), "Shampoo 500ml", Price::from_whole(12));
        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
