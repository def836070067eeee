//! Menu item and cart line models.

use rust_decimal::Decimal;
use serde::Serialize;

/// Identity of a catalog item. Cart lines are keyed by it.
pub type ItemId = u32;

/// A dish offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    /// Name of the restaurant serving the dish.
    pub restaurant: String,
    /// Unit price in dollars, never negative.
    pub price: Decimal,
    pub image_url: String,
    /// Cuisine category (e.g. "Italian").
    pub category: String,
    pub rating: Decimal,
}

/// One distinct item in the cart together with how many units were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: MenuItem,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}
