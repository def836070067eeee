//! Cart aggregation and checkout.
//!
//! The cart maps item identity to quantity, in insertion order. Quantities
//! never drop below 1: decrementing stops at the floor and only an explicit
//! [`Cart::remove`] deletes a line. Increments have no ceiling.
//!
//! Totals keep full decimal precision; rounding to cents happens only when
//! amounts are displayed.

use std::time::{Duration, SystemTime};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::ValidationError;
use crate::models::{CartLine, ItemId, MenuItem, Order, OrderStatus, PaymentMethod};

/// Flat delivery fee ($2.99).
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(299, 0, 0, false, 2);

/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Time from checkout until the promised delivery.
pub const DELIVERY_ESTIMATE: Duration = Duration::from_secs(35 * 60);

/// Derived monetary amounts for a set of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Computes fee, tax, and total from a subtotal.
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            total: subtotal + DELIVERY_FEE + tax,
        }
    }
}

/// Issues order ids from a per-session monotonic counter.
#[derive(Debug)]
pub struct OrderIds {
    next: u64,
}

impl OrderIds {
    /// Creates a generator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for OrderIds {
    fn default() -> Self {
        Self::new()
    }
}

/// The customer's cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for `id`, if present.
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Adds one unit of `item`, creating its line on first add.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(item = item.id, quantity = line.quantity, "Cart line incremented");
        } else {
            self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            });
            debug!(item = item.id, "Cart line added");
        }
    }

    /// Deletes the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.id != id);
        let removed = self.lines.len() != before;
        if removed {
            debug!(item = id, "Cart line removed");
        }
        removed
    }

    /// Changes the quantity of the line for `id` by `delta`.
    ///
    /// A change that would take the quantity below 1 is ignored and the
    /// line is left as it was. Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) {
        let Some(line) = self.lines.iter_mut().find(|l| l.item.id == id) else {
            return;
        };
        let updated = i64::from(line.quantity).saturating_add(delta);
        if updated < 1 {
            debug!(item = id, quantity = line.quantity, "Quantity floor reached");
            return;
        }
        line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Subtotal, delivery fee, tax, and total for the current contents.
    pub fn totals(&self) -> Totals {
        Totals::from_subtotal(self.subtotal())
    }

    /// Snapshots the cart into a confirmed [`Order`] and empties it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCart`] when there is nothing to
    /// order, otherwise [`ValidationError::EmptyAddress`] when `address` is
    /// blank. The cart is unchanged on error.
    pub fn checkout(
        &mut self,
        address: &str,
        payment_method: PaymentMethod,
        ids: &mut OrderIds,
        placed_at: SystemTime,
    ) -> Result<Order, ValidationError> {
        if self.lines.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        let totals = self.totals();
        let order = Order {
            id: ids.next_id(),
            lines: std::mem::take(&mut self.lines),
            address: address.to_string(),
            payment_method,
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            tax: totals.tax,
            total: totals.total,
            status: OrderStatus::Confirmed,
            placed_at,
            estimated_delivery: placed_at + DELIVERY_ESTIMATE,
        };

        info!(
            order = order.id,
            lines = order.lines.len(),
            total = %order.total,
            payment = ?order.payment_method,
            "Order placed"
        );
        match order.to_json() {
            Ok(snapshot) => debug!(order = order.id, %snapshot, "Order snapshot"),
            Err(e) => warn!(order = order.id, error = %e, "Could not render order snapshot"),
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::catalog::food_items;

    fn item_priced(id: ItemId, price: Decimal) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {id}"),
            restaurant: "Test Kitchen".to_string(),
            price,
            image_url: String::new(),
            category: "Test".to_string(),
            rating: dec!(4.0),
        }
    }

    #[test]
    fn add_creates_then_increments() {
        let items = food_items();
        let mut cart = Cart::new();
        cart.add(&items[0]);
        cart.add(&items[1]);
        cart.add(&items[0]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(items[0].id).map(|l| l.quantity), Some(2));
        assert_eq!(cart.line(items[1].id).map(|l| l.quantity), Some(1));
        assert_eq!(cart.lines()[0].item.id, items[0].id);
    }

    #[test]
    fn remove_deletes_line_and_ignores_unknown() {
        let items = food_items();
        let mut cart = Cart::new();
        cart.add(&items[0]);

        assert!(!cart.remove(999));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(items[0].id));
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_stops_at_one() {
        let items = food_items();
        let mut cart = Cart::new();
        cart.add(&items[2]);
        cart.adjust_quantity(items[2].id, 3);
        assert_eq!(cart.line(items[2].id).map(|l| l.quantity), Some(4));

        for _ in 0..10 {
            cart.adjust_quantity(items[2].id, -1);
        }
        assert_eq!(cart.line(items[2].id).map(|l| l.quantity), Some(1));

        // A large negative step is ignored outright rather than clamped.
        cart.adjust_quantity(items[2].id, 2);
        cart.adjust_quantity(items[2].id, -5);
        assert_eq!(cart.line(items[2].id).map(|l| l.quantity), Some(3));
    }

    #[test]
    fn adjust_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.adjust_quantity(42, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_for_reference_cart() {
        let mut cart = Cart::new();
        let pizza = item_priced(1, dec!(12.99));
        let burger = item_priced(2, dec!(9.99));
        cart.add(&pizza);
        cart.add(&pizza);
        cart.add(&burger);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, dec!(35.97));
        assert_eq!(totals.delivery_fee, dec!(2.99));
        assert_eq!(totals.tax, dec!(2.8776));
        assert_eq!(totals.total, dec!(41.8376));
    }

    #[test]
    fn empty_cart_totals_still_carry_fee() {
        let totals = Cart::new().totals();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, dec!(2.99));
    }

    #[test]
    fn checkout_rejects_empty_cart_before_address() {
        let mut cart = Cart::new();
        let mut ids = OrderIds::new();
        for address in ["", "221B Baker Street"] {
            let err = cart
                .checkout(address, PaymentMethod::Card, &mut ids, SystemTime::now())
                .unwrap_err();
            assert_eq!(err, ValidationError::EmptyCart);
        }
    }

    #[test]
    fn checkout_rejects_blank_address_and_keeps_cart() {
        let items = food_items();
        let mut cart = Cart::new();
        cart.add(&items[0]);
        let mut ids = OrderIds::new();

        let err = cart
            .checkout("   ", PaymentMethod::Cash, &mut ids, SystemTime::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyAddress);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn checkout_snapshots_and_clears() {
        let items = food_items();
        let mut cart = Cart::new();
        cart.add(&items[0]);
        cart.add(&items[0]);
        cart.add(&items[2]);
        let expected = cart.totals();
        let placed_at = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let mut ids = OrderIds::new();

        let order = cart
            .checkout(" 1 Main St ", PaymentMethod::Cash, &mut ids, placed_at)
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.id, 1);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.address, "1 Main St");
        assert_eq!(order.payment_method, PaymentMethod::Cash);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.subtotal, expected.subtotal);
        assert_eq!(order.total, order.subtotal + order.delivery_fee + order.tax);
        assert_eq!(
            order.estimated_delivery,
            placed_at + Duration::from_secs(35 * 60)
        );
    }

    #[test]
    fn order_ids_are_monotonic() {
        let mut ids = OrderIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }
}
