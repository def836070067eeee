//! End-to-end cart and checkout behavior.

mod common;

use std::time::{Duration, SystemTime};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio_test::{assert_err, assert_ok};

use biteblitz::ValidationError;
use biteblitz::cart::{Cart, OrderIds};
use biteblitz::models::PaymentMethod;
use biteblitz::tracking::OrderTracker;
use biteblitz::tui::App;
use biteblitz::tui::app::Tab;

use common::{catalog_item, priced_item};

#[test]
fn reference_cart_totals() {
    let mut cart = Cart::new();
    let first = priced_item(1, dec!(12.99));
    let second = priced_item(2, dec!(9.99));
    cart.add(&first);
    cart.add(&first);
    cart.add(&second);

    let totals = cart.totals();
    assert_eq!(totals.subtotal, dec!(35.97));
    assert_eq!(totals.tax, dec!(2.8776));
    assert_eq!(totals.total, dec!(41.8376));
}

#[test]
fn totals_follow_formula_for_any_mix() {
    let mut cart = Cart::new();
    for (id, price, adds) in [(1, dec!(0.01), 7), (2, dec!(18.99), 3), (3, dec!(0), 2)] {
        let item = priced_item(id, price);
        for _ in 0..adds {
            cart.add(&item);
        }
    }

    let expected_subtotal: Decimal = cart
        .lines()
        .iter()
        .map(|l| l.item.price * Decimal::from(l.quantity))
        .sum();
    let totals = cart.totals();
    assert_eq!(totals.subtotal, expected_subtotal);
    assert_eq!(
        totals.total,
        totals.subtotal + dec!(2.99) + totals.subtotal * dec!(0.08)
    );
}

#[test]
fn decrements_never_reach_zero() {
    let mut cart = Cart::new();
    let item = catalog_item("Beef Tacos");
    cart.add(&item);
    for delta in [-1, -3, 2, -1, -1, -1, -100, 5, -5] {
        cart.adjust_quantity(item.id, delta);
        let quantity = cart.line(item.id).map(|l| l.quantity);
        assert!(quantity >= Some(1), "delta {delta} left {quantity:?}");
    }
}

#[test]
fn checkout_validation_order() {
    let mut ids = OrderIds::new();
    let now = SystemTime::now();

    let mut empty = Cart::new();
    assert_eq!(
        empty.checkout("10 Downing St", PaymentMethod::Card, &mut ids, now),
        Err(ValidationError::EmptyCart)
    );
    assert_eq!(
        empty.checkout("", PaymentMethod::Card, &mut ids, now),
        Err(ValidationError::EmptyCart)
    );

    let mut filled = Cart::new();
    filled.add(&catalog_item("Sushi Platter"));
    assert_err!(filled.checkout("", PaymentMethod::Card, &mut ids, now));
    assert_err!(filled.checkout(" \t", PaymentMethod::Card, &mut ids, now));
    assert_ok!(filled.checkout("10 Downing St", PaymentMethod::Card, &mut ids, now));
}

#[test]
fn order_snapshot_is_not_recomputed() {
    let mut cart = Cart::new();
    let pizza = catalog_item("Margherita Pizza");
    cart.add(&pizza);
    let mut ids = OrderIds::new();
    let mut tracker = OrderTracker::default();

    let order = cart
        .checkout("5 Pine Rd", PaymentMethod::Card, &mut ids, SystemTime::now())
        .unwrap();
    tracker.confirm(order);

    // Later cart activity leaves the tracked order alone.
    cart.add(&pizza);
    cart.add(&pizza);
    let tracked = tracker.current().unwrap();
    assert_eq!(tracked.subtotal, dec!(12.99));
    assert_eq!(tracked.lines[0].quantity, 1);
}

#[test]
fn app_checkout_flow() {
    let mut app = App::default();
    assert_eq!(
        app.place_order(SystemTime::now()),
        Err(ValidationError::EmptyCart)
    );

    app.add_to_cart(&catalog_item("Butter Chicken"));
    app.add_to_cart(&catalog_item("Butter Chicken"));
    app.address_input.set("1 Curry Lane");
    app.payment_method = PaymentMethod::Cash;

    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400);
    assert_ok!(app.place_order(now));

    assert!(app.cart.is_empty());
    assert!(app.address_input.is_empty());
    assert_eq!(app.current_tab(), Tab::Tracking);

    let order = app.tracker.current().unwrap();
    assert_eq!(order.id, 1);
    assert_eq!(order.subtotal, dec!(27.98));
    assert_eq!(order.delivery_fee, dec!(2.99));
    assert_eq!(order.estimated_delivery, now + Duration::from_secs(2_100));

    app.add_to_cart(&catalog_item("Pad Thai"));
    app.address_input.set("2 Noodle Ave");
    assert_ok!(app.place_order(now));
    assert_eq!(app.tracker.current().map(|o| o.id), Some(2));
}
