//! Shared test utilities.

#![allow(dead_code)]

use std::time::Duration;

use rust_decimal::Decimal;

use biteblitz::catalog::food_items;
use biteblitz::models::MenuItem;

/// Short latency so dispatcher tests stay fast.
pub const TEST_DELAY: Duration = Duration::from_millis(20);

/// Upper bound on how long a test waits for a message.
pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Looks up a catalog item by exact name.
pub fn catalog_item(name: &str) -> MenuItem {
    food_items()
        .into_iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("no catalog item named {name}"))
}

/// A throwaway item with the given id and price.
pub fn priced_item(id: u32, price: Decimal) -> MenuItem {
    MenuItem {
        id,
        name: format!("Item {id}"),
        restaurant: "Fixture Kitchen".to_string(),
        price,
        image_url: String::new(),
        category: "Fixture".to_string(),
        rating: Decimal::new(40, 1),
    }
}
