//! Built-in mock catalog: dishes, restaurants, and browse chips.
//!
//! All data is compiled in. The restaurant list is delivered through a
//! simulated load that completes after a fixed delay.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::models::{MenuItem, PriceTier, Restaurant};
use crate::tui::Message;

/// Cuisine filter chips. `"All"` disables filtering.
pub const CUISINES: [&str; 7] = [
    "All", "Italian", "Indian", "American", "Japanese", "Mexican", "Chinese",
];

/// Suggested one-key searches shown while no results are displayed.
pub const QUICK_SEARCHES: [&str; 6] = ["Pizza", "Burger", "Sushi", "Indian", "Dessert", "Healthy"];

/// Returns the searchable food catalog in display order.
pub fn food_items() -> Vec<MenuItem> {
    vec![
        item(1, "Margherita Pizza", "Tasty Bites", 1299, "1574071318508-1cdbab80d002", "Italian", 45),
        item(2, "Chicken Biryani", "Spice Junction", 1499, "1633945274405-b6c8069a1e43", "Indian", 42),
        item(3, "Double Cheeseburger", "Burger Empire", 999, "1568901346375-23c9450c58cd", "American", 40),
        item(4, "Sushi Platter", "Sushi World", 1899, "1579871494447-9811cf80d66c", "Japanese", 47),
        item(5, "Beef Tacos", "Taco Fiesta", 899, "1565299624946-b28f40a0ae38", "Mexican", 43),
        item(6, "Pad Thai", "Noodle House", 1099, "1559314809-0d155014e29e", "Thai", 41),
        item(7, "Vegetable Pasta", "Tasty Bites", 1199, "1473093295043-cdd812d0e601", "Italian", 44),
        item(8, "Butter Chicken", "Spice Junction", 1399, "1603894584373-5ac82b2ae398", "Indian", 46),
    ]
}

/// Returns the restaurant list in its as-loaded order.
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Tasty Bites".to_string(),
            image_url: image_url("1555396273-367ea4eb4db5"),
            cuisines: tags(&["Italian", "Pizza"]),
            rating: Decimal::new(45, 1),
            delivery_time_minutes: 25,
            price_tier: PriceTier::from_symbols("$$"),
            discount: "50% OFF up to $10".to_string(),
            is_promoted: true,
        },
        Restaurant {
            id: 2,
            name: "Spice Junction".to_string(),
            image_url: image_url("1585937421612-70a008356c36"),
            cuisines: tags(&["Indian", "Curry"]),
            rating: Decimal::new(42, 1),
            delivery_time_minutes: 35,
            price_tier: PriceTier::from_symbols("$$"),
            discount: "Free delivery".to_string(),
            is_promoted: false,
        },
        Restaurant {
            id: 3,
            name: "Burger Empire".to_string(),
            image_url: image_url("1550547660-d9450f859349"),
            cuisines: tags(&["American", "Burgers"]),
            rating: Decimal::new(40, 1),
            delivery_time_minutes: 20,
            price_tier: PriceTier::from_symbols("$"),
            discount: "Buy 1 Get 1 Free".to_string(),
            is_promoted: true,
        },
        Restaurant {
            id: 4,
            name: "Sushi World".to_string(),
            image_url: image_url("1579871494447-9811cf80d66c"),
            cuisines: tags(&["Japanese", "Sushi"]),
            rating: Decimal::new(47, 1),
            delivery_time_minutes: 40,
            price_tier: PriceTier::from_symbols("$$$"),
            discount: "20% OFF".to_string(),
            is_promoted: false,
        },
        Restaurant {
            id: 5,
            name: "Taco Fiesta".to_string(),
            image_url: image_url("1565299585323-38d6b0865b47"),
            cuisines: tags(&["Mexican", "Latin American"]),
            rating: Decimal::new(43, 1),
            delivery_time_minutes: 30,
            price_tier: PriceTier::from_symbols("$$"),
            discount: "30% OFF on first order".to_string(),
            is_promoted: true,
        },
        Restaurant {
            id: 6,
            name: "Noodle House".to_string(),
            image_url: image_url("1569718212165-3a8278d5f624"),
            cuisines: tags(&["Chinese", "Noodles"]),
            rating: Decimal::new(41, 1),
            delivery_time_minutes: 25,
            price_tier: PriceTier::from_symbols("$"),
            discount: "Free spring roll on orders above $20".to_string(),
            is_promoted: false,
        },
    ]
}

/// Spawns the simulated restaurant load.
///
/// After `delay` the full list is sent as [`Message::RestaurantsLoaded`].
/// The load cannot fail and is not cancellable.
pub fn spawn_restaurant_load(tx: mpsc::UnboundedSender<Message>, delay: Duration) {
    tokio::spawn(async move {
        debug!(delay_ms = delay.as_millis() as u64, "Loading restaurants");
        tokio::time::sleep(delay).await;
        let list = restaurants();
        info!(count = list.len(), "Restaurants loaded");
        // Receiver gone means the UI already shut down.
        let _ = tx.send(Message::RestaurantsLoaded(list));
    });
}

fn item(
    id: u32,
    name: &str,
    restaurant: &str,
    price_cents: i64,
    photo: &str,
    category: &str,
    rating_tenths: i64,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        restaurant: restaurant.to_string(),
        price: Decimal::new(price_cents, 2),
        image_url: image_url(photo),
        category: category.to_string(),
        rating: Decimal::new(rating_tenths, 1),
    }
}

fn image_url(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?auto=format&fit=crop&w=500&q=80")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
