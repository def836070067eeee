//! Domain models for the food ordering session.
//!
//! Catalog entries ([`MenuItem`], [`Restaurant`]) are immutable mock data.
//! [`Order`] is a snapshot taken at checkout and never recomputed.

pub mod menu;
pub mod order;
pub mod restaurant;

pub use menu::{CartLine, ItemId, MenuItem};
pub use order::{Order, OrderStatus, PaymentMethod};
pub use restaurant::{PriceTier, Restaurant};
