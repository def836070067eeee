//! Order tracking.
//!
//! Two states: no order yet, or a confirmed order. Placing another order
//! replaces the one being tracked; there is no history. Delivery stages are
//! illustrative and never advance with time.

use tracing::info;

use crate::models::Order;

/// A delivery stage shown on the tracking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingStage {
    pub title: &'static str,
    pub detail: &'static str,
    /// Drawn as reached.
    pub reached: bool,
}

/// The fixed stage list displayed for every confirmed order.
pub const STAGES: [TrackingStage; 4] = [
    TrackingStage {
        title: "Order Confirmed",
        detail: "Your order has been received",
        reached: true,
    },
    TrackingStage {
        title: "Preparing Your Food",
        detail: "The restaurant is preparing your order",
        reached: true,
    },
    TrackingStage {
        title: "Out for Delivery",
        detail: "Your order will be on its way soon",
        reached: false,
    },
    TrackingStage {
        title: "Delivered",
        detail: "Enjoy your meal!",
        reached: false,
    },
];

/// Tracking state for the session.
#[derive(Debug, Clone, Default)]
pub enum OrderTracker {
    #[default]
    NoOrder,
    Confirmed(Box<Order>),
}

impl OrderTracker {
    /// Starts tracking `order`, replacing any order already tracked.
    pub fn confirm(&mut self, order: Order) {
        if let OrderTracker::Confirmed(previous) = self {
            info!(replaced = previous.id, order = order.id, "Tracked order replaced");
        }
        *self = OrderTracker::Confirmed(Box::new(order));
    }

    /// The order being tracked, if any.
    pub fn current(&self) -> Option<&Order> {
        match self {
            OrderTracker::NoOrder => None,
            OrderTracker::Confirmed(order) => Some(order.as_ref()),
        }
    }
}
