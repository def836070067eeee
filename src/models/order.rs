//! Submitted order snapshot.

use std::fmt;
use std::time::SystemTime;

use rust_decimal::Decimal;
use serde::Serialize;

use super::menu::CartLine;

/// How the customer pays on delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl PaymentMethod {
    /// Switches between card and cash.
    pub fn toggle(&mut self) {
        *self = match self {
            PaymentMethod::Card => PaymentMethod::Cash,
            PaymentMethod::Cash => PaymentMethod::Card,
        };
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Cash => "Cash on Delivery",
        }
    }
}

/// Lifecycle status of a submitted order. Only confirmation is modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Confirmed => f.write_str("confirmed"),
        }
    }
}

/// An order placed at checkout.
///
/// Amounts are computed once from the cart at the moment of submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    pub lines: Vec<CartLine>,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub placed_at: SystemTime,
    pub estimated_delivery: SystemTime,
}

impl Order {
    /// Renders the order as a single-line JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
