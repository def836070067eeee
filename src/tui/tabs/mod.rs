//! One module per tab.

pub mod cart;
pub mod restaurants;
pub mod search;
pub mod tracking;

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a dollar amount rounded to cents, half a cent rounding up.
pub(crate) fn money(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}
