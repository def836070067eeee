//! Restaurant listing models.

use std::fmt;

use rust_decimal::Decimal;

/// A restaurant shown in the browse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    /// Cuisine tags used by the cuisine filter.
    pub cuisines: Vec<String>,
    pub rating: Decimal,
    pub delivery_time_minutes: u32,
    pub price_tier: PriceTier,
    /// Promotional text (e.g. "Free delivery").
    pub discount: String,
    /// Promoted restaurants lead the default ordering.
    pub is_promoted: bool,
}

impl Restaurant {
    /// Returns whether `cuisine` is one of this restaurant's tags.
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }
}

/// Symbolic price level, displayed as a run of `$` signs.
///
/// Only used for ordinal comparison; it carries no currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceTier(u8);

impl PriceTier {
    /// Parses a tier from its symbol form, counting the `$` characters.
    pub fn from_symbols(symbols: &str) -> Self {
        let level = symbols.chars().filter(|c| *c == '$').count();
        Self(u8::try_from(level).unwrap_or(u8::MAX))
    }

    /// Number of `$` symbols.
    pub fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("$")?;
        }
        Ok(())
    }
}
