//! Restaurant browsing: cuisine filter and sort modes.
//!
//! Sorting reorders the canonical list itself, so a later cuisine filter
//! sees the sorted order. Only one sort mode is active at a time; choosing
//! a new one re-sorts from the current order rather than layering keys.

use std::cmp::Ordering;

use tracing::info;

use crate::catalog::CUISINES;
use crate::models::Restaurant;

/// Cuisine filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CuisineFilter {
    /// Every restaurant is shown.
    #[default]
    All,
    /// Only restaurants tagged with this cuisine.
    Only(String),
}

impl CuisineFilter {
    /// Builds a filter from a chip label; `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            CuisineFilter::All
        } else {
            CuisineFilter::Only(label.to_string())
        }
    }

    /// Returns the chip label.
    pub fn label(&self) -> &str {
        match self {
            CuisineFilter::All => "All",
            CuisineFilter::Only(cuisine) => cuisine,
        }
    }

    /// Returns whether `restaurant` passes this filter.
    pub fn admits(&self, restaurant: &Restaurant) -> bool {
        match self {
            CuisineFilter::All => true,
            CuisineFilter::Only(cuisine) => restaurant.serves(cuisine),
        }
    }
}

/// Ordering applied to the restaurant list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Promoted first, then by rating, highest first.
    #[default]
    Popularity,
    /// Highest rating first.
    Rating,
    /// Fastest delivery first.
    DeliveryTime,
    /// Fewest `$` first.
    PriceLow,
    /// Most `$` first.
    PriceHigh,
}

impl SortMode {
    /// All modes in menu order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Popularity,
        SortMode::Rating,
        SortMode::DeliveryTime,
        SortMode::PriceLow,
        SortMode::PriceHigh,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Popularity => "Popularity",
            SortMode::Rating => "Rating",
            SortMode::DeliveryTime => "Delivery Time",
            SortMode::PriceLow => "Price: Low to High",
            SortMode::PriceHigh => "Price: High to Low",
        }
    }

    /// Returns the next mode in menu order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Compares two restaurants under this mode.
    pub fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self {
            SortMode::Rating => b.rating.cmp(&a.rating),
            SortMode::DeliveryTime => a.delivery_time_minutes.cmp(&b.delivery_time_minutes),
            SortMode::PriceLow => a.price_tier.cmp(&b.price_tier),
            SortMode::PriceHigh => b.price_tier.cmp(&a.price_tier),
            SortMode::Popularity => b
                .is_promoted
                .cmp(&a.is_promoted)
                .then_with(|| b.rating.cmp(&a.rating)),
        }
    }
}

/// Restaurant list with the active filter and sort selection.
#[derive(Debug, Clone, Default)]
pub struct RestaurantBrowser {
    restaurants: Vec<Restaurant>,
    loaded: bool,
    cuisine: CuisineFilter,
    sort_mode: SortMode,
}

impl RestaurantBrowser {
    /// Creates a browser that is still waiting for its list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the loaded list in its as-delivered order.
    pub fn load(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.loaded = true;
    }

    /// Whether the list has arrived.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The canonical ordering, ignoring the cuisine filter.
    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn cuisine(&self) -> &CuisineFilter {
        &self.cuisine
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Replaces the cuisine filter.
    pub fn select_cuisine(&mut self, cuisine: CuisineFilter) {
        info!(cuisine = cuisine.label(), "Cuisine filter changed");
        self.cuisine = cuisine;
    }

    /// Moves the cuisine filter to the next chip (or previous when `forward`
    /// is false), wrapping around.
    pub fn cycle_cuisine(&mut self, forward: bool) {
        let index = CUISINES
            .iter()
            .position(|c| *c == self.cuisine.label())
            .unwrap_or(0);
        let len = CUISINES.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.select_cuisine(CuisineFilter::from_label(CUISINES[next]));
    }

    /// Sorts the canonical list by `mode`. The sort is stable.
    pub fn sort_by(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.restaurants.sort_by(|a, b| mode.compare(a, b));
        info!(mode = mode.label(), "Restaurants sorted");
    }

    /// Restaurants passing the cuisine filter, in canonical order.
    pub fn visible(&self) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| self.cuisine.admits(r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::restaurants;

    fn loaded() -> RestaurantBrowser {
        let mut browser = RestaurantBrowser::new();
        browser.load(restaurants());
        browser
    }

    fn names(list: &[&Restaurant]) -> Vec<String> {
        list.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn starts_unloaded_and_empty() {
        let browser = RestaurantBrowser::new();
        assert!(!browser.is_loaded());
        assert!(browser.visible().is_empty());
    }

    #[test]
    fn indian_filter_returns_spice_junction() {
        let mut browser = loaded();
        browser.select_cuisine(CuisineFilter::from_label("Indian"));
        assert_eq!(names(&browser.visible()), vec!["Spice Junction"]);
    }

    #[test]
    fn all_filter_shows_everything_in_load_order() {
        let browser = loaded();
        assert_eq!(browser.visible().len(), 6);
        assert_eq!(browser.visible()[0].name, "Tasty Bites");
    }

    #[test]
    fn unknown_cuisine_shows_nothing() {
        let mut browser = loaded();
        browser.select_cuisine(CuisineFilter::from_label("Greek"));
        assert!(browser.visible().is_empty());
    }

    #[test]
    fn rating_sort_is_descending() {
        let mut browser = loaded();
        browser.sort_by(SortMode::Rating);
        let ratings: Vec<_> = browser.all().iter().map(|r| r.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(browser.all()[0].name, "Sushi World");
    }

    #[test]
    fn delivery_sort_is_ascending() {
        let mut browser = loaded();
        browser.sort_by(SortMode::DeliveryTime);
        let minutes: Vec<_> = browser
            .all()
            .iter()
            .map(|r| r.delivery_time_minutes)
            .collect();
        assert_eq!(minutes, vec![20, 25, 25, 30, 35, 40]);
        // Stable: Tasty Bites was loaded before Noodle House.
        assert_eq!(browser.all()[1].name, "Tasty Bites");
    }

    #[test]
    fn price_sorts_compare_tier_length() {
        let mut browser = loaded();
        browser.sort_by(SortMode::PriceLow);
        assert_eq!(browser.all()[0].price_tier.level(), 1);
        assert_eq!(browser.all()[5].name, "Sushi World");

        browser.sort_by(SortMode::PriceHigh);
        assert_eq!(browser.all()[0].name, "Sushi World");
        assert_eq!(browser.all()[5].price_tier.level(), 1);
    }

    #[test]
    fn popularity_puts_promoted_first_by_rating() {
        let mut browser = loaded();
        browser.sort_by(SortMode::Rating);
        browser.sort_by(SortMode::Popularity);
        let order: Vec<_> = browser.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Tasty Bites",
                "Taco Fiesta",
                "Burger Empire",
                "Sushi World",
                "Spice Junction",
                "Noodle House",
            ]
        );
    }

    #[test]
    fn filter_after_sort_keeps_sorted_order() {
        let mut browser = loaded();
        browser.sort_by(SortMode::Rating);
        browser.select_cuisine(CuisineFilter::All);
        let ratings: Vec<_> = browser.visible().iter().map(|r| r.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));

        for cuisine in CUISINES {
            browser.select_cuisine(CuisineFilter::from_label(cuisine));
            let ratings: Vec<_> = browser.visible().iter().map(|r| r.rating).collect();
            assert!(ratings.windows(2).all(|w| w[0] >= w[1]), "{cuisine}");
        }
    }

    #[test]
    fn cuisine_cycle_wraps() {
        let mut browser = loaded();
        browser.cycle_cuisine(false);
        assert_eq!(browser.cuisine().label(), "Chinese");
        browser.cycle_cuisine(true);
        assert_eq!(browser.cuisine(), &CuisineFilter::All);
    }

    #[test]
    fn sort_mode_cycle_wraps() {
        assert_eq!(SortMode::Popularity.next(), SortMode::Rating);
        assert_eq!(SortMode::PriceHigh.next(), SortMode::Popularity);
    }
}
