//! Application state for the TUI.
//!
//! [`App`] is the single owned state object. Views receive it by reference;
//! nothing about the session lives outside it.

use std::time::{Duration, Instant, SystemTime};

use tracing::{debug, info};

use crate::cart::{Cart, OrderIds};
use crate::catalog::QUICK_SEARCHES;
use crate::error::ValidationError;
use crate::models::{MenuItem, PaymentMethod, Restaurant};
use crate::restaurants::RestaurantBrowser;
use crate::search::SearchOutcome;
use crate::tracking::OrderTracker;

use super::input::TextInput;

/// How long a notice stays on screen.
const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

/// Central application state container.
pub struct App {
    // -- Tab State --
    /// Tabs in display order.
    pub tabs: Vec<Tab>,
    /// Index of the currently active tab.
    pub active_tab: usize,

    // -- Search State --
    /// Text typed into the search box.
    pub search_input: TextInput,
    /// Results of the last completed search.
    pub search_results: Vec<MenuItem>,
    /// Query the displayed results belong to.
    pub results_query: Option<String>,
    /// Generation of the search still in flight, if any.
    pub pending_search: Option<u64>,
    /// Highlighted result.
    pub result_index: usize,

    // -- Cart State --
    pub cart: Cart,
    /// Highlighted cart line.
    pub cart_index: usize,
    /// Delivery address being typed.
    pub address_input: TextInput,
    pub payment_method: PaymentMethod,
    pub order_ids: OrderIds,

    // -- Tracking State --
    pub tracker: OrderTracker,

    // -- Restaurant State --
    pub browser: RestaurantBrowser,
    /// Highlighted restaurant within the filtered list.
    pub restaurant_index: usize,

    // -- UI State --
    /// Current focus within the active tab.
    pub focus: Focus,
    /// Current input mode.
    pub mode: Mode,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Transient notice (clears after a timeout).
    pub notice: Option<Notice>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            tabs: Tab::ALL.to_vec(),
            active_tab: 0,

            search_input: TextInput::new(),
            search_results: Vec::new(),
            results_query: None,
            pending_search: None,
            result_index: 0,

            cart: Cart::new(),
            cart_index: 0,
            address_input: TextInput::new(),
            payment_method: PaymentMethod::default(),
            order_ids: OrderIds::new(),

            tracker: OrderTracker::default(),

            browser: RestaurantBrowser::new(),
            restaurant_index: 0,

            focus: Focus::SearchInput,
            mode: Mode::Normal,
            dark_mode,
            notice: None,

            should_quit: false,
        }
    }

    /// Returns the currently active tab.
    pub fn current_tab(&self) -> Tab {
        self.tabs[self.active_tab]
    }

    /// Switches to the next tab.
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
        self.update_focus_for_tab();
    }

    /// Switches to the previous tab.
    pub fn previous_tab(&mut self) {
        self.active_tab = self
            .active_tab
            .checked_sub(1)
            .unwrap_or(self.tabs.len() - 1);
        self.update_focus_for_tab();
    }

    /// Switches directly to `tab`.
    pub fn select_tab(&mut self, tab: Tab) {
        if let Some(index) = self.tabs.iter().position(|t| *t == tab) {
            self.active_tab = index;
            self.update_focus_for_tab();
        }
    }

    /// Updates focus when switching tabs.
    fn update_focus_for_tab(&mut self) {
        self.mode = Mode::Normal;
        self.focus = match self.current_tab() {
            Tab::Search => Focus::SearchInput,
            Tab::Cart => Focus::CartLines,
            Tab::Tracking => Focus::Tracking,
            Tab::Restaurants => Focus::RestaurantList,
        };
    }

    // -- Search --

    /// Whether a search is waiting for its results.
    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Records that search `generation` is in flight.
    pub fn begin_search(&mut self, generation: u64) {
        self.pending_search = Some(generation);
    }

    /// Applies a finished search. Returns `false` if it was superseded.
    pub fn finish_search(&mut self, outcome: SearchOutcome) -> bool {
        if self.pending_search != Some(outcome.generation) {
            debug!(
                generation = outcome.generation,
                pending = ?self.pending_search,
                "Discarding stale search result"
            );
            return false;
        }

        self.pending_search = None;
        self.result_index = 0;
        let found = outcome.results.len();
        self.search_results = outcome.results;
        self.results_query = Some(outcome.query);

        if found == 0 {
            self.show_notice(NoticeLevel::Info, "No items found matching your search");
        } else {
            self.show_notice(
                NoticeLevel::Success,
                format!("Found {found} items matching your search"),
            );
        }
        self.focus = Focus::SearchResults;
        true
    }

    /// Puts a quick-search category into the search box.
    ///
    /// Returns the query to run, or `None` for an out-of-range index.
    pub fn quick_search(&mut self, index: usize) -> Option<String> {
        let category = QUICK_SEARCHES.get(index)?;
        self.search_input.set(category);
        Some((*category).to_string())
    }

    /// Adds the highlighted search result to the cart.
    pub fn add_selected_result(&mut self) {
        if let Some(item) = self.search_results.get(self.result_index).cloned() {
            self.add_to_cart(&item);
        }
    }

    // -- Cart --

    /// Adds one unit of `item` and announces it.
    pub fn add_to_cart(&mut self, item: &MenuItem) {
        self.cart.add(item);
        self.show_notice(NoticeLevel::Success, format!("Added {} to cart", item.name));
    }

    /// Removes the highlighted cart line.
    pub fn remove_selected_line(&mut self) {
        let Some(id) = self.cart.lines().get(self.cart_index).map(|l| l.item.id) else {
            return;
        };
        self.cart.remove(id);
        self.cart_index = self.cart_index.min(self.cart.len().saturating_sub(1));
        self.show_notice(NoticeLevel::Info, "Item removed from cart");
    }

    /// Changes the highlighted line's quantity; never goes below 1.
    pub fn adjust_selected_line(&mut self, delta: i64) {
        if let Some(id) = self.cart.lines().get(self.cart_index).map(|l| l.item.id) {
            self.cart.adjust_quantity(id, delta);
        }
    }

    /// Submits the cart as an order.
    ///
    /// On success the cart and address are cleared, the order is tracked,
    /// and the tracking tab is shown.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, which is also shown as a notice.
    pub fn place_order(&mut self, now: SystemTime) -> Result<(), ValidationError> {
        let result = self.cart.checkout(
            self.address_input.as_str(),
            self.payment_method,
            &mut self.order_ids,
            now,
        );

        match result {
            Ok(order) => {
                self.address_input.clear();
                self.cart_index = 0;
                self.tracker.confirm(order);
                self.select_tab(Tab::Tracking);
                self.show_notice(NoticeLevel::Success, "Order placed successfully!");
                Ok(())
            }
            Err(e) => {
                self.show_error(e);
                Err(e)
            }
        }
    }

    // -- Restaurants --

    /// Installs the loaded restaurant list.
    pub fn restaurants_loaded(&mut self, restaurants: Vec<Restaurant>) {
        self.browser.load(restaurants);
        self.restaurant_index = 0;
    }

    /// Advances to the next sort mode and re-sorts.
    pub fn cycle_sort(&mut self) {
        let mode = self.browser.sort_mode().next();
        self.browser.sort_by(mode);
        self.restaurant_index = 0;
        self.show_notice(NoticeLevel::Success, format!("Sorted by {}", mode.label()));
    }

    /// Moves the cuisine filter forward or backward.
    pub fn cycle_cuisine(&mut self, forward: bool) {
        self.browser.cycle_cuisine(forward);
        self.restaurant_index = 0;
    }

    /// Opens the highlighted restaurant's menu.
    pub fn view_selected_restaurant(&mut self) {
        let name = self
            .browser
            .visible()
            .get(self.restaurant_index)
            .map(|r| r.name.clone());
        if let Some(name) = name {
            self.show_notice(NoticeLevel::Success, format!("Viewing {name} menu"));
        }
    }

    // -- Theme --

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        info!(dark = self.dark_mode, "Theme toggled");
        self.dark_mode
    }

    // -- Notices --

    /// Shows a notice.
    pub fn show_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Shows an error notice.
    pub fn show_error(&mut self, message: impl ToString) {
        self.show_notice(NoticeLevel::Error, message.to_string());
    }

    /// Clears a notice older than its lifetime.
    pub fn clear_stale_notice(&mut self) {
        if let Some(ref notice) = self.notice
            && notice.timestamp.elapsed() > NOTICE_LIFETIME
        {
            self.notice = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Tabs in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Search,
    Cart,
    Tracking,
    Restaurants,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Search, Tab::Cart, Tab::Tracking, Tab::Restaurants];

    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Cart => "Cart",
            Tab::Tracking => "Tracking",
            Tab::Restaurants => "Restaurants",
        }
    }
}

/// UI focus targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    // Search tab
    #[default]
    SearchInput,
    SearchResults,

    // Cart tab
    CartLines,
    AddressInput,

    // Tracking tab
    Tracking,

    // Restaurants tab
    RestaurantList,
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// Severity of a notice, which picks its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Notice with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// When the notice was shown.
    pub timestamp: Instant,
}
