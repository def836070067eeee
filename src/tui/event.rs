//! Event handling for the TUI.

use std::time::{Duration, SystemTime};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::models::Restaurant;
use crate::search::{SearchOutcome, validate_query};

use super::app::{App, Focus, Mode, Tab};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A dispatched search finished its simulated latency.
    SearchCompleted(SearchOutcome),
    /// The simulated restaurant load finished.
    RestaurantsLoaded(Vec<Restaurant>),
    /// Request to quit the application.
    Quit,
}

/// Actions that require handling outside the state update.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Dispatch a search for the query.
    Search(String),
    /// Persist the dark mode flag.
    SaveTheme(bool),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::SearchCompleted(outcome) => {
            app.finish_search(outcome);
            None
        }
        Message::RestaurantsLoaded(restaurants) => {
            app.restaurants_loaded(restaurants);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_notice();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Global keys (work in any mode)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return None;
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }

        // Tab navigation
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.previous_tab();
            } else {
                app.next_tab();
            }
            None
        }
        KeyCode::BackTab => {
            app.previous_tab();
            None
        }

        // Theme
        KeyCode::Char('t') => Some(Action::SaveTheme(app.toggle_dark_mode())),

        _ => match app.current_tab() {
            Tab::Search => handle_search_tab_keys(app, key),
            Tab::Cart => handle_cart_tab_keys(app, key),
            Tab::Tracking => handle_tracking_tab_keys(app, key),
            Tab::Restaurants => handle_restaurants_tab_keys(app, key),
        },
    }
}

/// Handles keys for the Search tab.
fn handle_search_tab_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.focus = Focus::SearchInput;
            app.mode = Mode::Insert;
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus = Focus::SearchResults;
            if app.result_index + 1 < app.search_results.len() {
                app.result_index += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus = Focus::SearchResults;
            app.result_index = app.result_index.saturating_sub(1);
            None
        }
        KeyCode::Char('a') | KeyCode::Enter if app.focus == Focus::SearchResults => {
            app.add_selected_result();
            None
        }
        KeyCode::Enter => submit_search(app),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            let query = app.quick_search(index)?;
            Some(Action::Search(query))
        }
        _ => None,
    }
}

/// Handles keys for the Cart tab.
fn handle_cart_tab_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cart_index + 1 < app.cart.len() {
                app.cart_index += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cart_index = app.cart_index.saturating_sub(1);
            None
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_selected_line(1);
            None
        }
        KeyCode::Char('-') => {
            app.adjust_selected_line(-1);
            None
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_selected_line();
            None
        }
        KeyCode::Char('p') => {
            app.payment_method.toggle();
            None
        }
        KeyCode::Char('i') | KeyCode::Char('a') if !app.cart.is_empty() => {
            app.focus = Focus::AddressInput;
            app.mode = Mode::Insert;
            None
        }
        KeyCode::Char('b') if app.cart.is_empty() => {
            app.select_tab(Tab::Search);
            None
        }
        KeyCode::Enter => {
            // Failures are surfaced as notices by place_order.
            let _ = app.place_order(SystemTime::now());
            None
        }
        _ => None,
    }
}

/// Handles keys for the Tracking tab.
fn handle_tracking_tab_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Enter => {
            app.select_tab(Tab::Search);
            None
        }
        _ => None,
    }
}

/// Handles keys for the Restaurants tab.
fn handle_restaurants_tab_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.cycle_cuisine(false);
            None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.cycle_cuisine(true);
            None
        }
        KeyCode::Char('s') => {
            app.cycle_sort();
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.restaurant_index + 1 < app.browser.visible().len() {
                app.restaurant_index += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.restaurant_index = app.restaurant_index.saturating_sub(1);
            None
        }
        KeyCode::Enter => {
            app.view_selected_restaurant();
            None
        }
        _ => None,
    }
}

/// Handles keys in insert mode (text input).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    let input = match app.focus {
        Focus::SearchInput => &mut app.search_input,
        Focus::AddressInput => &mut app.address_input,
        _ => {
            app.mode = Mode::Normal;
            return None;
        }
    };

    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            match app.focus {
                Focus::SearchInput => submit_search(app),
                _ => {
                    // Failures are surfaced as notices by place_order.
                    let _ = app.place_order(SystemTime::now());
                    None
                }
            }
        }
        KeyCode::Char(c) => {
            input.insert(c);
            None
        }
        KeyCode::Backspace => {
            input.backspace();
            None
        }
        KeyCode::Delete => {
            input.delete();
            None
        }
        KeyCode::Left => {
            input.move_left();
            None
        }
        KeyCode::Right => {
            input.move_right();
            None
        }
        KeyCode::Home => {
            input.move_home();
            None
        }
        KeyCode::End => {
            input.move_end();
            None
        }
        _ => None,
    }
}

/// Validates the search box and requests a search.
fn submit_search(app: &mut App) -> Option<Action> {
    match validate_query(app.search_input.as_str()) {
        Ok(query) => Some(Action::Search(query.to_string())),
        Err(e) => {
            app.show_error(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{food_items, restaurants};
    use crate::tui::app::NoticeLevel;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        update(
            app,
            Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_a_query_requests_search() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Insert);
        type_text(&mut app, "pizza");

        let action = press(&mut app, KeyCode::Enter);
        assert_eq!(action, Some(Action::Search("pizza".to_string())));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn blank_query_shows_error_without_action() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "   ");

        assert_eq!(press(&mut app, KeyCode::Enter), None);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please enter a search term");
    }

    #[test]
    fn quick_search_key_requests_category() {
        let mut app = App::default();
        assert_eq!(
            press(&mut app, KeyCode::Char('3')),
            Some(Action::Search("Sushi".to_string()))
        );
    }

    #[test]
    fn theme_toggle_requests_save() {
        let mut app = App::new(false);
        assert_eq!(press(&mut app, KeyCode::Char('t')), Some(Action::SaveTheme(true)));
        assert_eq!(press(&mut app, KeyCode::Char('t')), Some(Action::SaveTheme(false)));
    }

    #[test]
    fn typing_t_in_insert_mode_does_not_toggle_theme() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(press(&mut app, KeyCode::Char('t')), None);
        assert!(!app.dark_mode);
        assert_eq!(app.search_input.as_str(), "t");
    }

    #[test]
    fn cart_keys_adjust_and_checkout() {
        let mut app = App::default();
        app.add_to_cart(&food_items()[0]);
        app.select_tab(Tab::Cart);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.cart.lines()[0].quantity, 2);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.payment_method, crate::models::PaymentMethod::Cash);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "7 Elm Row");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_tab(), Tab::Tracking);
        assert!(app.cart.is_empty());
        assert!(app.address_input.is_empty());
        let order = app.tracker.current().unwrap();
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.payment_method, crate::models::PaymentMethod::Cash);
    }

    #[test]
    fn address_edit_needs_a_non_empty_cart() {
        let mut app = App::default();
        app.select_tab(Tab::Cart);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.focus, Focus::CartLines);

        type_text(&mut app, "9 Elm");
        assert!(app.address_input.is_empty());

        app.add_to_cart(&food_items()[0]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.focus, Focus::AddressInput);
    }

    #[test]
    fn search_results_flow_into_cart() {
        let mut app = App::default();
        app.begin_search(1);
        update(
            &mut app,
            Message::SearchCompleted(SearchOutcome {
                generation: 1,
                query: "indian".to_string(),
                results: crate::search::search(&food_items(), "indian").unwrap(),
            }),
        );
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.lines()[0].item.name, "Butter Chicken");
    }

    #[test]
    fn restaurant_keys_filter_and_sort() {
        let mut app = App::default();
        update(&mut app, Message::RestaurantsLoaded(restaurants()));
        app.select_tab(Tab::Restaurants);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.browser.cuisine().label(), "Indian");
        let visible = app.browser.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Spice Junction");
    }

    #[test]
    fn quit_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
