use std::fs::File;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use biteblitz::catalog::{food_items, spawn_restaurant_load};
use biteblitz::config::{AppConfig, fetch_config};
use biteblitz::search::SearchDispatcher;
use biteblitz::theme::{JsonFileStore, load_dark_mode, save_dark_mode, system_prefers_dark};
use biteblitz::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use biteblitz::tui::terminal::install_panic_hook;
use biteblitz::tui::{Action, App, Message, Tui, render, restore_terminal, setup_terminal};
use biteblitz::{BiteBlitzError, Result};

/// Interval between UI ticks (notice expiry, redraw).
const TICK_INTERVAL_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    let config = fetch_config()?;
    init_logging(&config)?;

    let store = JsonFileStore::new(config.preferences_path.clone());
    let dark_mode = load_dark_mode(&store, system_prefers_dark());
    let mut app = App::new(dark_mode);
    info!(dark_mode, prefs = %store.path().display(), "Starting BiteBlitz");

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    spawn_restaurant_load(tx.clone(), config.load_delay);

    let mut dispatcher = SearchDispatcher::new(food_items(), config.search_delay);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &mut rx, &tx, &mut dispatcher, &store).await;
    restore_terminal(&mut terminal)?;

    info!("BiteBlitz exited");
    result
}

/// Draws the UI and applies messages until the user quits.
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    tx: &mpsc::UnboundedSender<Message>,
    dispatcher: &mut SearchDispatcher,
    store: &JsonFileStore,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| BiteBlitzError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        match update(app, message) {
            Some(Action::Search(query)) => match dispatcher.dispatch(&query, tx.clone()) {
                Ok(generation) => app.begin_search(generation),
                Err(e) => app.show_error(e),
            },
            Some(Action::SaveTheme(dark)) => {
                if let Err(e) = save_dark_mode(store, dark) {
                    warn!(error = %e, "Could not save theme preference");
                    app.show_error(format!("Could not save theme: {e}"));
                }
            }
            None => {}
        }
    }
    Ok(())
}

/// Sends tracing output to the configured log file; stdout belongs to the TUI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let file = File::create(&config.log_path).map_err(|e| {
        BiteBlitzError::Io(format!(
            "failed to open log file {}: {e}",
            config.log_path.display()
        ))
    })?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
