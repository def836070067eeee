//! Terminal User Interface for BiteBlitz.
//!
//! Provides a Ratatui-based TUI for searching dishes, managing the cart,
//! tracking the placed order, and browsing restaurants.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod palette;
pub mod tabs;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
