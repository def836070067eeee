//! BiteBlitz food ordering library.
//!
//! Provides the dish search, cart aggregation, restaurant browsing, and
//! order tracking logic behind the `biteblitz` terminal application, plus
//! the TUI itself. All data is in-memory mock data; only the dark mode
//! preference is persisted.

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod restaurants;
pub mod search;
pub mod theme;
pub mod tracking;
pub mod tui;

pub use error::{BiteBlitzError, Result, ValidationError};
