//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use super::app::{App, Tab};
use super::components::{status_bar, tab_bar};
use super::palette::Palette;
use super::tabs::{cart, restaurants, search, tracking};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Active tab
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    tab_bar::render(frame, layout[0], app, &palette);
    status_bar::render(frame, layout[1], app, &palette);

    match app.current_tab() {
        Tab::Search => search::render(frame, layout[2], app, &palette),
        Tab::Cart => cart::render(frame, layout[2], app, &palette),
        Tab::Tracking => tracking::render(frame, layout[2], app, &palette),
        Tab::Restaurants => restaurants::render(frame, layout[2], app, &palette),
    }

    status_bar::render_keybindings(frame, layout[3], app, &palette);
}
