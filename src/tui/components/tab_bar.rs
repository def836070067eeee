//! Tab bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Tab};
use crate::tui::palette::Palette;

/// Renders the tab bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " BiteBlitz ",
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, tab) in app.tabs.iter().enumerate() {
        let is_active = i == app.active_tab;

        let style = if is_active {
            palette.selected()
        } else {
            Style::default().fg(palette.fg)
        };

        // Cart badge shows the number of lines.
        let title = match tab {
            Tab::Cart if !app.cart.is_empty() => format!(" {} ({}) ", tab.title(), app.cart.len()),
            _ => format!(" {} ", tab.title()),
        };

        spans.push(Span::styled(title, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
