//! Restaurants tab layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::catalog::CUISINES;
use crate::tui::app::{App, Focus};
use crate::tui::palette::Palette;

/// Renders the Restaurants tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Min(5),    // List
        ])
        .split(area);

    render_filters(frame, layout[0], app, palette);
    render_list(frame, layout[1], app, palette);
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let selected = app.browser.cuisine().label();
    let mut spans: Vec<Span> = CUISINES
        .iter()
        .map(|cuisine| {
            let style = if *cuisine == selected {
                palette.selected()
            } else {
                Style::default().fg(palette.fg)
            };
            Span::styled(format!(" {cuisine} "), style)
        })
        .collect();
    spans.push(Span::styled(
        format!("   Sort by: {}", app.browser.sort_mode().label()),
        Style::default().fg(palette.muted),
    ));

    let block = Block::default()
        .title(" Restaurants Near You ")
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::RestaurantList));

    if !app.browser.is_loaded() {
        let para = Paragraph::new(Span::styled(
            "Loading restaurants...",
            Style::default().fg(palette.accent),
        ))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    let visible = app.browser.visible();
    if visible.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "No restaurants found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try changing your filters or location",
                Style::default().fg(palette.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|r| {
            let mut spans = vec![Span::styled(
                format!("{:<16}", r.name),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if r.is_promoted {
                spans.push(Span::styled(
                    "Promoted ",
                    Style::default().fg(palette.accent),
                ));
            }
            spans.extend([
                Span::styled(
                    format!("{} • {} ", r.cuisines.join(", "), r.price_tier),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(format!("★{} {} min ", r.rating, r.delivery_time_minutes)),
                Span::styled(r.discount.clone(), Style::default().fg(palette.primary)),
            ]);
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(palette.selected());
    let mut state = ListState::default().with_selected(Some(app.restaurant_index));
    frame.render_stateful_widget(list, area, &mut state);
}
