//! Search tab layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::catalog::QUICK_SEARCHES;
use crate::tui::app::{App, Focus, Mode};
use crate::tui::palette::Palette;

use super::money;

/// Renders the Search tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Results
        ])
        .split(area);

    render_input(frame, layout[0], app, palette);
    render_results(frame, layout[1], app, palette);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let editing = app.mode == Mode::Insert && app.focus == Focus::SearchInput;
    let block = Block::default()
        .title(" Search for Food ")
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::SearchInput));

    let content = if app.search_input.is_empty() && !editing {
        Span::styled(
            "Search for dishes, cuisines, or restaurants...",
            Style::default().fg(palette.muted),
        )
    } else {
        Span::raw(app.search_input.as_str())
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing {
        frame.set_cursor_position((inner.x + app.search_input.cursor_column(), inner.y));
    }
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::SearchResults));

    if app.is_searching() {
        let para = Paragraph::new(Line::from(Span::styled(
            "Searching...",
            Style::default().fg(palette.accent),
        )))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    if app.search_results.is_empty() {
        let mut lines = Vec::new();
        if app.results_query.is_some() {
            lines.push(Line::from("No results found. Try a different search term."));
        } else {
            lines.push(Line::from("Search for your favorite food above."));
            lines.push(Line::from(""));
            let chips: Vec<Span> = QUICK_SEARCHES
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    Span::styled(
                        format!(" [{}] {} ", i + 1, category),
                        Style::default().fg(palette.primary),
                    )
                })
                .collect();
            lines.push(Line::from(chips));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let query = app.results_query.as_deref().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Showing {} results for \"{}\"", app.search_results.len(), query),
            Style::default().fg(palette.muted),
        )),
        layout[0],
    );

    let items: Vec<ListItem> = app
        .search_results
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", item.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} • {} ", item.restaurant, item.category),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(format!("★{} ", item.rating)),
                Span::styled(money(item.price), Style::default().fg(palette.primary)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(palette.selected());
    let mut state = ListState::default();
    if app.focus == Focus::SearchResults {
        state.select(Some(app.result_index));
    }
    frame.render_stateful_widget(list, layout[1], &mut state);
}
