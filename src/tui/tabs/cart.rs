//! Cart tab layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::PaymentMethod;
use crate::tui::app::{App, Focus, Mode};
use crate::tui::palette::Palette;

use super::money;

/// Renders the Cart tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if app.cart.is_empty() {
        render_empty(frame, area, palette);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Lines
            Constraint::Length(6), // Totals
            Constraint::Length(3), // Address
            Constraint::Length(4), // Payment
        ])
        .split(area);

    render_lines(frame, layout[0], app, palette);
    render_totals(frame, layout[1], app, palette);
    render_address(frame, layout[2], app, palette);
    render_payment(frame, layout[3], app, palette);
}

fn render_empty(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Your cart is empty",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Add items from restaurants to start an order",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[b] Browse Restaurants",
            Style::default().fg(palette.primary),
        )),
    ];
    let block = Block::default().title(" Your Cart ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_lines(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Your Cart ")
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::CartLines));

    let items: Vec<ListItem> = app
        .cart
        .lines()
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", line.item.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<16}", line.item.restaurant),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(format!(" x{:<3} ", line.quantity)),
                Span::styled(money(line.line_total()), Style::default().fg(palette.primary)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(palette.selected());
    let mut state = ListState::default().with_selected(Some(app.cart_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_totals(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let totals = app.cart.totals();
    let row = |label: &'static str, amount| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(palette.muted)),
            Span::raw(money(amount)),
        ])
    };

    let lines = vec![
        row("Subtotal", totals.subtotal),
        row("Delivery Fee", totals.delivery_fee),
        row("Tax", totals.tax),
        Line::from(vec![
            Span::styled(
                format!("{:<14}", "Total"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                money(totals.total),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_address(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let editing = app.mode == Mode::Insert && app.focus == Focus::AddressInput;
    let block = Block::default()
        .title(" Delivery Address ")
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::AddressInput));

    let content = if app.address_input.is_empty() && !editing {
        Span::styled(
            "Enter your delivery address",
            Style::default().fg(palette.muted),
        )
    } else {
        Span::raw(app.address_input.as_str())
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing {
        frame.set_cursor_position((inner.x + app.address_input.cursor_column(), inner.y));
    }
}

fn render_payment(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let option = |method: PaymentMethod| {
        let marker = if app.payment_method == method { "(•)" } else { "( )" };
        Line::from(format!("{marker} {}", method.label()))
    };

    let block = Block::default()
        .title(" Payment Method ")
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    let lines = vec![option(PaymentMethod::Card), option(PaymentMethod::Cash)];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
