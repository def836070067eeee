//! Tracking tab layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::clock::clock_time;
use crate::models::Order;
use crate::tracking::STAGES;
use crate::tui::app::App;
use crate::tui::palette::Palette;

use super::money;

/// Renders the Tracking tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Order Tracking ")
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    let Some(order) = app.tracker.current() else {
        let lines = vec![
            Line::from("You don't have any orders to track at the moment"),
            Line::from(""),
            Line::from(Span::styled(
                "[n] Start Ordering",
                Style::default().fg(palette.primary),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_status(frame, layout[0], order, palette);
    render_summary(frame, layout[1], order, palette);
}

fn render_status(frame: &mut Frame, area: Rect, order: &Order, palette: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Order Confirmed",
            Style::default()
                .fg(palette.notice(crate::tui::app::NoticeLevel::Success))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Your order #{} has been {} and is being prepared.",
            order.id, order.status
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Delivery Status",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for (i, stage) in STAGES.iter().enumerate() {
        let style = if stage.reached {
            Style::default().fg(palette.primary)
        } else {
            Style::default().fg(palette.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), style.add_modifier(Modifier::REVERSED)),
            Span::styled(format!(" {}", stage.title), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", stage.detail),
            Style::default().fg(palette.muted),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Estimated Delivery Time",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        clock_time(order.estimated_delivery),
        Style::default().fg(palette.primary),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_summary(frame: &mut Frame, area: Rect, order: &Order, palette: &Palette) {
    let mut lines = vec![Line::from(Span::styled(
        "Order Summary",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for line in &order.lines {
        lines.push(Line::from(vec![
            Span::raw(format!("{}x {:<22}", line.quantity, line.item.name)),
            Span::raw(money(line.line_total())),
        ]));
    }

    lines.push(Line::from(""));
    for (label, amount) in [
        ("Subtotal", order.subtotal),
        ("Delivery Fee", order.delivery_fee),
        ("Tax", order.tax),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(palette.muted)),
            Span::raw(money(amount)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<14}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(money(order.total), Style::default().add_modifier(Modifier::BOLD)),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(format!("Deliver to: {}", order.address)));
    lines.push(Line::from(format!("Payment: {}", order.payment_method.label())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[n] Place Another Order",
        Style::default().fg(palette.primary),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
