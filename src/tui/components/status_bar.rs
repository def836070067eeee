//! Status bar and keybinding help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode, Tab};
use crate::tui::palette::Palette;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme_label = if app.dark_mode { " Dark " } else { " Light " };

    let activity = if app.is_searching() {
        Span::styled(" Searching... ", Style::default().fg(palette.accent))
    } else if !app.browser.is_loaded() {
        Span::styled(" Loading restaurants... ", Style::default().fg(palette.accent))
    } else {
        Span::raw("")
    };

    let notice_span = match app.notice {
        Some(ref notice) => Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(palette.notice(notice.level)),
        ),
        None => Span::raw(""),
    };

    let line = Line::from(vec![
        Span::styled(theme_label, Style::default().fg(palette.fg)),
        Span::raw("│"),
        activity,
        Span::raw("│"),
        notice_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(palette.bar_bg));
    frame.render_widget(para, area);
}

/// Renders the keybindings help line for the active tab and mode.
pub fn render_keybindings(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let help = if app.mode == Mode::Insert {
        "Enter submit  Esc cancel  ←/→ move"
    } else {
        match app.current_tab() {
            Tab::Search => "i search  1-6 quick  j/k select  a add  Tab switch  t theme  q quit",
            Tab::Cart => "j/k select  +/- qty  d remove  a address  p payment  Enter order  q quit",
            Tab::Tracking => "n new order  Tab switch  t theme  q quit",
            Tab::Restaurants => "h/l cuisine  s sort  j/k select  Enter menu  t theme  q quit",
        }
    };

    let para = Paragraph::new(Line::from(Span::styled(
        format!(" {help}"),
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(para, area);
}
