//! Top navigation bar: brand, one button per page (exactly one lit), clock.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::router::Router;
use crate::ui::theme::{BRAND, MUTED};

pub fn nav_spans(router: &Router) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (route, active)) in router.indicators().into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, route.title());
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans
}

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, router: &Router, now: DateTime<Local>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10), Constraint::Length(28)])
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        "☁ CloudManager",
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(brand, cols[0]);

    let nav = Paragraph::new(Line::from(nav_spans(router))).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(nav, cols[1]);

    let clock = Paragraph::new(Line::from(Span::styled(
        format!("{}  (q to quit)", now.format("%H:%M:%S")),
        Style::default().fg(MUTED),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(clock, cols[2]);
}
