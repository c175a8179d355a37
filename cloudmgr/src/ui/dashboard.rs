//! Landing page: counters, dashboard score, quick actions and service cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::actions::DASHBOARD_ACTIONS;
use crate::catalog::SERVICE_CARDS;
use crate::types::{DashboardMetrics, ScoreTier};
use crate::ui::theme::{tier_color, BRAND, MUTED};
use crate::ui::util::{inner, truncate_end};

// Key hint for each dashboard quick action, in DASHBOARD_ACTIONS order
const ACTION_KEYS: [char; 4] = ['n', 'b', 'l', 's'];

pub fn draw_dashboard(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    m: &DashboardMetrics,
    score: u8,
    cursor: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // counters
            Constraint::Length(3), // score
            Constraint::Min(6),    // actions + cards
        ])
        .split(area);

    draw_counters(f, rows[0], m);
    draw_score(f, rows[1], score);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(rows[2]);
    draw_quick_actions(f, bottom[0]);
    draw_service_cards(f, bottom[1], cursor);
}

fn draw_counters(f: &mut ratatui::Frame<'_>, area: Rect, m: &DashboardMetrics) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let cells = [
        ("Active Services", m.active_services.to_string()),
        ("Connected Users", m.connected_users.to_string()),
        ("System Health", format!("{}%", m.system_health.round() as u32)),
        ("Alerts", m.alerts.to_string()),
    ];
    for ((title, value), slot) in cells.into_iter().zip(cols.iter()) {
        let p = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(p, *slot);
    }
}

fn draw_score(f: &mut ratatui::Frame<'_>, area: Rect, score: u8) {
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("System Score"))
        .gauge_style(Style::default().fg(tier_color(ScoreTier::of(score))))
        .percent(u16::from(score.min(100)))
        .label(format!("{score}"));
    f.render_widget(g, area);
}

fn draw_quick_actions(f: &mut ratatui::Frame<'_>, area: Rect) {
    let lines: Vec<Line> = DASHBOARD_ACTIONS
        .iter()
        .zip(ACTION_KEYS)
        .map(|(a, k)| {
            Line::from(vec![
                Span::styled(format!("[{k}] "), Style::default().fg(BRAND)),
                Span::raw(a.name()),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Quick Actions"));
    f.render_widget(p, area);
}

fn draw_service_cards(f: &mut ratatui::Frame<'_>, area: Rect, cursor: usize) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Services (Enter to open)"),
        area,
    );
    let body = inner(area);
    if body.height == 0 {
        return;
    }
    let width = body.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = SERVICE_CARDS
        .iter()
        .enumerate()
        .take(body.height as usize)
        .map(|(i, card)| {
            let marker = if i == cursor { "▶ " } else { "  " };
            let mut style = if card.enabled {
                Style::default()
            } else {
                Style::default().fg(MUTED).add_modifier(Modifier::DIM)
            };
            if i == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let text = truncate_end(&format!("{} - {}", card.title, card.description), width);
            Line::from(vec![Span::raw(marker), Span::styled(text, style)])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}
