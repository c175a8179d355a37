//! Control center: jittered gauges with status, score badge and history, agents, static badges.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Sparkline},
};

use crate::actions::CONTROL_ACTIONS;
use crate::catalog::{ACTIVE_SERVICES, AGENTS, SECURITY_STATUS};
use crate::history::ScoreHistory;
use crate::types::{Gauge as Metric, ScoreTier, Thresholds};
use crate::ui::theme::{agent_color, badge_color, status_color, tier_color, BRAND, MUTED};
use crate::ui::util::{agent_dot, inner, status_icon, truncate_end};

const ACTION_KEYS: [char; 3] = ['r', 'b', 's'];

pub fn draw_control(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    gauges: &[Metric],
    thresholds: &Thresholds,
    score: u8,
    scores: &ScoreHistory,
    cursor: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(gauges.len() as u16 * 3 + 2),
            Constraint::Min(4),
            Constraint::Length(ACTIVE_SERVICES.len() as u16 + 2),
        ])
        .split(cols[0]);
    draw_metrics(f, left[0], gauges, thresholds, score);
    draw_score_history(f, left[1], scores);
    draw_badges(f, left[2], "Active Services", &ACTIVE_SERVICES);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(AGENTS.len() as u16 + 2),
            Constraint::Length(SECURITY_STATUS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(cols[1]);
    draw_agents(f, right[0], cursor);
    draw_badges(f, right[1], "Security Status", &SECURITY_STATUS);
    draw_quick_actions(f, right[2]);
}

fn draw_metrics(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    gauges: &[Metric],
    thresholds: &Thresholds,
    score: u8,
) {
    let title = Line::from(vec![
        Span::raw("System Metrics  "),
        Span::styled(
            format!(" Score: {score} "),
            Style::default()
                .bg(tier_color(ScoreTier::of(score)))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Block::default().borders(Borders::ALL).title(title), area);
    let body = inner(area);
    if body.height < 3 || gauges.is_empty() {
        return;
    }

    let n = (body.height / 3).min(gauges.len() as u16) as usize;
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Length(3)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    for (g, slot) in gauges.iter().zip(rows.iter()) {
        let status = g.status(thresholds);
        let color = status_color(status);
        let title = Line::from(vec![
            Span::styled(format!("{} ", status_icon(status)), Style::default().fg(color)),
            Span::raw(g.display_name),
            Span::styled(format!("  {}", status.label()), Style::default().fg(MUTED)),
        ]);
        let w = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .gauge_style(Style::default().fg(color))
            .ratio(g.value() / 100.0)
            .label(format!("{:.1}{}", g.value(), g.unit));
        f.render_widget(w, *slot);
    }
}

fn draw_score_history(f: &mut ratatui::Frame<'_>, area: Rect, scores: &ScoreHistory) {
    let data = scores.tail(area.width.saturating_sub(2) as usize);
    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Score history (now: {})",
            scores.last().unwrap_or(0)
        )))
        .data(&data)
        .max(100)
        .style(Style::default().fg(BRAND));
    f.render_widget(spark, area);
}

fn draw_badges(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, rows: &[(&str, &str)]) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|(name, badge)| {
            Line::from(vec![
                Span::raw(format!("{name:<22}")),
                Span::styled(format!(" {badge} "), Style::default().bg(badge_color(badge))),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(p, area);
}

fn draw_agents(f: &mut ratatui::Frame<'_>, area: Rect, cursor: usize) {
    let width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = AGENTS
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let row = truncate_end(&format!("[{}] {:<16} {}", a.initials(), a.name, a.last_seen), width.saturating_sub(2));
            let style = if i == cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{} ", agent_dot(a.status)), Style::default().fg(agent_color(a.status))),
                Span::styled(row, style),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("System Agents (Enter to restart)"),
    );
    f.render_widget(p, area);
}

fn draw_quick_actions(f: &mut ratatui::Frame<'_>, area: Rect) {
    let spans: Vec<Span> = CONTROL_ACTIONS
        .iter()
        .zip(ACTION_KEYS)
        .flat_map(|(a, k)| {
            [
                Span::styled(format!("[{k}] "), Style::default().fg(BRAND)),
                Span::raw(format!("{}  ", a.name())),
            ]
        })
        .collect();
    let p = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Quick Actions"));
    f.render_widget(p, area);
}
