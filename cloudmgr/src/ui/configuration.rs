//! VM wizard: tabs, region/zone, machine series table, summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::catalog::MACHINE_CONFIGS;
use crate::wizard::{Summary, Wizard, WizardTab};
use crate::ui::theme::{BRAND, MUTED};

const COLS: [Constraint; 5] = [
    Constraint::Length(3),  // selected
    Constraint::Length(6),  // series
    Constraint::Length(11), // vCPUs
    Constraint::Length(14), // memory
    Constraint::Min(10),    // description
];

pub fn draw_configuration(f: &mut ratatui::Frame<'_>, area: Rect, w: &Wizard, cursor: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(cols[0]);

    let titles: Vec<Line> = WizardTab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let selected_tab = WizardTab::ALL.iter().position(|t| *t == w.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Machine Configuration  ([ / ] to switch)"))
        .select(selected_tab)
        .highlight_style(Style::default().fg(BRAND).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, left[0]);

    match w.tab {
        WizardTab::Machine => draw_machine_tab(f, left[1], w, cursor),
        WizardTab::Storage => draw_placeholder(
            f,
            left[1],
            "Operating System & Storage",
            "OS and storage configuration options will be available here.",
        ),
        WizardTab::Networking => draw_placeholder(
            f,
            left[1],
            "Networking Configuration",
            "Network settings and firewall rules will be configured here.",
        ),
        WizardTab::Advanced => draw_placeholder(
            f,
            left[1],
            "Advanced Settings",
            "Advanced configuration options will be available here.",
        ),
    }

    draw_summary(f, cols[1], &w.summary());
}

fn draw_machine_tab(f: &mut ratatui::Frame<'_>, area: Rect, w: &Wizard, cursor: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    let region = w.region().map_or_else(|| "-".to_string(), |r| r.label());
    let zone = w.zone().unwrap_or("-");
    let rz = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("[g] Region: ", Style::default().fg(BRAND)),
            Span::raw(region),
        ]),
        Line::from(vec![
            Span::styled("[z] Zone:   ", Style::default().fg(BRAND)),
            Span::raw(zone),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Region & Zone"));
    f.render_widget(rz, rows[0]);

    let selected = w.selected().map(|c| c.id);
    let body = MACHINE_CONFIGS.iter().enumerate().map(|(i, c)| {
        let mark = if Some(c.id) == selected { "(●)" } else { "( )" };
        let mut style = Style::default();
        if Some(c.id) == selected {
            style = style.fg(BRAND);
        }
        if i == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Row::new(vec![
            Cell::from(mark),
            Cell::from(c.series),
            Cell::from(c.vcpus),
            Cell::from(c.memory),
            Cell::from(c.description).style(Style::default().fg(MUTED)),
        ])
        .style(style)
    });
    let header = Row::new(vec!["", "Series", "vCPUs", "Memory", "Description"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(body, COLS)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Size & Resources (Enter to select)"),
        );
    f.render_widget(table, rows[1]);
}

fn draw_placeholder(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, text: &str) {
    let p = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(MUTED)))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(p, area);
}

pub fn summary_lines(s: &Summary) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled("Region: ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(s.region.clone())]),
        Line::from(vec![Span::styled("Zone:   ", Style::default().add_modifier(Modifier::BOLD)), Span::raw(s.zone.clone())]),
        Line::from(""),
    ];
    if let Some(c) = s.config {
        lines.push(Line::from(Span::styled(
            "Selected Configuration:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("{} series", c.series)));
        lines.push(Line::from(format!("{} vCPUs, {} RAM", c.vcpus, c.memory)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[c] ", Style::default().fg(BRAND)),
        Span::raw("Create   "),
        Span::styled("[x] ", Style::default().fg(BRAND)),
        Span::raw("Cancel"),
    ]));
    lines
}

fn draw_summary(f: &mut ratatui::Frame<'_>, area: Rect, s: &Summary) {
    let p = Paragraph::new(summary_lines(s))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn summary_lists_only_the_selected_config() {
        let mut w = Wizard::default();
        w.select(4).unwrap();
        let t = text(&summary_lines(&w.summary()));
        assert!(t.contains("C4A series"));
        for other in ["C3D", "N2D", "E2 ", "N4 ", "T2D"] {
            assert!(!t.contains(other), "unexpected {other} in summary:\n{t}");
        }
    }

    #[test]
    fn summary_without_selection() {
        let t = text(&summary_lines(&Wizard::default().summary()));
        assert!(t.contains("Region: -"));
        assert!(!t.contains("Selected Configuration"));
    }
}
