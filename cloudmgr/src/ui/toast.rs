//! Notice popup in the bottom-right corner; dims while fading out.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::notify::{Notice, NoticeKind, Phase};
use crate::ui::theme::notice_color;
use crate::ui::util::corner_rect;

pub fn draw_toast(f: &mut ratatui::Frame<'_>, area: Rect, notice: &Notice, phase: Phase) {
    let rect = corner_rect(area, 48, 5);
    let icon = match notice.kind {
        NoticeKind::Success => "✔",
        NoticeKind::Error => "✖",
    };
    let mut border = Style::default().fg(notice_color(notice.kind));
    let mut body = Style::default();
    if phase == Phase::Fading {
        border = border.add_modifier(Modifier::DIM);
        body = body.add_modifier(Modifier::DIM);
    }
    let title = Line::from(vec![
        Span::styled(format!(" {icon} "), border),
        Span::styled(notice.title.clone(), body.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ]);
    let p = Paragraph::new(Span::styled(notice.message.clone(), body))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border).title(title));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
