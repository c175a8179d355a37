//! Small UI helpers: truncation, status icons, inner areas.

use ratatui::layout::Rect;

use crate::types::{AgentStatus, Status};

pub fn truncate_end(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return "...".into();
    }
    let keep: String = s.chars().take(max - 3).collect();
    format!("{keep}...")
}

pub fn status_icon(s: Status) -> &'static str {
    match s {
        Status::Healthy => "✔",
        Status::Warning => "!",
        Status::Critical => "✖",
    }
}

pub fn agent_dot(s: AgentStatus) -> &'static str {
    match s {
        AgentStatus::Online => "●",
        AgentStatus::Busy => "◐",
        AgentStatus::Offline => "○",
    }
}

// Area inside a 1-cell border
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// At most `w` x `h` cells in the bottom-right corner of `area`.
pub fn corner_rect(area: Rect, w: u16, h: u16) -> Rect {
    let width = w.min(area.width);
    let height = h.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_end("Analytics Agent", 20), "Analytics Agent");
        assert_eq!(truncate_end("Analytics Agent", 8), "Analy...");
        assert_eq!(truncate_end("Analytics Agent", 2), "...");
    }

    #[test]
    fn corner_rect_fits_inside() {
        let a = Rect::new(0, 0, 30, 10);
        assert_eq!(corner_rect(a, 20, 4), Rect::new(10, 6, 20, 4));
        assert_eq!(corner_rect(a, 50, 50), a);
    }
}
