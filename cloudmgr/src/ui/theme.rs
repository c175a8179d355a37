//! Shared UI theme constants.

use ratatui::style::Color;

use crate::notify::NoticeKind;
use crate::types::{AgentStatus, ScoreTier, Status};

pub const BRAND: Color = Color::Rgb(66, 133, 244);
pub const MUTED: Color = Color::Rgb(170, 170, 180);

// Badge colours (same hues as the web console)
pub const GOOD: Color = Color::Rgb(22, 163, 74);
pub const FAIR: Color = Color::Rgb(234, 179, 8);
pub const POOR: Color = Color::Rgb(239, 68, 68);

pub fn status_color(s: Status) -> Color {
    match s {
        Status::Healthy => GOOD,
        Status::Warning => FAIR,
        Status::Critical => POOR,
    }
}

pub fn tier_color(t: ScoreTier) -> Color {
    match t {
        ScoreTier::Good => GOOD,
        ScoreTier::Fair => FAIR,
        ScoreTier::Poor => POOR,
    }
}

pub fn agent_color(s: AgentStatus) -> Color {
    match s {
        AgentStatus::Online => GOOD,
        AgentStatus::Busy => FAIR,
        AgentStatus::Offline => POOR,
    }
}

pub fn notice_color(k: NoticeKind) -> Color {
    match k {
        NoticeKind::Success => GOOD,
        NoticeKind::Error => POOR,
    }
}

/// Badge label colour for the static service/security rows.
pub fn badge_color(label: &str) -> Color {
    match label {
        "Scaling" | "Monitoring" => FAIR,
        _ => GOOD,
    }
}
