//! Core records shared by the engine, the console state and the UI panels.

use serde::{Deserialize, Serialize};

/// A bounded percentage metric shown on the control center.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub id: &'static str,
    pub display_name: &'static str,
    pub unit: &'static str,
    // Only the engine writes this, always through `clamp_pct`.
    pub(crate) value: f64,
}

impl Gauge {
    pub fn new(id: &'static str, display_name: &'static str, unit: &'static str, value: f64) -> Self {
        Self {
            id,
            display_name,
            unit,
            value: clamp_pct(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self, t: &Thresholds) -> Status {
        t.classify(self.value)
    }
}

pub fn clamp_pct(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Healthy,
    Warning,
    Critical,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Healthy => "healthy",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }
}

/// Cut points for the status tiers. A value equal to a cut point stays in the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub warning_above: f64,
    pub critical_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_above: 60.0,
            critical_above: 80.0,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, v: f64) -> Status {
        if v > self.critical_above {
            Status::Critical
        } else if v > self.warning_above {
            Status::Warning
        } else {
            Status::Healthy
        }
    }
}

/// Colour tier for a score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        if score > 80 {
            ScoreTier::Good
        } else if score > 60 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}

/// Landing page counters.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub active_services: u32,
    pub connected_users: u32,
    pub system_health: f64,
    pub alerts: u32,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            active_services: 12,
            connected_users: 847,
            system_health: 98.0,
            alerts: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Online,
    Offline,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub status: AgentStatus,
    pub last_seen: &'static str,
}

impl Agent {
    /// "Security Agent" -> "SA"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub id: u32,
    pub series: &'static str,
    pub vcpus: &'static str,
    pub memory: &'static str,
    pub description: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Co2 {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub location: &'static str,
    pub co2: Option<Co2>,
}

impl Region {
    pub fn label(&self) -> String {
        match self.co2 {
            Some(Co2::Low) => format!("{} ({}) - Low CO2", self.id, self.location),
            Some(Co2::High) => format!("{} ({}) - High CO2", self.id, self.location),
            None => format!("{} ({})", self.id, self.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}
