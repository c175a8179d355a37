//! Named quick actions and their fixed effects on the engine state.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DeployNewService,
    CreateBackup,
    MonitorLogs,
    SecurityScan,
    RefreshAll,
}

/// Deltas an action applies. Health is capped at 100, counters floor at 0,
/// gauge deltas apply to every gauge and are clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Effect {
    pub active_services: i32,
    pub health: f64,
    pub alerts: i32,
    pub gauges: f64,
}

pub const DASHBOARD_ACTIONS: [Action; 4] = [
    Action::DeployNewService,
    Action::CreateBackup,
    Action::MonitorLogs,
    Action::SecurityScan,
];

pub const CONTROL_ACTIONS: [Action; 3] = [
    Action::RefreshAll,
    Action::CreateBackup,
    Action::SecurityScan,
];

impl Action {
    pub const ALL: [Action; 5] = [
        Action::DeployNewService,
        Action::CreateBackup,
        Action::MonitorLogs,
        Action::SecurityScan,
        Action::RefreshAll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::DeployNewService => "Deploy New Service",
            Action::CreateBackup => "Create Backup",
            Action::MonitorLogs => "Monitor Logs",
            Action::SecurityScan => "Security Scan",
            Action::RefreshAll => "Refresh All",
        }
    }

    pub fn effect(self) -> Effect {
        match self {
            Action::DeployNewService => Effect {
                active_services: 1,
                health: 2.0,
                ..Effect::default()
            },
            Action::CreateBackup => Effect {
                health: 1.0,
                ..Effect::default()
            },
            Action::MonitorLogs => Effect {
                alerts: -1,
                ..Effect::default()
            },
            Action::SecurityScan => Effect {
                health: 3.0,
                alerts: -2,
                ..Effect::default()
            },
            Action::RefreshAll => Effect {
                health: 5.0,
                gauges: -10.0,
                ..Effect::default()
            },
        }
    }

    pub fn success_message(self) -> String {
        format!("Successfully executed {}", self.name().to_lowercase())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}
