//! Settings file: tick periods, jitter, thresholds and notice timing.
//! Stored under XDG config dir: $XDG_CONFIG_HOME/cloudmgr/settings.json (fallback ~/.config/cloudmgr/settings.json)

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::engine::EngineConfig;
use crate::error::ConfigError;
use crate::schedule::Periods;
use crate::types::Thresholds;

// A delta wider than the whole gauge range only ever lands on a bound.
const MAX_JITTER: f64 = 100.0;
const MAX_SCORE_HISTORY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub jitter: f64,
    pub thresholds: Thresholds,
    pub health_floor: f64,
    pub dashboard_period_ms: u64,
    pub control_period_ms: u64,
    pub toast_visible_ms: u64,
    pub toast_fade_ms: u64,
    /// Number of score samples kept for the control center sparkline.
    pub score_history: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            jitter: engine.jitter,
            thresholds: engine.thresholds,
            health_floor: engine.health_floor,
            dashboard_period_ms: 3000,
            control_period_ms: 2000,
            toast_visible_ms: 4000,
            toast_fade_ms: 300,
            score_history: 120,
        }
    }
}

impl Settings {
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            jitter: self.jitter,
            thresholds: self.thresholds,
            health_floor: self.health_floor,
        }
    }

    pub fn periods(&self) -> Periods {
        Periods {
            dashboard: Duration::from_millis(self.dashboard_period_ms),
            control: Duration::from_millis(self.control_period_ms),
        }
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(ConfigError::Invalid(format!(
                "jitter must be within 0..={MAX_JITTER}, got {}",
                self.jitter
            )));
        }
        let t = &self.thresholds;
        if !(0.0..=100.0).contains(&t.warning_above)
            || !(0.0..=100.0).contains(&t.critical_above)
            || t.warning_above > t.critical_above
        {
            return Err(ConfigError::Invalid(format!(
                "thresholds must satisfy 0 <= warning_above <= critical_above <= 100, got {} / {}",
                t.warning_above, t.critical_above
            )));
        }
        if !(0.0..=100.0).contains(&self.health_floor) {
            return Err(ConfigError::Invalid(format!(
                "health_floor must be within 0..=100, got {}",
                self.health_floor
            )));
        }
        if self.dashboard_period_ms == 0 || self.control_period_ms == 0 {
            return Err(ConfigError::Invalid("tick periods must be non-zero".into()));
        }
        if self.score_history > MAX_SCORE_HISTORY {
            return Err(ConfigError::Invalid(format!(
                "score_history must be at most {MAX_SCORE_HISTORY}, got {}",
                self.score_history
            )));
        }
        Ok(())
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("cloudmgr")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudmgr")
    }
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// A missing file yields defaults; an unreadable or malformed one is an error.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let settings: Settings = serde_json::from_str(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Load, falling back to defaults (with a warning) when the file is bad.
pub fn load_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            Settings::default()
        }
    }
}
