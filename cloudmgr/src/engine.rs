//! Synthetic metrics engine: jittered gauges, dashboard counters, and the two score paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::actions::Action;
use crate::catalog::initial_gauges;
use crate::types::{clamp_pct, DashboardMetrics, Gauge, Status, Thresholds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Symmetric bound for the per-tick gauge delta.
    pub jitter: f64,
    pub thresholds: Thresholds,
    /// Lower bound the dashboard tick keeps system health above.
    pub health_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jitter: 5.0,
            thresholds: Thresholds::default(),
            health_floor: 90.0,
        }
    }
}

pub struct Engine {
    gauges: Vec<Gauge>,
    dashboard: DashboardMetrics,
    cfg: EngineConfig,
    rng: StdRng,
}

impl Engine {
    pub fn new(cfg: EngineConfig) -> Self {
        Self::with_rng(cfg, StdRng::from_entropy())
    }

    /// Same seed, same sequence of ticks.
    pub fn with_seed(cfg: EngineConfig, seed: u64) -> Self {
        Self::with_rng(cfg, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cfg: EngineConfig, rng: StdRng) -> Self {
        Self {
            gauges: initial_gauges(),
            dashboard: DashboardMetrics::default(),
            cfg,
            rng,
        }
    }

    pub fn gauges(&self) -> &[Gauge] {
        &self.gauges
    }

    pub fn gauge(&self, id: &str) -> Option<&Gauge> {
        self.gauges.iter().find(|g| g.id == id)
    }

    pub fn dashboard(&self) -> &DashboardMetrics {
        &self.dashboard
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.cfg.thresholds
    }

    /// Perturb every gauge by a uniform delta in [-jitter, jitter], then clamp.
    pub fn tick(&mut self) {
        let j = self.cfg.jitter;
        for g in self.gauges.iter_mut() {
            let delta: f64 = self.rng.gen_range(-j..=j);
            g.value = clamp_pct(g.value + delta);
        }
    }

    /// Landing page drift: users wander by a few, health stays within [health_floor, 100].
    pub fn tick_dashboard(&mut self) {
        let users_delta: i64 = self.rng.gen_range(-5..=4);
        let users = i64::from(self.dashboard.connected_users) + users_delta;
        self.dashboard.connected_users = users.clamp(0, i64::from(u32::MAX)) as u32;

        let health_delta: f64 = self.rng.gen_range(-1.0..=1.0);
        self.dashboard.system_health =
            (self.dashboard.system_health + health_delta).clamp(self.cfg.health_floor, 100.0);
    }

    pub fn apply_action(&mut self, action: Action) {
        let fx = action.effect();
        let d = &mut self.dashboard;
        d.active_services = d.active_services.saturating_add_signed(fx.active_services);
        d.alerts = d.alerts.saturating_add_signed(fx.alerts);
        d.system_health = clamp_pct(d.system_health + fx.health);
        if fx.gauges != 0.0 {
            for g in self.gauges.iter_mut() {
                g.value = clamp_pct(g.value + fx.gauges);
            }
        }
        tracing::debug!(action = action.name(), health = d.system_health, alerts = d.alerts, "action applied");
    }

    pub fn system_score(&self) -> u8 {
        compute_score(&self.gauges, &self.cfg.thresholds)
    }

    pub fn dashboard_score(&self) -> u8 {
        dashboard_score(&self.dashboard)
    }
}

fn contribution(value: f64, status: Status) -> f64 {
    let raw = match status {
        Status::Healthy => 100.0 - value,
        Status::Warning => 80.0 - value,
        Status::Critical => 60.0 - value,
    };
    raw.max(0.0)
}

/// Average of per-gauge contributions, rounded. Empty input scores 0.
pub fn compute_score(gauges: &[Gauge], t: &Thresholds) -> u8 {
    if gauges.is_empty() {
        return 0;
    }
    let mut parts: Vec<f64> = gauges
        .iter()
        .map(|g| contribution(g.value(), g.status(t)))
        .collect();
    // Fixed summation order keeps the result independent of gauge order.
    parts.sort_by(f64::total_cmp);
    let avg = parts.iter().sum::<f64>() / parts.len() as f64;
    avg.round().clamp(0.0, 100.0) as u8
}

pub fn dashboard_score(m: &DashboardMetrics) -> u8 {
    (clamp_pct(m.system_health) * 0.85).round() as u8
}
