//! Console state owned by the app: engine, router, wizard, notices and page cursors.
//! Every user interaction and timer expiry is one method here.

use std::time::Instant;

use crate::actions::Action;
use crate::catalog::{AGENTS, MACHINE_CONFIGS, SERVICE_CARDS};
use crate::config::Settings;
use crate::engine::Engine;
use crate::error::WizardError;
use crate::history::ScoreHistory;
use crate::notify::{Notice, NoticeKind, Notifier, Phase};
use crate::router::{Route, Router};
use crate::schedule::TimerEvent;
use crate::types::MachineConfig;
use crate::wizard::{selection_message, Wizard};

/// Row under the cursor on each page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub dashboard: usize,
    pub control: usize,
    pub configuration: usize,
}

pub struct Console {
    pub engine: Engine,
    router: Router,
    pub wizard: Wizard,
    notifier: Notifier,
    scores: ScoreHistory,
    pub cursors: Cursors,
}

impl Console {
    pub fn new(settings: &Settings, initial: Route, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(s) => Engine::with_seed(settings.engine(), s),
            None => Engine::new(settings.engine()),
        };
        let mut scores = ScoreHistory::new(settings.score_history);
        scores.push(engine.system_score());
        Self {
            engine,
            router: Router::new(initial),
            wizard: Wizard::default(),
            notifier: Notifier::new(settings.toast_visible(), settings.toast_fade()),
            scores,
            cursors: Cursors::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.router.active()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&mut self, to: Route) -> bool {
        self.router.navigate(to)
    }

    /// Apply a timer tick. Ticks raised for a page that is no longer shown are dropped.
    pub fn on_timer(&mut self, ev: TimerEvent) -> bool {
        let TimerEvent::Tick(route) = ev;
        if route != self.route() {
            tracing::trace!(%route, active = %self.route(), "stale tick dropped");
            return false;
        }
        match route {
            Route::Dashboard => self.engine.tick_dashboard(),
            Route::Control => {
                self.engine.tick();
                self.scores.push(self.engine.system_score());
            }
            Route::Configuration => return false,
        }
        true
    }

    pub fn perform_action(&mut self, action: Action, now: Instant) {
        self.engine.apply_action(action);
        if action.effect().gauges != 0.0 {
            self.scores.push(self.engine.system_score());
        }
        self.notifier
            .notify(action.name(), action.success_message(), NoticeKind::Success, now);
    }

    /// Agents have no lifecycle; a restart is acknowledged and nothing else changes.
    pub fn restart_agent(&mut self, idx: usize, now: Instant) {
        let Some(agent) = AGENTS.get(idx) else {
            return;
        };
        self.notifier.notify(
            format!("Restart {}", agent.name),
            format!("Successfully restart {}", agent.name),
            NoticeKind::Success,
            now,
        );
    }

    /// Enabled cards lead to the configuration wizard; disabled ones ignore the click.
    pub fn open_service(&mut self, idx: usize) -> bool {
        match SERVICE_CARDS.get(idx) {
            Some(card) if card.enabled => {
                self.navigate(Route::Configuration);
                true
            }
            _ => false,
        }
    }

    pub fn select_machine(&mut self, id: u32, now: Instant) -> Result<&'static MachineConfig, WizardError> {
        let cfg = self.wizard.select(id)?;
        self.notifier
            .notify("Configuration Updated", selection_message(cfg), NoticeKind::Success, now);
        Ok(cfg)
    }

    /// Without a selection this only raises the rejection notice.
    pub fn create_instance(&mut self, now: Instant) -> Result<&'static MachineConfig, WizardError> {
        match self.wizard.create() {
            Ok(cfg) => {
                let s = self.wizard.summary();
                self.notifier.notify(
                    "Instance Created Successfully!",
                    format!(
                        "{} series ({} vCPUs, {} RAM) in {} zone {}",
                        cfg.series, cfg.vcpus, cfg.memory, s.region, s.zone
                    ),
                    NoticeKind::Success,
                    now,
                );
                Ok(cfg)
            }
            Err(e) => {
                self.notifier.notify(
                    "No Configuration Selected",
                    "Please select a machine configuration first.",
                    NoticeKind::Error,
                    now,
                );
                Err(e)
            }
        }
    }

    pub fn cancel_wizard(&mut self, now: Instant) {
        self.wizard.cancel();
        self.cursors.configuration = 0;
        self.notifier.notify(
            "Configuration Cancelled",
            "Selections have been cleared",
            NoticeKind::Success,
            now,
        );
    }

    pub fn notice(&self, now: Instant) -> Option<(&Notice, Phase)> {
        self.notifier.current(now)
    }

    pub fn notices_raised(&self) -> u64 {
        self.notifier.raised()
    }

    pub fn dismiss_notice(&mut self) {
        self.notifier.dismiss();
    }

    pub fn prune_notice(&mut self, now: Instant) {
        self.notifier.prune(now);
    }

    pub fn scores(&self) -> &ScoreHistory {
        &self.scores
    }

    fn cursor_len(route: Route) -> usize {
        match route {
            Route::Dashboard => SERVICE_CARDS.len(),
            Route::Control => AGENTS.len(),
            Route::Configuration => MACHINE_CONFIGS.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        match self.route() {
            Route::Dashboard => self.cursors.dashboard,
            Route::Control => self.cursors.control,
            Route::Configuration => self.cursors.configuration,
        }
    }

    /// Move the active page's cursor, clamped to its list.
    pub fn move_cursor(&mut self, delta: isize) {
        let route = self.route();
        let max = Self::cursor_len(route).saturating_sub(1);
        let slot = match route {
            Route::Dashboard => &mut self.cursors.dashboard,
            Route::Control => &mut self.cursors.control,
            Route::Configuration => &mut self.cursors.configuration,
        };
        *slot = slot.saturating_add_signed(delta).min(max);
    }

    /// Enter on the row under the cursor.
    pub fn activate(&mut self, now: Instant) {
        let at = self.cursor();
        match self.route() {
            Route::Dashboard => {
                self.open_service(at);
            }
            Route::Control => self.restart_agent(at, now),
            Route::Configuration => {
                if let Some(cfg) = Wizard::config_at(at) {
                    self.select_machine(cfg.id, now).ok();
                }
            }
        }
    }
}
