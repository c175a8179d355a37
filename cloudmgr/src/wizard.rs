//! VM configuration wizard: region, zone, machine series, and the create guard.

use crate::catalog::{machine_config, MACHINE_CONFIGS, REGIONS, ZONES};
use crate::error::WizardError;
use crate::types::{MachineConfig, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardTab {
    #[default]
    Machine,
    Storage,
    Networking,
    Advanced,
}

impl WizardTab {
    pub const ALL: [WizardTab; 4] = [
        WizardTab::Machine,
        WizardTab::Storage,
        WizardTab::Networking,
        WizardTab::Advanced,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardTab::Machine => "1. Machine Configuration",
            WizardTab::Storage => "2. OS & Storage",
            WizardTab::Networking => "3. Networking",
            WizardTab::Advanced => "4. Advanced",
        }
    }

    fn index(self) -> usize {
        WizardTab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        WizardTab::ALL[(self.index() + 1) % WizardTab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = WizardTab::ALL.len();
        WizardTab::ALL[(self.index() + n - 1) % n]
    }
}

/// What the summary panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub region: String,
    pub zone: String,
    pub config: Option<&'static MachineConfig>,
}

#[derive(Debug, Clone, Default)]
pub struct Wizard {
    pub tab: WizardTab,
    region: Option<usize>,
    zone: Option<usize>,
    selected: Option<u32>,
}

impl Wizard {
    pub fn region(&self) -> Option<&'static Region> {
        self.region.map(|i| &REGIONS[i])
    }

    pub fn zone(&self) -> Option<&'static str> {
        self.zone.map(|i| ZONES[i])
    }

    pub fn cycle_region(&mut self) -> &'static Region {
        let i = self.region.map_or(0, |i| (i + 1) % REGIONS.len());
        self.region = Some(i);
        &REGIONS[i]
    }

    pub fn cycle_zone(&mut self) -> &'static str {
        let i = self.zone.map_or(0, |i| (i + 1) % ZONES.len());
        self.zone = Some(i);
        ZONES[i]
    }

    pub fn selected(&self) -> Option<&'static MachineConfig> {
        self.selected.and_then(machine_config)
    }

    pub fn select(&mut self, id: u32) -> Result<&'static MachineConfig, WizardError> {
        let cfg = machine_config(id).ok_or(WizardError::UnknownConfig(id))?;
        self.selected = Some(cfg.id);
        Ok(cfg)
    }

    /// The machine row at a table position, for cursor-driven selection.
    pub fn config_at(row: usize) -> Option<&'static MachineConfig> {
        MACHINE_CONFIGS.get(row)
    }

    /// Succeeds only with a selection; never mutates the wizard.
    pub fn create(&self) -> Result<&'static MachineConfig, WizardError> {
        self.selected().ok_or(WizardError::NoSelection)
    }

    pub fn cancel(&mut self) {
        self.region = None;
        self.zone = None;
        self.selected = None;
    }

    pub fn summary(&self) -> Summary {
        Summary {
            region: self.region().map_or_else(|| "-".to_string(), |r| r.id.to_string()),
            zone: self.zone().unwrap_or("-").to_string(),
            config: self.selected(),
        }
    }
}

pub fn selection_message(c: &MachineConfig) -> String {
    format!(
        "Selected {} series with {} vCPUs and {} RAM. Score: {}",
        c.series, c.vcpus, c.memory, c.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_uses_dashes() {
        let s = Wizard::default().summary();
        assert_eq!(s.region, "-");
        assert_eq!(s.zone, "-");
        assert!(s.config.is_none());
    }

    #[test]
    fn create_requires_selection() {
        let w = Wizard::default();
        assert_eq!(w.create(), Err(WizardError::NoSelection));
    }

    #[test]
    fn selection_is_exact() {
        let mut w = Wizard::default();
        w.select(3).unwrap();
        w.select(5).unwrap();
        let s = w.summary();
        assert_eq!(s.config.map(|c| c.series), Some("N4"));
        assert_eq!(w.create().map(|c| c.id), Ok(5));
    }

    #[test]
    fn unknown_config_keeps_previous() {
        let mut w = Wizard::default();
        w.select(2).unwrap();
        assert_eq!(w.select(42), Err(WizardError::UnknownConfig(42)));
        assert_eq!(w.selected().map(|c| c.id), Some(2));
    }

    #[test]
    fn region_and_zone_cycle() {
        let mut w = Wizard::default();
        assert_eq!(w.cycle_region().id, "us-east1");
        assert_eq!(w.cycle_region().id, "europe-north1");
        for _ in 0..REGIONS.len() {
            w.cycle_region();
        }
        assert_eq!(w.region().map(|r| r.id), Some("europe-north1"));
        assert_eq!(w.cycle_zone(), "1-a");
        assert_eq!(w.cycle_zone(), "1-b");
        assert_eq!(w.summary().zone, "1-b");
    }

    #[test]
    fn cancel_clears_everything() {
        let mut w = Wizard::default();
        w.cycle_region();
        w.cycle_zone();
        w.select(1).unwrap();
        w.cancel();
        assert_eq!(w.summary(), Wizard::default().summary());
    }

    #[test]
    fn tabs_wrap() {
        assert_eq!(WizardTab::Advanced.next(), WizardTab::Machine);
        assert_eq!(WizardTab::Machine.prev(), WizardTab::Advanced);
    }
}
