//! Property tests for the metrics engine invariants.
use cloudmgr::actions::Action;
use cloudmgr::engine::{compute_score, Engine, EngineConfig};
use cloudmgr::types::{Gauge, Thresholds};
use proptest::prelude::*;

fn gauges(values: &[f64]) -> Vec<Gauge> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Gauge::new(["a", "b", "c", "d", "e", "f"][i % 6], "g", "%", *v))
        .collect()
}

fn any_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

proptest! {
    #[test]
    fn ticks_keep_gauges_in_range(seed in any::<u64>(), jitter in 0.0f64..60.0, n in 1usize..300) {
        let cfg = EngineConfig { jitter, ..EngineConfig::default() };
        let mut e = Engine::with_seed(cfg, seed);
        for _ in 0..n {
            e.tick();
            for g in e.gauges() {
                prop_assert!((0.0..=100.0).contains(&g.value()), "{} = {}", g.id, g.value());
            }
        }
    }

    #[test]
    fn mixed_ticks_and_actions_keep_bounds(seed in any::<u64>(), acts in prop::collection::vec(any_action(), 0..50)) {
        let mut e = Engine::with_seed(EngineConfig::default(), seed);
        for a in acts {
            e.tick();
            e.tick_dashboard();
            e.apply_action(a);
            for g in e.gauges() {
                prop_assert!((0.0..=100.0).contains(&g.value()));
            }
            let h = e.dashboard().system_health;
            prop_assert!((0.0..=100.0).contains(&h));
            prop_assert!(e.system_score() <= 100);
            prop_assert!(e.dashboard_score() <= 100);
        }
    }

    #[test]
    fn score_is_order_independent(values in prop::collection::vec(0.0f64..=100.0, 1..6), rot in 0usize..6) {
        let t = Thresholds::default();
        let a = gauges(&values);
        let mut b = a.clone();
        let k = rot % b.len();
        b.rotate_left(k);
        b.reverse();
        prop_assert_eq!(compute_score(&a, &t), compute_score(&b, &t));
        prop_assert_eq!(compute_score(&a, &t), compute_score(&a, &t));
    }

    #[test]
    fn security_scan_improves_when_not_at_bound(seed in any::<u64>(), ticks in 0usize..20, pre in prop::collection::vec(any_action(), 0..4)) {
        let mut e = Engine::with_seed(EngineConfig::default(), seed);
        for a in pre {
            if a != Action::SecurityScan && a != Action::MonitorLogs {
                e.apply_action(a);
            }
        }
        for _ in 0..ticks {
            e.tick_dashboard();
        }
        let before = e.dashboard().clone();
        e.apply_action(Action::SecurityScan);
        let after = e.dashboard();
        if before.system_health < 100.0 {
            prop_assert!(after.system_health > before.system_health);
        }
        prop_assert!(after.system_health <= 100.0);
        if before.alerts > 0 {
            prop_assert!(after.alerts < before.alerts);
        }
    }
}

#[test]
fn all_healthy_low_values_score_high() {
    let t = Thresholds::default();
    assert_eq!(compute_score(&gauges(&[0.0, 0.0, 0.0]), &t), 100);
    assert_eq!(compute_score(&gauges(&[100.0, 100.0]), &t), 0);
    // warning tier: 70 -> 10, healthy 50 -> 50; avg 30
    assert_eq!(compute_score(&gauges(&[70.0, 50.0]), &t), 30);
}
