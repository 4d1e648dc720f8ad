//! Automatic collection trigger integration tests
//!
//! Verifies that young-generation pressure arms the automatic minor
//! collection, that new transitions debounce it, and that firing it
//! relieves the pressure.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sim_engine::Simulator;
use sim_types::{HeapConfig, Severity};

fn simulator() -> Simulator<StdRng> {
    Simulator::with_rng(HeapConfig::new(60), StdRng::seed_from_u64(3))
}

#[test]
fn pressure_at_the_young_limit_arms_the_trigger() {
    let mut sim = simulator();
    assert!(!sim.auto_collect_pending());

    // Young limit for a 60-object heap is 20.
    sim.allocate_batch(20).unwrap();
    assert!(sim.auto_collect_pending());

    let warned = sim
        .event_log()
        .entries()
        .any(|e| e.message.contains("under pressure"));
    assert!(warned);
}

#[test]
fn twentieth_single_allocation_triggers_the_pass() {
    let mut sim = simulator();
    for _ in 0..19 {
        sim.allocate().unwrap();
        assert!(!sim.auto_collect_pending());
    }
    sim.allocate().unwrap();
    assert!(sim.auto_collect_pending());

    sim.run_pending().unwrap().unwrap();
    assert!(sim.snapshot().young_count < 20);
}

#[test]
fn below_the_limit_nothing_is_armed() {
    let mut sim = simulator();
    sim.allocate_batch(19).unwrap();
    assert!(!sim.auto_collect_pending());
    assert_eq!(sim.run_pending().unwrap(), None);
}

#[test]
fn firing_the_pending_pass_relieves_pressure() {
    let mut sim = simulator();
    sim.allocate_batch(20).unwrap();

    let summary = sim.run_pending().unwrap().unwrap();
    assert_eq!(summary.reclaimed + sim.snapshot().young_count + summary.promoted, 20);
    assert!(!sim.auto_collect_pending());

    let triggered = sim
        .event_log()
        .entries()
        .any(|e| e.severity == Severity::Action && e.message.contains("automatic Minor GC"));
    assert!(triggered);
}

#[test]
fn a_new_transition_debounces_the_pending_pass() {
    let mut sim = simulator();
    sim.allocate_batch(20).unwrap();
    assert!(sim.auto_collect_pending());

    // A stack operation counts as activity: the pending pass is pushed back,
    // then re-armed because the pressure is still there.
    sim.call_method().unwrap();
    assert!(sim.auto_collect_pending());

    // A manual collection also disarms it, and this time the pressure is
    // gone afterwards.
    sim.run_pending().unwrap();
    assert!(!sim.auto_collect_pending());
}

#[test]
fn each_pressure_episode_fires_at_most_one_pass() {
    let mut sim = simulator();
    sim.allocate_batch(20).unwrap();

    assert!(sim.run_pending().unwrap().is_some());
    assert_eq!(sim.run_pending().unwrap(), None);
}
