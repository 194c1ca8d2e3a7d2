// Host-side tests for the comet spawner and its timeline.

use dream_core::comets::*;
use dream_core::timeline::Timeline;
use std::collections::HashSet;

/// Step the spawner in 50 ms frames and collect everything it emits.
fn run_for(spawner: &mut CometSpawner, from_ms: f64, to_ms: f64) -> Vec<(f64, CometEvent)> {
    let mut out = Vec::new();
    let mut t = from_ms;
    while t <= to_ms {
        for ev in spawner.advance(t) {
            out.push((t, ev));
        }
        t += 50.0;
    }
    out
}

#[test]
fn timeline_drains_in_time_order() {
    let mut tl = Timeline::new();
    tl.schedule(30.0, "c");
    tl.schedule(10.0, "a");
    tl.schedule(10.0, "b");
    tl.schedule(99.0, "late");
    assert_eq!(tl.next_due(), Some(10.0));
    let due: Vec<_> = tl.drain_due(50.0).into_iter().map(|(_, t)| t).collect();
    assert_eq!(due, ["a", "b", "c"]);
    assert_eq!(tl.len(), 1);
    assert!(tl.drain_due(98.0).is_empty());
}

#[test]
fn timeline_cancel_and_clear() {
    let mut tl = Timeline::new();
    let a = tl.schedule(5.0, 1);
    tl.schedule(6.0, 2);
    assert!(tl.cancel(a));
    assert!(!tl.cancel(a));
    assert_eq!(tl.drain_due(10.0).len(), 1);
    tl.schedule(20.0, 3);
    tl.clear();
    assert!(tl.is_empty());
    assert_eq!(tl.next_due(), None);
}

#[test]
fn nothing_happens_before_start() {
    let mut s = CometSpawner::new(3);
    assert!(!s.is_running());
    assert!(s.advance(1e9).is_empty());
}

#[test]
fn first_comet_within_initial_window() {
    for seed in 0..20 {
        let mut s = CometSpawner::new(seed);
        s.start(0.0);
        assert!(s.is_running());
        let events = run_for(&mut s, 0.0, 8_050.0);
        let first = events
            .iter()
            .find(|(_, e)| matches!(e, CometEvent::Spawned(_)))
            .map(|(t, _)| *t);
        assert!(first.is_some(), "seed {seed}");
    }
}

#[test]
fn comet_fields_in_range() {
    let mut s = CometSpawner::new(11);
    s.start(0.0);
    for (_, ev) in run_for(&mut s, 0.0, 600_000.0) {
        if let CometEvent::Spawned(c) = ev {
            assert!((5.0..55.0).contains(&c.top));
            assert!((60.0..95.0).contains(&c.left));
            assert!((80.0..240.0).contains(&c.width));
            assert!((1000.0..2800.0).contains(&c.duration_ms));
        }
    }
}

#[test]
fn comet_removed_after_duration_plus_cleanup() {
    let mut s = CometSpawner::new(5);
    s.start(0.0);
    let mut spawned_at = None;
    let mut t = 0.0;
    while spawned_at.is_none() {
        for ev in s.advance(t) {
            if let CometEvent::Spawned(c) = ev {
                spawned_at = Some((t, c));
            }
        }
        t += 1.0;
    }
    let (at, comet) = spawned_at.unwrap();
    assert!(s.comets().iter().any(|c| c.id == comet.id));

    let removal = at + comet.duration_ms + 260.0;
    let mut removed_at = None;
    let mut t = at;
    while t <= removal + 5.0 {
        for ev in s.advance(t) {
            if ev == CometEvent::Removed(comet.id) {
                removed_at = Some(t);
            }
        }
        t += 1.0;
    }
    let removed_at = removed_at.expect("comet was not removed");
    assert!(removed_at >= removal - 1.0 && removed_at <= removal + 1.0);
    assert!(!s.comets().iter().any(|c| c.id == comet.id));
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut s = CometSpawner::new(42);
    s.start(0.0);
    let mut seen = HashSet::new();
    let mut last = 0;
    for (_, ev) in run_for(&mut s, 0.0, 1_200_000.0) {
        if let CometEvent::Spawned(c) = ev {
            assert!(seen.insert(c.id), "duplicate id {}", c.id);
            assert!(c.id > last);
            last = c.id;
        }
    }
    assert!(seen.len() > 40);
}

#[test]
fn recurring_period_between_12_and_22_seconds() {
    let mut s = CometSpawner::new(8);
    s.start(0.0);
    let spawns: Vec<f64> = run_for(&mut s, 0.0, 300_000.0)
        .into_iter()
        .filter_map(|(t, e)| matches!(e, CometEvent::Spawned(_)).then_some(t))
        .collect();
    // at most two initial spawns plus one cluster per recurring tick
    assert!(spawns.len() >= 300_000 / 22_000);
    assert!(spawns.len() <= 2 * (300_000 / 12_000) + 2);
}

#[test]
fn stop_cancels_everything() {
    let mut s = CometSpawner::new(9);
    s.start(0.0);
    run_for(&mut s, 0.0, 60_000.0);
    assert!(s.pending() > 0);
    s.stop();
    assert!(!s.is_running());
    assert_eq!(s.pending(), 0);
    assert!(s.comets().is_empty());
    assert!(s.advance(1e9).is_empty());
}

#[test]
fn start_twice_is_a_no_op() {
    let mut s = CometSpawner::new(2);
    s.start(0.0);
    let pending = s.pending();
    s.start(100.0);
    assert_eq!(s.pending(), pending);
}

#[test]
fn long_gap_does_not_burst() {
    let mut s = CometSpawner::new(4);
    s.start(0.0);
    let events = s.advance(3_600_000.0);
    let spawned = events
        .iter()
        .filter(|e| matches!(e, CometEvent::Spawned(_)))
        .count();
    assert!(spawned <= 3, "spawned {spawned} after an hour gap");
    assert!(s.is_running());
}
