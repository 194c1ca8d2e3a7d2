// Host-side tests for the playback state machine and player modes.

use dream_core::playback::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn controller(len: usize) -> PlaybackController {
    let mut c = PlaybackController::new(0, 7);
    c.set_len(len);
    c
}

#[test]
fn index_helpers_wrap() {
    assert_eq!(next_index(4, 5), 0);
    assert_eq!(previous_index(0, 5), 4);
    for len in 1..8 {
        for i in 0..len {
            assert_eq!(previous_index(next_index(i, len), len), i);
            assert_eq!(next_index(previous_index(i, len), len), i);
        }
    }
}

#[test]
fn previous_undoes_next_for_every_index() {
    for len in 1..6 {
        for start in 0..len {
            let mut c = controller(len);
            c.select_track(start, false);
            c.next();
            c.previous();
            assert_eq!(c.index(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn random_other_never_returns_current() {
    let mut rng = StdRng::seed_from_u64(1);
    for len in 2..10 {
        for current in 0..len {
            for _ in 0..50 {
                let pick = random_other_index(&mut rng, current, len);
                assert!(pick < len);
                assert_ne!(pick, current);
            }
        }
    }
    assert_eq!(random_other_index(&mut rng, 0, 1), 0);
    assert_eq!(random_other_index(&mut rng, 0, 0), 0);
}

#[test]
fn random_other_reaches_every_other_index() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = [false; 5];
    for _ in 0..500 {
        seen[random_other_index(&mut rng, 2, 5)] = true;
    }
    assert_eq!(seen, [true, true, false, true, true]);
}

#[test]
fn empty_catalog_ignores_navigation() {
    let mut c = PlaybackController::new(0, 1);
    assert_eq!(c.status(), PlaybackStatus::NoTrack);
    assert_eq!(c.next(), None);
    assert_eq!(c.previous(), None);
    assert_eq!(c.random(), None);
    assert_eq!(c.select_track(0, true), None);
    c.on_play();
    assert_eq!(c.status(), PlaybackStatus::NoTrack);
    assert_eq!(c.on_ended(), None);
}

#[test]
fn set_len_loads_first_track_without_resuming() {
    let mut c = PlaybackController::new(0, 1);
    assert_eq!(c.set_len(3), Some(TrackChange { index: 0, resume: false }));
    assert_eq!(c.status(), PlaybackStatus::Paused);
    assert_eq!(c.set_len(0), None);
}

#[test]
fn next_forces_play_and_previous_keeps_state() {
    let mut c = controller(3);
    assert_eq!(c.next(), Some(TrackChange { index: 1, resume: true }));
    assert_eq!(c.previous(), Some(TrackChange { index: 0, resume: false }));
    c.on_play();
    assert_eq!(c.previous(), Some(TrackChange { index: 2, resume: true }));
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut c = controller(2);
    assert_eq!(c.select_track(2, true), None);
    assert_eq!(c.index(), 0);
}

#[test]
fn reselecting_current_track_is_a_no_op() {
    let mut c = controller(3);
    c.on_play();
    assert_eq!(c.select_track(0, false), None);
    assert_eq!(c.index(), 0);
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(c.select_track(2, false), Some(TrackChange { index: 2, resume: true }));
    assert_eq!(c.select_track(2, true), None);
}

#[test]
fn next_with_a_single_track_changes_nothing() {
    let mut c = controller(1);
    assert_eq!(c.next(), None);
    assert_eq!(c.previous(), None);
    assert!(c.toggle_shuffle());
    assert_eq!(c.next(), None);
}

#[test]
fn shuffle_next_picks_a_different_track() {
    let mut c = controller(6);
    assert!(c.toggle_shuffle());
    for _ in 0..100 {
        let before = c.index();
        let change = c.next().unwrap();
        assert_ne!(change.index, before);
        assert!(change.resume);
    }
    assert!(!c.toggle_shuffle());
}

#[test]
fn ended_advances_and_resumes() {
    let mut c = controller(3);
    c.on_play();
    assert_eq!(c.status(), PlaybackStatus::Playing);
    assert_eq!(c.on_ended(), Some(TrackChange { index: 1, resume: true }));
    c.on_pause();
    assert_eq!(c.status(), PlaybackStatus::Paused);
}

#[test]
fn single_track_loops_on_end() {
    let mut c = controller(1);
    c.on_play();
    assert_eq!(c.on_ended(), Some(TrackChange { index: 0, resume: true }));
}

#[test]
fn mode_toggles_return_to_normal() {
    let m = PlayerMode::default();
    assert_eq!(m, PlayerMode::Normal);
    assert_eq!(m.toggle_minimized(), PlayerMode::Minimized);
    assert_eq!(m.toggle_minimized().toggle_minimized(), PlayerMode::Normal);
    assert_eq!(m.toggle_maximized(), PlayerMode::Maximized);
    assert_eq!(PlayerMode::Minimized.toggle_maximized(), PlayerMode::Maximized);
    assert_eq!(PlayerMode::Maximized.toggle_minimized(), PlayerMode::Minimized);
    assert!(PlayerMode::Maximized.shows_playlist());
    assert!(!PlayerMode::Normal.shows_playlist());
}

#[test]
fn counter_text() {
    assert_eq!(track_counter(0, 0), "0/0");
    assert_eq!(track_counter(0, 12), "1/12");
    assert_eq!(track_counter(11, 12), "12/12");
}

#[test]
fn only_normal_mode_floats() {
    assert!(PlayerMode::Normal.is_free_floating());
    assert!(!PlayerMode::Minimized.is_free_floating());
    assert!(!PlayerMode::Maximized.is_free_floating());
}

#[test]
fn panel_drag_follows_pointer_within_viewport() {
    use glam::Vec2;
    let drag = PanelDrag::begin(Vec2::new(500.0, 400.0), Vec2::new(450.0, 380.0));
    let size = Vec2::new(300.0, 200.0);
    let viewport = Vec2::new(1280.0, 720.0);
    assert_eq!(drag.position(Vec2::new(500.0, 400.0), size, viewport), Vec2::new(450.0, 380.0));
    assert_eq!(drag.position(Vec2::new(400.0, 350.0), size, viewport), Vec2::new(350.0, 330.0));
    // pinned to the edges
    assert_eq!(drag.position(Vec2::new(-200.0, -100.0), size, viewport), Vec2::ZERO);
    assert_eq!(drag.position(Vec2::new(2000.0, 2000.0), size, viewport), Vec2::new(980.0, 520.0));
    // a panel larger than the viewport stays at the origin
    let huge = Vec2::new(2000.0, 1000.0);
    assert_eq!(drag.position(Vec2::new(600.0, 500.0), huge, viewport), Vec2::ZERO);
}
