// Host-side tests for sky animation math: clouds, stars, title, camera.

use dream_core::constants::*;
use dream_core::scene::*;
use dream_core::title::*;
use dream_core::Camera;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn cloud_wraps_from_right_edge_to_left() {
    let mut drift = cloud_field()[0];
    drift.x = CLOUD_WRAP_X - 0.001;
    drift.advance(1.0);
    assert_eq!(drift.x, -CLOUD_WRAP_X);
}

#[test]
fn clouds_never_leave_wrap_range() {
    let mut field = cloud_field();
    for _ in 0..20_000 {
        for c in field.iter_mut() {
            c.advance(1.0 / 60.0);
            assert!(c.x >= -CLOUD_WRAP_X && c.x <= CLOUD_WRAP_X + 1.0);
        }
    }
}

#[test]
fn edge_fade_bounds() {
    assert_eq!(cloud_edge_fade(-40.0), 0.0);
    assert_eq!(cloud_edge_fade(40.0), 0.0);
    assert_eq!(cloud_edge_fade(0.0), 1.0);
    assert!((cloud_edge_fade(-30.0) - 0.5).abs() < 1e-5);
    assert!((cloud_edge_fade(30.0) - 0.5).abs() < 1e-5);
    let mut x = -50.0;
    while x < 50.0 {
        let f = cloud_edge_fade(x);
        assert!((0.0..=1.0).contains(&f));
        x += 0.25;
    }
}

#[test]
fn cloud_opacity_is_capped() {
    for c in cloud_field() {
        let o = c.opacity();
        assert!((0.0..=CLOUD_MAX_OPACITY).contains(&o), "{o}");
        assert!(cloud_base_opacity(c.desc.scale) <= CLOUD_MAX_OPACITY);
    }
}

#[test]
fn initial_x_spreads_clouds() {
    let xs: Vec<f32> = cloud_field().iter().map(|c| c.x).collect();
    assert_eq!(xs.len(), CLOUD_FIELD.len());
    for x in &xs {
        assert!(x.abs() <= CLOUD_WRAP_X);
    }
}

#[test]
fn puffs_stay_inside_cloud_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    for c in cloud_field() {
        let b = c.bounds();
        let puffs = cloud_puffs(&c, &mut rng);
        assert_eq!(puffs.len(), CLOUD_PUFFS);
        for p in puffs {
            assert!(p.offset.x.abs() <= b.x && p.offset.y.abs() <= b.y && p.offset.z.abs() <= b.z);
            assert!(p.size > 0.0);
        }
    }
}

#[test]
fn stars_live_on_the_shell() {
    let stars = generate_stars(STAR_SEED, STAR_COUNT);
    assert_eq!(stars.len(), STAR_COUNT);
    let max = STAR_SHELL_MIN_RADIUS + STAR_SHELL_SPAN;
    for s in &stars {
        let r = s.position.length();
        assert!(r >= STAR_SHELL_MIN_RADIUS - 1e-2 && r <= max + 1e-2, "r={r}");
        assert!(s.size > 0.0);
        assert!((0.0..=std::f32::consts::TAU).contains(&s.twinkle_seed));
    }
}

#[test]
fn stars_are_deterministic_per_seed() {
    assert_eq!(generate_stars(9, 50), generate_stars(9, 50));
    assert_ne!(generate_stars(9, 50), generate_stars(10, 50));
}

#[test]
fn twinkle_ranges() {
    for i in 0..2000 {
        let t = i as f32 * 0.037;
        let seed = (i % 97) as f32 / 97.0 * std::f32::consts::TAU;
        let size = twinkle_size(t, seed);
        let bright = twinkle_brightness(t, seed);
        assert!((0.4 - 1e-5..=1.0 + 1e-5).contains(&size), "{size}");
        assert!((0.5 - 1e-5..=1.0 + 1e-5).contains(&bright), "{bright}");
    }
}

#[test]
fn rotation_accumulates_per_frame() {
    let mut rot = StarfieldRotation::default();
    for _ in 0..1000 {
        rot.step();
    }
    assert!((rot.x - 1000.0 * STAR_ROTATION_X_PER_FRAME).abs() < 1e-5);
    assert!((rot.y - 1000.0 * STAR_ROTATION_Y_PER_FRAME).abs() < 1e-5);
}

#[test]
fn title_word_cycles_every_twenty_seconds() {
    assert_eq!(word_at(0.0), "Relax");
    assert_eq!(word_at(19_999.0), "Relax");
    assert_eq!(word_at(20_000.0), "Breathe");
    assert_eq!(word_at(5.0 * 20_000.0), "Drift");
    assert_eq!(word_at(6.0 * 20_000.0), "Relax");
    assert_eq!(word_index_at(-5.0), 0);
    assert_eq!(word_index_at(f64::NAN), 0);
}

#[test]
fn sky_camera_sees_the_star_shell() {
    let mut cam = Camera::sky(1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-5);
    assert!(cam.zfar > CAMERA_Z + STAR_SHELL_MIN_RADIUS + STAR_SHELL_SPAN);
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
}
