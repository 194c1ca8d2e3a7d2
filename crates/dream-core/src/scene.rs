//! Sky animation math: the fixed cloud field and the twinkling starfield.
//!
//! Everything here is pure so it can be checked on the host; the renderer
//! uploads the results as instance data and uniforms each frame.

use crate::constants::*;
use glam::{Mat4, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

/// One cloud of the fixed field. `phase` both staggers the initial x and
/// offsets the vertical bob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudDescriptor {
    pub start_x: f32,
    pub start_y: f32,
    pub start_z: f32,
    pub speed: f32,
    pub scale: f32,
    pub phase: f32,
}

const fn cloud(
    start_x: f32,
    start_y: f32,
    start_z: f32,
    speed: f32,
    scale: f32,
    phase: f32,
) -> CloudDescriptor {
    CloudDescriptor {
        start_x,
        start_y,
        start_z,
        speed,
        scale,
        phase,
    }
}

pub static CLOUD_FIELD: [CloudDescriptor; 18] = [
    cloud(-14.0, 5.0, -18.0, 0.55, 1.3, 0.0),
    cloud(6.0, 8.0, -22.0, 0.42, 1.6, 0.9),
    cloud(-20.0, -3.0, -15.0, 0.65, 1.0, 1.6),
    cloud(14.0, 2.0, -20.0, 0.48, 1.4, 2.3),
    cloud(-6.0, -7.0, -17.0, 0.58, 1.1, 3.1),
    cloud(0.0, 11.0, -24.0, 0.38, 1.7, 3.8),
    cloud(10.0, -5.0, -16.0, 0.62, 0.9, 4.5),
    cloud(-16.0, 3.0, -19.0, 0.52, 1.2, 5.2),
    cloud(18.0, 7.0, -21.0, 0.45, 1.5, 5.9),
    cloud(-10.0, -9.0, -14.0, 0.68, 0.85, 6.6),
    cloud(4.0, -1.0, -23.0, 0.4, 1.55, 7.3),
    cloud(-4.0, 6.0, -16.0, 0.6, 1.05, 8.0),
    cloud(12.0, -8.0, -19.0, 0.5, 1.25, 8.7),
    cloud(-18.0, 9.0, -25.0, 0.35, 1.8, 9.4),
    cloud(8.0, 0.0, -13.0, 0.7, 0.8, 10.1),
    // distant, large, slow
    cloud(-8.0, 4.0, -26.0, 0.3, 2.8, 10.8),
    cloud(10.0, -3.0, -28.0, 0.25, 3.2, 12.0),
    cloud(-14.0, -6.0, -30.0, 0.22, 3.5, 13.5),
];

#[inline]
pub fn cloud_initial_x(phase: f32) -> f32 {
    CLOUD_FADE_IN_START + phase / CLOUD_PHASE_SPAN * (CLOUD_FADE_OUT_END - CLOUD_FADE_IN_START)
}

#[inline]
pub fn cloud_base_opacity(scale: f32) -> f32 {
    (CLOUD_BASE_OPACITY + scale * CLOUD_OPACITY_PER_SCALE).min(CLOUD_MAX_OPACITY)
}

/// Opacity multiplier in `[0, 1]` for a cloud at `x`.
pub fn cloud_edge_fade(x: f32) -> f32 {
    if x < CLOUD_FADE_IN_END {
        ((x - CLOUD_FADE_IN_START) / (CLOUD_FADE_IN_END - CLOUD_FADE_IN_START)).clamp(0.0, 1.0)
    } else if x > CLOUD_FADE_OUT_START {
        (1.0 - (x - CLOUD_FADE_OUT_START) / (CLOUD_FADE_OUT_END - CLOUD_FADE_OUT_START))
            .clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Horizontal state of one drifting cloud.
#[derive(Clone, Copy, Debug)]
pub struct CloudDrift {
    pub desc: CloudDescriptor,
    pub x: f32,
}

impl CloudDrift {
    pub fn new(desc: CloudDescriptor) -> Self {
        Self {
            desc,
            x: cloud_initial_x(desc.phase),
        }
    }

    /// Move right by `speed * dt`, wrapping past the right edge.
    pub fn advance(&mut self, dt: f32) {
        self.x += self.desc.speed * dt;
        if self.x > CLOUD_WRAP_X {
            self.x = -CLOUD_WRAP_X;
        }
    }

    pub fn position(&self, time_sec: f32) -> Vec3 {
        let bob = (time_sec * CLOUD_BOB_RATE + self.desc.phase).sin() * CLOUD_BOB_AMPLITUDE;
        Vec3::new(self.x, self.desc.start_y + bob, self.desc.start_z)
    }

    pub fn opacity(&self) -> f32 {
        cloud_base_opacity(self.desc.scale) * cloud_edge_fade(self.x)
    }

    /// Half extents of the puff volume.
    pub fn bounds(&self) -> Vec3 {
        Vec3::new(3.5 * self.desc.scale, 1.2 * self.desc.scale, 1.5)
    }
}

pub fn cloud_field() -> Vec<CloudDrift> {
    CLOUD_FIELD.iter().copied().map(CloudDrift::new).collect()
}

/// A soft billboard inside a cloud, relative to the cloud centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPuff {
    pub offset: Vec3,
    pub size: f32,
}

/// Scatter the puffs of one cloud inside its bounds.
pub fn cloud_puffs<R: Rng + ?Sized>(drift: &CloudDrift, rng: &mut R) -> SmallVec<[CloudPuff; CLOUD_PUFFS]> {
    let b = drift.bounds();
    (0..CLOUD_PUFFS)
        .map(|_| {
            let offset = Vec3::new(
                rng.gen_range(-1.0..=1.0) * b.x,
                rng.gen_range(-1.0..=1.0) * b.y,
                rng.gen_range(-1.0..=1.0) * b.z,
            );
            // puffs near the core are larger
            let falloff = 1.0 - 0.4 * (offset.x.abs() / b.x.max(f32::EPSILON));
            CloudPuff {
                offset,
                size: drift.desc.scale * rng.gen_range(1.6..2.6) * falloff,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    /// phase in `[0, 2π)`
    pub twinkle_seed: f32,
}

pub fn generate_stars(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let r = STAR_SHELL_MIN_RADIUS + rng.gen::<f32>() * STAR_SHELL_SPAN;
            let position = Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            );
            let size = if rng.gen::<f32>() < STAR_SMALL_FRACTION {
                0.4 + rng.gen::<f32>() * 0.8
            } else {
                1.4 + rng.gen::<f32>() * 1.6
            };
            Star {
                position,
                size,
                twinkle_seed: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}

/// Point-size multiplier, in `[0.4, 1.0]`.
#[inline]
pub fn twinkle_size(time_sec: f32, seed: f32) -> f32 {
    0.7 + 0.3 * (time_sec * (0.4 + seed * 0.6) + seed * TAU).sin()
}

/// Colour multiplier, in `[0.5, 1.0]`.
#[inline]
pub fn twinkle_brightness(time_sec: f32, seed: f32) -> f32 {
    0.75 + 0.25 * (time_sec * (0.3 + seed * 0.5) + seed * TAU).sin()
}

/// Cool-to-warm tint of a star.
pub fn star_color(seed: f32) -> Vec3 {
    let warmth = 0.5 + 0.5 * (seed * PI).sin();
    let cool = Vec3::new(0.85, 0.92, 1.0);
    let warm = Vec3::new(1.0, 0.95, 0.85);
    cool.lerp(warm, warmth)
}

/// Accumulated per-frame rotation of the whole starfield.
#[derive(Clone, Copy, Debug, Default)]
pub struct StarfieldRotation {
    pub x: f32,
    pub y: f32,
}

impl StarfieldRotation {
    pub fn step(&mut self) {
        self.x += STAR_ROTATION_X_PER_FRAME;
        self.y += STAR_ROTATION_Y_PER_FRAME;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}
