//! Host-side reference for the three burn shaders.
//!
//! `shaders/burn.wgsl` evaluates the same fields per fragment; the functions
//! here mirror it so thresholds and edge behaviour can be tested without a
//! GPU. The tint and width constants are also what the renderer uploads.

use crate::constants::PROGRESS_EPSILON;
use glam::{Vec2, Vec3, Vec4};

pub const PHI: f32 = 1.618_034;

pub const PAPER_BURN_NOISE_SCALE: f32 = 1.2;
pub const PAPER_BURN_FIRE: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const PAPER_BURN_EDGE: f32 = 0.02 * PHI;

pub const SCROLL_BURN_NOISE_SCALE: f32 = 2.0;
pub const SCROLL_BURN_FIRE: Vec3 = Vec3::new(4.0, 1.5, 0.5);
pub const SCROLL_BURN_EDGE: f32 = 0.05;
pub const SCROLL_BURN_PARALLAX: f32 = 0.03;

pub const WHITE_PAPER_FIRE: Vec3 = Vec3::new(4.0, 1.5, 0.4);
pub const WHITE_PAPER_CHAR: Vec3 = Vec3::new(0.1, 0.05, 0.0);
pub const WHITE_PAPER_EDGE: f32 = 0.08;
const WHITE_PAPER_WARM: Vec3 = Vec3::new(1.0, 0.95, 0.9);

/// (position, size, twinkle offset, tint)
pub const STARS: [(Vec2, f32, f32, Vec3); 3] = [
    (Vec2::new(0.3, 0.4), 1.2, 0.0, Vec3::new(0.9, 0.8, 1.0)),
    (Vec2::new(0.75, 0.6), 1.5, 2.0, Vec3::new(1.0, 0.9, 0.6)),
    (Vec2::new(0.15, 0.8), 1.0, 4.0, Vec3::new(0.8, 0.9, 1.0)),
];

fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

fn mod289_2(x: Vec2) -> Vec2 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

fn permute(x: Vec3) -> Vec3 {
    mod289_3((x * 34.0 + Vec3::ONE) * x)
}

/// 2D simplex noise in roughly [-1, 1].
pub fn snoise(v: Vec2) -> f32 {
    const CX: f32 = 0.211_324_87;
    const CY: f32 = 0.366_025_4;
    const CZ: f32 = -0.577_350_26;
    const CW: f32 = 0.024_390_243;

    let mut i = (v + Vec2::splat(v.dot(Vec2::splat(CY)))).floor();
    let x0 = v - i + Vec2::splat(i.dot(Vec2::splat(CX)));
    let i1 = if x0.x > x0.y { Vec2::X } else { Vec2::Y };
    let x12a = x0 + Vec2::splat(CX) - i1;
    let x12b = x0 + Vec2::splat(CZ);

    i = mod289_2(i);
    let p = permute(
        permute(Vec3::splat(i.y) + Vec3::new(0.0, i1.y, 1.0)) + Vec3::splat(i.x) + Vec3::new(0.0, i1.x, 1.0),
    );

    let mut m = (Vec3::splat(0.5) - Vec3::new(x0.dot(x0), x12a.dot(x12a), x12b.dot(x12b))).max(Vec3::ZERO);
    m = m * m;
    m = m * m;

    let pw = p * CW;
    let x = (pw - pw.floor()) * 2.0 - Vec3::ONE;
    let h = x.abs() - Vec3::splat(0.5);
    let ox = (x + Vec3::splat(0.5)).floor();
    let a0 = x - ox;
    m *= Vec3::splat(1.792_842_9) - (a0 * a0 + h * h) * 0.853_734_7;

    let g = Vec3::new(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x12a.x + h.y * x12a.y,
        a0.z * x12b.x + h.z * x12b.y,
    );
    130.0 * m.dot(g)
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Distance from the centre distorted by noise; a fragment is revealed once
/// this drops below the threshold.
pub fn paper_burn_pattern(uv: Vec2, time: f32) -> f32 {
    let n = snoise(uv * PAPER_BURN_NOISE_SCALE + Vec2::new(0.0, time * 0.1));
    uv.distance(Vec2::splat(0.5)) + n * (0.1 * PHI)
}

pub fn paper_burn_threshold(progress: f32) -> f32 {
    progress * 1.8 - 0.2
}

/// Paper-burn reveal of the background image. `texel` is the image colour at
/// `uv`. Unrevealed fragments are opaque black.
pub fn paper_burn(uv: Vec2, progress: f32, time: f32, texel: Vec3) -> Vec4 {
    if progress <= PROGRESS_EPSILON {
        return Vec4::ZERO;
    }
    let n = snoise(uv * PAPER_BURN_NOISE_SCALE + Vec2::new(0.0, time * 0.1));
    let pattern = uv.distance(Vec2::splat(0.5)) + n * (0.1 * PHI);
    let threshold = paper_burn_threshold(progress);
    if pattern > threshold {
        return Vec4::new(0.0, 0.0, 0.0, 1.0);
    }
    let mut light = smoothstep(threshold - PAPER_BURN_EDGE, threshold, pattern);
    let breath = smoothstep(0.4, 0.6, n * 0.5 + 0.5);
    light += breath * 0.2 * light;
    (texel + PAPER_BURN_FIRE * light * 4.0).extend(1.0)
}

fn star(uv: Vec2, center: Vec2, size: f32, offset: f32, time: f32) -> f32 {
    let d = uv.distance(center);
    let twinkle = 0.5 + 0.5 * (time * 3.0 + offset).sin();
    let core = size / (d + 1e-4) * twinkle;
    let rays = (1.0 - (uv.x - center.x).abs() * 100.0).max(0.0)
        * (1.0 - (uv.y - center.y).abs() * 100.0).max(0.0);
    core * 0.0005 + rays * 0.5 * twinkle
}

/// Night-sky burn. Transparent outside the burned hole; inside it shows the
/// parallax-shifted sky with a few twinkling stars and a fire rim.
pub fn scroll_burn(
    uv: Vec2,
    progress: f32,
    time: f32,
    mouse: Vec2,
    sample: impl Fn(Vec2) -> Vec3,
) -> Vec4 {
    if progress <= PROGRESS_EPSILON {
        return Vec4::ZERO;
    }
    let n = snoise(uv * SCROLL_BURN_NOISE_SCALE + Vec2::new(0.0, time * 0.2));
    let pattern = uv.distance(Vec2::splat(0.5)) + n * 0.1;
    let threshold = progress * 1.5;
    if pattern >= threshold {
        return Vec4::ZERO;
    }
    let puv = uv + mouse * SCROLL_BURN_PARALLAX;
    let mut rgb = sample(puv.clamp(Vec2::ZERO, Vec2::ONE)) * 0.5;
    for (center, size, offset, tint) in STARS {
        rgb += tint * star(puv, center, size, offset, time);
    }
    if pattern > threshold - SCROLL_BURN_EDGE {
        let fire = smoothstep(threshold - SCROLL_BURN_EDGE, threshold, pattern);
        rgb += SCROLL_BURN_FIRE * fire * 2.0;
    }
    rgb.extend(1.0)
}

/// White paper rising from the bottom of the screen behind a thin fire
/// line. `paper` is the paper texture colour at `uv`.
pub fn white_paper(uv: Vec2, progress: f32, time: f32, paper: Vec3) -> Vec4 {
    if progress <= PROGRESS_EPSILON {
        return Vec4::ZERO;
    }
    let coarse = snoise(uv * 6.0 + Vec2::new(0.0, time * 0.15));
    let fine = snoise(uv * 20.0 + Vec2::new(0.0, time * 0.3)) * 0.15;
    let n = (coarse + 1.0) * 0.5 + fine;
    let front = progress * 3.0 - 1.0;
    let edge = uv.y * 1.5 + n * 0.25;
    let fire_end = front + WHITE_PAPER_EDGE;

    let paper_mask = 1.0 - smoothstep(front - 0.01, front, edge);
    if paper_mask > 0.5 {
        return paper.lerp(WHITE_PAPER_WARM, 0.1).extend(1.0);
    }
    let intensity = 1.0 - smoothstep(front, fire_end, edge);
    if intensity <= 0.01 {
        return Vec4::ZERO;
    }
    let flicker = 0.8 + 0.2 * (time * 20.0 + uv.x * 10.0).sin();
    let tip = smoothstep(front, fire_end, edge);
    (WHITE_PAPER_FIRE * flicker)
        .lerp(WHITE_PAPER_CHAR, tip.powi(3))
        .extend(intensity)
}

/// Fraction of a `samples`×`samples` grid that the paper burn has revealed.
pub fn paper_burn_revealed_fraction(progress: f32, time: f32, samples: u32) -> f32 {
    if progress <= PROGRESS_EPSILON || samples == 0 {
        return 0.0;
    }
    let threshold = paper_burn_threshold(progress);
    let mut hit = 0u32;
    for y in 0..samples {
        for x in 0..samples {
            let uv = Vec2::new(
                (x as f32 + 0.5) / samples as f32,
                (y as f32 + 0.5) / samples as f32,
            );
            if paper_burn_pattern(uv, time) <= threshold {
                hit += 1;
            }
        }
    }
    hit as f32 / (samples * samples) as f32
}
