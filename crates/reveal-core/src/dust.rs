//! Golden dust: a seeded particle swarm that follows the pointer, gathers
//! into a ring around the ember while the pointer is near the centre, and
//! blows outward once the experience starts.

use crate::constants::*;
use crate::director::Director;
use crate::ease::Ease;
use crate::sequence::Effect;
use glam::{Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DustMode {
    Roam,
    Ring,
    Explode,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    ring_target: Vec3,
    phase: f32,
}

#[derive(Clone, Debug)]
pub struct GoldenDust {
    particles: Vec<Particle>,
    mode: DustMode,
}

impl GoldenDust {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * DUST_SPREAD,
                    (rng.gen::<f32>() - 0.5) * DUST_SPREAD,
                    (rng.gen::<f32>() - 0.5) * DUST_DEPTH,
                );
                let phase = rng.gen::<f32>();
                let theta = rng.gen::<f32>() * std::f32::consts::TAU;
                let r = DUST_RING_RADIUS + (rng.gen::<f32>() - 0.5) * DUST_RING_THICKNESS;
                Particle {
                    position,
                    ring_target: Vec3::new(theta.cos() * r, theta.sin() * r, 0.0),
                    phase,
                }
            })
            .collect();
        Self {
            particles,
            mode: DustMode::Roam,
        }
    }

    pub fn landing() -> Self {
        Self::new(DUST_COUNT, DUST_SEED)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn mode(&self) -> DustMode {
        self.mode
    }

    /// Advance every particle by `dt` seconds. `pointer_world` is the pointer
    /// projected onto the `z = 0` plane.
    pub fn update(&mut self, pointer_world: Vec2, time: f32, dt: f32, started: bool) {
        self.mode = if started {
            DustMode::Explode
        } else if pointer_world.length() < DUST_HOVER_RADIUS {
            DustMode::Ring
        } else {
            DustMode::Roam
        };
        // Jitter amplitude is per reference frame; scale so the wander
        // distance per second is frame-rate independent.
        let frames = dt * REFERENCE_FPS;
        let target = pointer_world.extend(0.0);

        for p in &mut self.particles {
            let seed = p.phase * 10.0;
            let noise = Vec2::new(
                (time * 2.0 + seed).sin(),
                (time * 1.5 + seed).cos(),
            ) * DUST_JITTER
                * frames;
            match self.mode {
                DustMode::Explode => {
                    let angle = p.position.y.atan2(p.position.x);
                    let step = DUST_EXPLOSION_SPEED * dt;
                    p.position.x += angle.cos() * step;
                    p.position.y += angle.sin() * step;
                }
                DustMode::Ring => {
                    let pull = (DUST_RING_PULL * dt).min(1.0);
                    p.position += (p.ring_target - p.position) * pull;
                    p.position += (noise * 0.5).extend(0.0);
                }
                DustMode::Roam => {
                    let pull = (DUST_ATTRACTION * dt).min(1.0);
                    p.position += (target - p.position) * pull;
                    p.position += noise.extend(0.0);
                }
            }
        }
    }
}

/// Point size and opacity for the dust material; both ease to zero over the
/// dispersal cue.
pub fn dust_appearance(director: &Director, now: f64) -> (f32, f32) {
    let t = Ease::Power2Out.apply(director.cue_progress(Effect::DustDispersal, now));
    (DUST_SIZE * (1.0 - t), DUST_OPACITY * (1.0 - t))
}
