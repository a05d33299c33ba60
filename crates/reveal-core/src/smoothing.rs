use crate::constants::REFERENCE_FPS;
use crate::tween::Lerp;

/// Blend fraction for one step of exponential smoothing: `1 - exp(-rate·dt)`.
#[inline]
pub fn smoothing_alpha(rate_per_sec: f32, dt_sec: f32) -> f32 {
    if dt_sec <= 0.0 || rate_per_sec <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate_per_sec * dt_sec).exp()
}

/// Decay rate that reproduces a fixed per-frame lerp factor at `fps`.
#[inline]
pub fn rate_from_frame_factor(factor: f32, fps: f32) -> f32 {
    let f = factor.clamp(0.0, 0.999_999);
    -(1.0 - f).ln() * fps
}

/// Exponentially follows a target with a frame-rate independent lag.
#[derive(Clone, Copy, Debug)]
pub struct Follow<T: Lerp> {
    value: T,
    rate: f32,
}

impl<T: Lerp> Follow<T> {
    pub fn new(value: T, rate_per_sec: f32) -> Self {
        Self {
            value,
            rate: rate_per_sec,
        }
    }

    /// Same lag a per-frame `lerp(current, target, factor)` has at 60 Hz.
    pub fn from_frame_factor(value: T, factor: f32) -> Self {
        Self::new(value, rate_from_frame_factor(factor, REFERENCE_FPS))
    }

    pub fn step(&mut self, target: T, dt_sec: f32) -> T {
        self.value = T::lerp(self.value, target, smoothing_alpha(self.rate, dt_sec));
        self.value
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn reset(&mut self, value: T) {
        self.value = value;
    }
}
