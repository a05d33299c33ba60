//! Duration-based interpolation: single tweens, grouped timelines and
//! retargetable animated properties.
//!
//! Everything here is sampled from an absolute clock (`now`, seconds). No
//! value is accumulated frame to frame, so a skipped frame simply lands on
//! the correct value at the next sample.

use crate::ease::Ease;
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};

pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

/// One scalar track: `from -> to` over `duration`, starting `offset` seconds
/// into its timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub offset: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            offset: 0.0,
            duration,
            ease,
        }
    }

    pub fn at(mut self, offset: f64) -> Self {
        self.offset = offset.max(0.0);
        self
    }

    pub fn end(&self) -> f64 {
        self.offset + self.duration.max(0.0)
    }

    /// Linear progress of the track at timeline-local time `local`.
    pub fn progress(&self, local: f64) -> f32 {
        if self.duration <= 0.0 {
            return if local >= self.offset { 1.0 } else { 0.0 };
        }
        ((local - self.offset) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, local: f64) -> f32 {
        if local >= self.end() {
            return self.to;
        }
        if local <= self.offset {
            return self.from;
        }
        f32::lerp(self.from, self.to, self.ease.apply(self.progress(local)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    Idle,
    Running { start: f64 },
    Cancelled,
}

/// Named tracks sharing one start time and an overall delay.
///
/// While idle every track reports its `from` value (the "set" state before an
/// animation is armed). After [`Timeline::cancel`] nothing is reported, so a
/// torn-down object receives no further writes.
#[derive(Clone, Debug)]
pub struct Timeline {
    delay: f64,
    tracks: FnvHashMap<&'static str, Tween>,
    playback: Playback,
}

impl Timeline {
    pub fn new(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            tracks: FnvHashMap::default(),
            playback: Playback::Idle,
        }
    }

    pub fn with(mut self, name: &'static str, tween: Tween) -> Self {
        self.insert(name, tween);
        self
    }

    pub fn insert(&mut self, name: &'static str, tween: Tween) {
        self.tracks.insert(name, tween);
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// (Re)arm the timeline so its local clock starts `delay` after `now`.
    pub fn play(&mut self, now: f64) {
        self.playback = Playback::Running { start: now };
    }

    pub fn cancel(&mut self) {
        self.playback = Playback::Cancelled;
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        matches!(self.playback, Playback::Running { .. })
    }

    /// End of the last track, excluding the delay.
    pub fn duration(&self) -> f64 {
        self.tracks.values().map(Tween::end).fold(0.0, f64::max)
    }

    /// Time since the delay elapsed; negative while still waiting.
    pub fn local_time(&self, now: f64) -> Option<f64> {
        match self.playback {
            Playback::Running { start } => Some(now - start - self.delay),
            _ => None,
        }
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.local_time(now)
            .map(|t| t >= self.duration())
            .unwrap_or(false)
    }

    pub fn sample(&self, name: &str, now: f64) -> Option<f32> {
        let track = self.tracks.get(name)?;
        match self.playback {
            Playback::Idle => Some(track.from),
            Playback::Running { .. } => self.local_time(now).map(|t| track.sample(t)),
            Playback::Cancelled => None,
        }
    }
}

/// A live value that can be pointed at a new target at any time; the next
/// animation starts from wherever the value currently is.
#[derive(Clone, Copy, Debug)]
pub struct Animated<T: Lerp> {
    value: T,
    from: T,
    target: T,
    start: f64,
    duration: f64,
    ease: Ease,
    active: bool,
}

impl<T: Lerp> Animated<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            from: value,
            target: value,
            start: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
            active: false,
        }
    }

    /// Jump to `value` immediately, dropping any running animation.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.from = value;
        self.target = value;
        self.active = false;
    }

    pub fn to(&mut self, target: T, now: f64, duration: f64, ease: Ease) {
        self.update(now);
        if duration <= 0.0 {
            self.set(target);
            return;
        }
        self.from = self.value;
        self.target = target;
        self.start = now;
        self.duration = duration;
        self.ease = ease;
        self.active = true;
    }

    pub fn update(&mut self, now: f64) -> T {
        if self.active {
            let t = ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32;
            if t >= 1.0 {
                self.value = self.target;
                self.active = false;
            } else {
                self.value = T::lerp(self.from, self.target, self.ease.apply(t));
            }
        }
        self.value
    }

    /// Freeze at the current value.
    pub fn cancel(&mut self) {
        self.active = false;
        self.from = self.value;
        self.target = self.value;
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }
}
