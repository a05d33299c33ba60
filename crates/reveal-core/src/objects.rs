//! Per-object animation state for everything drawn on the canvas.
//!
//! Objects own plain values (positions, opacities, progress). The renderer
//! copies them into uniforms once per frame; nothing here refers to GPU
//! resources.

use crate::constants::*;
use crate::director::Director;
use crate::ease::Ease;
use crate::scroll::ScrollRange;
use crate::sequence::Effect;
use crate::smoothing::Follow;
use crate::tween::{Timeline, Tween};
use crate::viewport::{hits_square, Viewport};
use glam::{Vec2, Vec3};

/// Everything an object may read during one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Frame clock, seconds since page load.
    pub now: f64,
    pub dt: f32,
    /// Pointer in NDC, [-1, 1] per axis, +y up.
    pub pointer: Vec2,
    /// Scroll offset in CSS pixels.
    pub scroll: f32,
    pub viewport: Viewport,
}

fn cue_timeline(director: &Director, effect: Effect) -> Timeline {
    let delay = director
        .sequence()
        .cue(effect)
        .map(|c| c.start_offset)
        .unwrap_or(0.0);
    Timeline::new(delay)
}

fn arm(timeline: &mut Timeline, director: &Director) {
    if let Some(at) = director.activation_time() {
        timeline.play(at);
    }
}

// ---------------- Background (paper-burn reveal plane) ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundState {
    pub position: Vec3,
    pub size: Vec2,
    pub progress: f32,
    pub time: f32,
}

#[derive(Clone, Debug)]
pub struct Background {
    reveal: Timeline,
    parallax: Follow<Vec2>,
    state: BackgroundState,
}

impl Background {
    pub fn new(director: &Director) -> Self {
        let duration = director
            .sequence()
            .cue(Effect::PaperBurn)
            .map(|c| c.duration)
            .unwrap_or(REVEAL_DURATION_SEC);
        Self {
            reveal: cue_timeline(director, Effect::PaperBurn)
                .with("progress", Tween::new(0.0, 1.0, duration, Ease::Power1InOut)),
            parallax: Follow::from_frame_factor(Vec2::ZERO, PARALLAX_FOLLOW_FACTOR),
            state: BackgroundState {
                position: Vec3::new(0.0, 0.0, BACKGROUND_Z),
                size: Vec2::ZERO,
                progress: 0.0,
                time: 0.0,
            },
        }
    }

    pub fn activate(&mut self, director: &Director) {
        arm(&mut self.reveal, director);
    }

    pub fn cancel(&mut self) {
        self.reveal.cancel();
    }

    pub fn update(&mut self, input: &FrameInput) -> BackgroundState {
        let offset = self
            .parallax
            .step(input.pointer * BACKGROUND_PARALLAX, input.dt);
        if let Some(p) = self.reveal.sample("progress", input.now) {
            self.state.progress = p.clamp(0.0, 1.0);
        }
        self.state.position = Vec3::new(offset.x, offset.y, BACKGROUND_Z);
        self.state.size = Vec2::new(input.viewport.width, input.viewport.height) * BACKGROUND_PLANE_SCALE;
        self.state.time = input.now as f32;
        self.state
    }

    pub fn state(&self) -> BackgroundState {
        self.state
    }
}

// ---------------- Sliding images ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    fn x_fraction(self) -> f32 {
        match self {
            Side::Left => LEFT_IMAGE_X_FRACTION,
            Side::Right => RIGHT_IMAGE_X_FRACTION,
        }
    }

    fn cue(self) -> Effect {
        match self {
            Side::Left => Effect::LeftImage,
            Side::Right => Effect::RightImage,
        }
    }
}

/// Viewport-derived endpoints of an image's entry animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    pub size: Vec2,
    pub start: Vec3,
    pub target: Vec3,
}

pub fn image_layout(side: Side, y_offset: f32, aspect: f32, viewport: &Viewport) -> ImageLayout {
    let height = (viewport.width * IMAGE_HEIGHT_FRACTION).min(IMAGE_MAX_HEIGHT);
    let width = height * aspect.max(f32::EPSILON);
    let s = side.sign();
    ImageLayout {
        size: Vec2::new(width, height),
        start: Vec3::new(
            s * viewport.width * IMAGE_START_X_FRACTION,
            viewport.height * IMAGE_START_Y_FRACTION,
            0.0,
        ),
        target: Vec3::new(s * viewport.width * side.x_fraction(), y_offset, 0.0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageState {
    /// Group position (entry animation).
    pub position: Vec3,
    /// Inner mesh offset (pointer parallax plus scroll exit).
    pub offset: Vec2,
    pub scale: f32,
    pub size: Vec2,
    pub opacity: f32,
    pub feather: f32,
}

impl ImageState {
    pub fn world_position(&self) -> Vec3 {
        self.position + self.offset.extend(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct SlidingImage {
    side: Side,
    y_offset: f32,
    aspect: f32,
    entry: Timeline,
    follow: Follow<Vec2>,
    exit_range: ScrollRange,
    state: ImageState,
}

impl SlidingImage {
    pub fn new(side: Side, y_offset: f32, director: &Director) -> Self {
        let duration = director
            .sequence()
            .cue(side.cue())
            .map(|c| c.duration)
            .unwrap_or(IMAGE_ENTRY_SEC);
        let entry = cue_timeline(director, side.cue())
            .with("enter", Tween::new(0.0, 1.0, duration, Ease::Power3Out))
            .with(
                "opacity",
                Tween::new(0.0, 1.0, IMAGE_FADE_SEC, Ease::Power2Out),
            );
        Self {
            side,
            y_offset,
            aspect: 1.0,
            entry,
            follow: Follow::from_frame_factor(Vec2::ZERO, PARALLAX_FOLLOW_FACTOR),
            exit_range: IMAGE_EXIT_RANGE,
            state: ImageState {
                position: Vec3::ZERO,
                offset: Vec2::ZERO,
                scale: IMAGE_START_SCALE,
                size: Vec2::ZERO,
                opacity: 0.0,
                feather: IMAGE_FEATHER,
            },
        }
    }

    pub fn left(director: &Director) -> Self {
        Self::new(Side::Left, 0.0, director)
    }

    pub fn right(director: &Director) -> Self {
        Self::new(Side::Right, RIGHT_IMAGE_Y_OFFSET, director)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Width / height of the loaded texture.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn activate(&mut self, director: &Director) {
        arm(&mut self.entry, director);
    }

    pub fn cancel(&mut self) {
        self.entry.cancel();
    }

    pub fn update(&mut self, input: &FrameInput) -> ImageState {
        let layout = image_layout(self.side, self.y_offset, self.aspect, &input.viewport);
        if let (Some(enter), Some(opacity)) = (
            self.entry.sample("enter", input.now),
            self.entry.sample("opacity", input.now),
        ) {
            self.state.position = layout.start.lerp(layout.target, enter);
            self.state.scale = IMAGE_START_SCALE + (1.0 - IMAGE_START_SCALE) * enter;
            self.state.opacity = opacity.clamp(0.0, 1.0);
        }
        let exit = self.exit_range.progress(input.scroll);
        let exit_offset =
            Vec2::new(self.side.sign() * exit * input.viewport.width * IMAGE_EXIT_DISTANCE_FRACTION, 0.0);
        let target = input.pointer * IMAGE_PARALLAX + exit_offset;
        self.state.offset = self.follow.step(target, input.dt);
        self.state.size = layout.size;
        self.state
    }

    pub fn state(&self) -> ImageState {
        self.state
    }
}

// ---------------- Central frame ----------------

/// One bar of the frame outline, in frame-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub center: Vec2,
    pub size: Vec2,
}

/// Four outline bars plus two L-shaped corner accents (top-left and
/// bottom-right).
pub fn frame_bars(width: f32, height: f32) -> [Bar; 8] {
    let t = FRAME_THICKNESS;
    let a = FRAME_ACCENT_LEN;
    let i = FRAME_ACCENT_INSET;
    let hw = width / 2.0;
    let hh = height / 2.0;
    let tl = Vec2::new(-hw - i, hh + i);
    let br = Vec2::new(hw + i, -hh - i);
    [
        Bar {
            center: Vec2::new(0.0, hh),
            size: Vec2::new(width + t, t),
        },
        Bar {
            center: Vec2::new(0.0, -hh),
            size: Vec2::new(width + t, t),
        },
        Bar {
            center: Vec2::new(-hw, 0.0),
            size: Vec2::new(t, height),
        },
        Bar {
            center: Vec2::new(hw, 0.0),
            size: Vec2::new(t, height),
        },
        Bar {
            center: tl + Vec2::new(a / 2.0, 0.0),
            size: Vec2::new(a, t),
        },
        Bar {
            center: tl + Vec2::new(0.0, -a / 2.0),
            size: Vec2::new(t, a + t),
        },
        Bar {
            center: br + Vec2::new(-a / 2.0, 0.0),
            size: Vec2::new(a, t),
        },
        Bar {
            center: br + Vec2::new(0.0, a / 2.0),
            size: Vec2::new(t, a + t),
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

impl FrameState {
    pub fn bars(&self) -> [Bar; 8] {
        frame_bars(self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct CentralFrame {
    fade: Timeline,
    follow: Follow<Vec2>,
    state: FrameState,
}

impl CentralFrame {
    pub fn new(director: &Director) -> Self {
        let duration = director
            .sequence()
            .cue(Effect::FrameFadeIn)
            .map(|c| c.duration)
            .unwrap_or(FRAME_FADE_SEC);
        Self {
            fade: cue_timeline(director, Effect::FrameFadeIn)
                .with("opacity", Tween::new(0.0, 1.0, duration, Ease::Power2Out)),
            follow: Follow::from_frame_factor(Vec2::ZERO, PARALLAX_FOLLOW_FACTOR),
            state: FrameState {
                position: Vec3::new(0.0, 0.0, FRAME_Z),
                width: 0.0,
                height: 0.0,
                opacity: 0.0,
            },
        }
    }

    pub fn activate(&mut self, director: &Director) {
        arm(&mut self.fade, director);
    }

    pub fn cancel(&mut self) {
        self.fade.cancel();
    }

    pub fn update(&mut self, input: &FrameInput) -> FrameState {
        let p = self.follow.step(input.pointer * FRAME_PARALLAX, input.dt);
        if let Some(o) = self.fade.sample("opacity", input.now) {
            self.state.opacity = o.clamp(0.0, 1.0);
        }
        self.state.position = Vec3::new(p.x, p.y, FRAME_Z);
        self.state.width = input.viewport.width * FRAME_WIDTH_FRACTION;
        self.state.height = input.viewport.height * FRAME_HEIGHT_FRACTION;
        self.state
    }

    pub fn state(&self) -> FrameState {
        self.state
    }
}

// ---------------- Heart ember ----------------

/// Closeness of the pointer to the ember: 1 at the centre, 0 at and beyond
/// the proximity radius, cubic falloff.
pub fn ember_proximity(pointer: Vec2) -> f32 {
    let d = pointer.length();
    let linear = 1.0 - (d / EMBER_PROXIMITY_RADIUS).min(1.0);
    linear.powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmberState {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
    pub intensity: f32,
    pub pulse: f32,
    pub time: f32,
}

#[derive(Clone, Debug)]
pub struct Ember {
    intensity: Follow<f32>,
    pulse_phase: f32,
    exit: Timeline,
    started: bool,
    state: EmberState,
}

impl Ember {
    pub fn new(director: &Director) -> Self {
        let duration = director
            .sequence()
            .cue(Effect::EmberExit)
            .map(|c| c.duration)
            .unwrap_or(EMBER_EXIT_SEC);
        Self {
            intensity: Follow::from_frame_factor(0.0, EMBER_INTENSITY_FOLLOW_FACTOR),
            pulse_phase: 0.0,
            exit: cue_timeline(director, Effect::EmberExit)
                .with("opacity", Tween::new(1.0, 0.0, duration, Ease::Power2Out))
                .with(
                    "scale",
                    Tween::new(1.0, EMBER_EXIT_SCALE, duration, Ease::Power2In),
                ),
            started: false,
            state: EmberState {
                position: Vec3::new(0.0, 0.0, EMBER_Z),
                scale: 1.0,
                opacity: 1.0,
                intensity: 0.0,
                pulse: 0.0,
                time: 0.0,
            },
        }
    }

    pub fn activate(&mut self, director: &Director) {
        self.started = true;
        arm(&mut self.exit, director);
    }

    pub fn cancel(&mut self) {
        self.exit.cancel();
    }

    /// The invisible click target only exists before activation.
    pub fn hit_region_active(&self) -> bool {
        !self.started
    }

    pub fn hit_test(&self, viewport: &Viewport, pointer: Vec2) -> bool {
        self.hit_region_active()
            && hits_square(
                &viewport.camera(),
                pointer,
                Vec3::new(0.0, 0.0, EMBER_HIT_Z),
                EMBER_HIT_SIZE,
            )
    }

    pub fn update(&mut self, input: &FrameInput) -> EmberState {
        if !self.started {
            // Pointer proximity drives glow and heartbeat until activation;
            // afterwards both freeze while the exit animation plays.
            let intensity = self.intensity.step(ember_proximity(input.pointer), input.dt);
            let speed = 1.0 + intensity * EMBER_PULSE_SPEED_GAIN;
            self.pulse_phase += input.dt * speed;
            self.state.intensity = intensity;
            self.state.pulse = self.pulse_phase;
            self.state.time = input.now as f32;
        }
        if let (Some(o), Some(s)) = (
            self.exit.sample("opacity", input.now),
            self.exit.sample("scale", input.now),
        ) {
            self.state.opacity = o.clamp(0.0, 1.0);
            self.state.scale = s;
        }
        self.state
    }

    pub fn state(&self) -> EmberState {
        self.state
    }
}

// ---------------- Mouse light ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseLightState {
    pub position: Vec3,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct MouseLight {
    follow: Follow<Vec2>,
}

impl MouseLight {
    pub fn new() -> Self {
        Self {
            follow: Follow::from_frame_factor(Vec2::ZERO, MOUSE_LIGHT_FOLLOW_FACTOR),
        }
    }

    pub fn update(&mut self, input: &FrameInput) -> MouseLightState {
        let half = Vec2::new(input.viewport.width, input.viewport.height) * 0.5;
        let p = self.follow.step(input.pointer * half, input.dt);
        MouseLightState {
            position: Vec3::new(p.x, p.y, MOUSE_LIGHT_Z),
            size: MOUSE_LIGHT_SIZE,
        }
    }
}

impl Default for MouseLight {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------- Scroll-driven burn overlays ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBurnState {
    pub progress: f32,
    pub time: f32,
    pub mouse: Vec2,
    pub size: Vec2,
    pub z: f32,
}

/// A full-screen burn whose progress is a pure function of scroll offset.
/// Inactive (progress 0) until the experience has started.
#[derive(Clone, Copy, Debug)]
pub struct ScrollBurn {
    range: ScrollRange,
    z: f32,
    plane_scale: f32,
    active: bool,
}

impl ScrollBurn {
    pub fn night_sky() -> Self {
        Self {
            range: NIGHT_SKY_RANGE,
            z: NIGHT_SKY_Z,
            plane_scale: NIGHT_SKY_PLANE_SCALE,
            active: false,
        }
    }

    pub fn white_paper() -> Self {
        Self {
            range: WHITE_PAPER_RANGE,
            z: WHITE_PAPER_Z,
            plane_scale: WHITE_PAPER_PLANE_SCALE,
            active: false,
        }
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn progress(&self, scroll: f32) -> f32 {
        if self.active {
            self.range.progress(scroll)
        } else {
            0.0
        }
    }

    pub fn update(&self, input: &FrameInput) -> ScrollBurnState {
        ScrollBurnState {
            progress: self.progress(input.scroll),
            time: input.now as f32,
            mouse: input.pointer,
            size: Vec2::new(input.viewport.width, input.viewport.height) * self.plane_scale,
            z: self.z,
        }
    }
}
