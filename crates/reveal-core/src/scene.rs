//! The whole landing scene on the host side: director, animated objects,
//! overlay and cursor, stepped together once per frame in a fixed order.

use crate::constants::MAX_FRAME_DT_SEC;
use crate::director::Director;
use crate::dust::{dust_appearance, GoldenDust};
use crate::objects::*;
use crate::overlay::{OverlayChoreographer, OverlayFrame};
use crate::sequence::ActivationSequence;
use crate::viewport::Viewport;
use glam::Vec2;

/// Everything the renderer and the DOM layer need for one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub background: BackgroundState,
    pub left_image: ImageState,
    pub right_image: ImageState,
    pub frame: FrameState,
    pub ember: EmberState,
    pub mouse_light: MouseLightState,
    pub night_sky: ScrollBurnState,
    pub white_paper: ScrollBurnState,
    pub dust_size: f32,
    pub dust_opacity: f32,
    pub overlay: OverlayFrame,
    /// Scroll offset the page must be forced to, when locked.
    pub scroll_override: Option<f32>,
}

pub struct Scene {
    director: Director,
    background: Background,
    left_image: SlidingImage,
    right_image: SlidingImage,
    frame: CentralFrame,
    ember: Ember,
    mouse_light: MouseLight,
    night_sky: ScrollBurn,
    white_paper: ScrollBurn,
    dust: GoldenDust,
    overlay: OverlayChoreographer,
    last_now: Option<f64>,
    // A press that landed on the ember, waiting for its release
    armed: bool,
}

impl Scene {
    pub fn new(sequence: ActivationSequence) -> Self {
        let director = Director::new(sequence);
        Self {
            background: Background::new(&director),
            left_image: SlidingImage::left(&director),
            right_image: SlidingImage::right(&director),
            frame: CentralFrame::new(&director),
            ember: Ember::new(&director),
            mouse_light: MouseLight::new(),
            night_sky: ScrollBurn::night_sky(),
            white_paper: ScrollBurn::white_paper(),
            dust: GoldenDust::landing(),
            overlay: OverlayChoreographer::new(),
            director,
            last_now: None,
            armed: false,
        }
    }

    pub fn landing() -> Self {
        Self::new(ActivationSequence::landing())
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn dust(&self) -> &GoldenDust {
        &self.dust
    }

    pub fn set_image_aspect(&mut self, left: bool, aspect: f32) {
        if left {
            self.left_image.set_aspect(aspect);
        } else {
            self.right_image.set_aspect(aspect);
        }
    }

    pub fn ember_hit(&self, viewport: &Viewport, pointer: Vec2) -> bool {
        self.ember.hit_test(viewport, pointer)
    }

    /// Button went down. Only a press on the ember can later count as a click.
    pub fn press(&mut self, viewport: &Viewport, pointer: Vec2) {
        self.armed = self.ember.hit_test(viewport, pointer);
    }

    /// Button came up. A click is a press and a release both on the ember;
    /// dragging off the ember before letting go does nothing. Returns true
    /// only on the one transition out of idle.
    pub fn release(&mut self, viewport: &Viewport, pointer: Vec2, now: f64) -> bool {
        let armed = std::mem::take(&mut self.armed);
        if !armed || !self.ember.hit_test(viewport, pointer) {
            return false;
        }
        self.activate(now)
    }

    pub fn activate(&mut self, now: f64) -> bool {
        if !self.director.activate(now) {
            return false;
        }
        self.background.activate(&self.director);
        self.left_image.activate(&self.director);
        self.right_image.activate(&self.director);
        self.frame.activate(&self.director);
        self.ember.activate(&self.director);
        self.night_sky.activate();
        self.white_paper.activate();
        true
    }

    /// Cancel every running timeline; values freeze where they are.
    pub fn teardown(&mut self) {
        self.background.cancel();
        self.left_image.cancel();
        self.right_image.cancel();
        self.frame.cancel();
        self.ember.cancel();
        self.night_sky.cancel();
        self.white_paper.cancel();
        log::info!("[scene] teardown");
    }

    /// Step every component at frame-clock time `now`. `scroll` is the
    /// offset the page currently reports.
    pub fn update(&mut self, now: f64, pointer: Vec2, scroll: f32, viewport: Viewport) -> SceneFrame {
        let dt = match self.last_now {
            Some(prev) => ((now - prev) as f32).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        self.last_now = Some(now);

        let locked = self.director.scroll_locked(now);
        let scroll = self.director.enforce_scroll(scroll, now);
        let input = FrameInput {
            now,
            dt,
            pointer,
            scroll,
            viewport,
        };

        let background = self.background.update(&input);
        let left_image = self.left_image.update(&input);
        let right_image = self.right_image.update(&input);
        let frame = self.frame.update(&input);
        let ember = self.ember.update(&input);
        let mouse_light = self.mouse_light.update(&input);
        let night_sky = self.night_sky.update(&input);
        let white_paper = self.white_paper.update(&input);

        let (dust_size, dust_opacity) = dust_appearance(&self.director, now);
        if dust_opacity > 0.0 {
            let half = Vec2::new(viewport.width, viewport.height) * 0.5;
            self.dust
                .update(pointer * half, now as f32, dt, self.director.is_started());
        }

        let overlay = self.overlay.update(scroll, dt, &self.director, now);

        SceneFrame {
            background,
            left_image,
            right_image,
            frame,
            ember,
            mouse_light,
            night_sky,
            white_paper,
            dust_size,
            dust_opacity,
            overlay,
            scroll_override: locked.then_some(scroll),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::landing()
    }
}
