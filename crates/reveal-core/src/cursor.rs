use crate::constants::*;
use crate::ease::Ease;
use crate::tween::Animated;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Click,
}

impl CursorVariant {
    pub fn blob_scale(self) -> f32 {
        match self {
            CursorVariant::Hover => CURSOR_HOVER_SCALE,
            CursorVariant::Default | CursorVariant::Click => 1.0,
        }
    }
}

/// Snapshot of both cursor elements, positions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub blob: Vec2,
    pub blob_scale: f32,
    pub opacity: f32,
}

/// A small dot pinned to the pointer and a soft blob trailing behind it.
/// Both stay hidden until the first pointer move.
#[derive(Clone, Debug)]
pub struct CustomCursor {
    dot: Vec2,
    blob: Animated<Vec2>,
    scale: Animated<f32>,
    opacity: Animated<f32>,
    variant: CursorVariant,
    seen_pointer: bool,
}

impl CustomCursor {
    pub fn new() -> Self {
        Self {
            dot: Vec2::ZERO,
            blob: Animated::new(Vec2::ZERO),
            scale: Animated::new(1.0),
            opacity: Animated::new(0.0),
            variant: CursorVariant::Default,
            seen_pointer: false,
        }
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn on_pointer_move(&mut self, position: Vec2, now: f64) {
        self.dot = position;
        if !self.seen_pointer {
            self.seen_pointer = true;
            self.blob.set(position);
            self.opacity.to(1.0, now, CURSOR_FADE_IN_SEC, Ease::OutQuad);
            return;
        }
        self.blob
            .to(position, now, CURSOR_BLOB_FOLLOW_SEC, Ease::Power2Out);
    }

    /// Returns true when the variant changed.
    pub fn set_variant(&mut self, variant: CursorVariant, now: f64) -> bool {
        if variant == self.variant {
            return false;
        }
        self.variant = variant;
        self.scale
            .to(variant.blob_scale(), now, CURSOR_SCALE_SEC, Ease::OutQuad);
        true
    }

    pub fn update(&mut self, now: f64) -> CursorFrame {
        CursorFrame {
            dot: self.dot,
            blob: self.blob.update(now),
            blob_scale: self.scale.update(now),
            opacity: self.opacity.update(now),
        }
    }

    pub fn cancel(&mut self) {
        self.blob.cancel();
        self.scale.cancel();
        self.opacity.cancel();
    }
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}
