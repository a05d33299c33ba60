//! Scroll-driven layout for the HTML overlay (logo header and menu) and the
//! intro hint. Produces percentages and flags only; the web layer turns them
//! into inline styles.

use crate::constants::*;
use crate::director::Director;
use crate::ease::Ease;
use crate::scroll::map_range;
use crate::sequence::Effect;
use crate::spring::{Spring, SpringConfig};

pub const OVERLAY_SPRING: SpringConfig = SpringConfig::new(
    OVERLAY_SPRING_STIFFNESS,
    OVERLAY_SPRING_DAMPING,
    OVERLAY_SPRING_MASS,
);

const HINT_PULSE_START_SEC: f64 = 3.0;
const HINT_PULSE_PERIOD_SEC: f64 = 3.0;
const HINT_PULSE_DEPTH: f32 = 0.5;

/// Header placement, all positions in percent of the viewport and
/// translations in percent of the element itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderLayout {
    pub top_pct: f32,
    pub left_pct: f32,
    pub x_pct: f32,
    pub y_pct: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuLayout {
    pub top_pct: f32,
    pub left_pct: f32,
    pub x_pct: f32,
    pub y_pct: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTheme {
    LightOnDark,
    DarkOnLight,
}

impl OverlayTheme {
    pub fn for_scroll(scroll: f32) -> Self {
        if scroll > DARK_SECTION_PX {
            OverlayTheme::DarkOnLight
        } else {
            OverlayTheme::LightOnDark
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            OverlayTheme::LightOnDark => "theme-light",
            OverlayTheme::DarkOnLight => "theme-dark",
        }
    }
}

pub fn header_layout(smoothed_scroll: f32) -> HeaderLayout {
    let d = (OVERLAY_LAYOUT_RANGE.start, OVERLAY_LAYOUT_RANGE.end);
    HeaderLayout {
        top_pct: map_range(smoothed_scroll, d, (35.0, 5.0)),
        left_pct: map_range(smoothed_scroll, d, (50.0, 5.0)),
        x_pct: map_range(smoothed_scroll, d, (-50.0, 0.0)),
        y_pct: map_range(smoothed_scroll, d, (-50.0, 0.0)),
        scale: map_range(smoothed_scroll, d, (1.0, 0.65)),
    }
}

pub fn menu_layout(smoothed_scroll: f32) -> MenuLayout {
    let d = (OVERLAY_LAYOUT_RANGE.start, OVERLAY_LAYOUT_RANGE.end);
    MenuLayout {
        top_pct: map_range(smoothed_scroll, d, (45.0, 50.0)),
        left_pct: map_range(smoothed_scroll, d, (50.0, 5.0)),
        x_pct: map_range(smoothed_scroll, d, (-50.0, 0.0)),
        y_pct: map_range(smoothed_scroll, d, (10.0, -50.0)),
    }
}

/// Intro hint opacity on the page clock: fades in after load, pulses, and
/// fades out with the hint cue once the experience starts.
pub fn hint_opacity(director: &Director, now: f64) -> f32 {
    let fade_in = ((now - HINT_INTRO_DELAY_SEC) / HINT_INTRO_FADE_SEC).clamp(0.0, 1.0) as f32;
    let mut opacity = Ease::InOutQuad.apply(fade_in);
    if now > HINT_PULSE_START_SEC {
        let phase = ((now - HINT_PULSE_START_SEC) / HINT_PULSE_PERIOD_SEC).fract() as f32;
        let dip = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        opacity *= 1.0 - HINT_PULSE_DEPTH * dip;
    }
    let fade_out = director.cue_progress(Effect::HintFadeOut, now);
    opacity * (1.0 - Ease::InOutQuad.apply(fade_out))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayFrame {
    pub header: HeaderLayout,
    pub menu: MenuLayout,
    /// Whether the overlay content exists at all (its cue has fired).
    pub visible: bool,
    pub opacity: f32,
    pub is_scrolled: bool,
    pub theme: OverlayTheme,
    pub hint_opacity: f32,
}

#[derive(Clone, Debug)]
pub struct OverlayChoreographer {
    spring: Spring,
}

impl OverlayChoreographer {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(OVERLAY_SPRING),
        }
    }

    pub fn update(&mut self, scroll: f32, dt: f32, director: &Director, now: f64) -> OverlayFrame {
        let smoothed = self.spring.step(scroll, dt);
        let visible = director.has_cue_started(Effect::OverlayFadeIn, now);
        let opacity = if visible {
            Ease::InOutQuad.apply(director.cue_progress(Effect::OverlayFadeIn, now))
        } else {
            0.0
        };
        OverlayFrame {
            header: header_layout(smoothed),
            menu: menu_layout(smoothed),
            visible,
            opacity,
            is_scrolled: scroll > SCROLLED_FLAG_PX,
            theme: OverlayTheme::for_scroll(scroll),
            hint_opacity: hint_opacity(director, now),
        }
    }
}

impl Default for OverlayChoreographer {
    fn default() -> Self {
        Self::new()
    }
}
