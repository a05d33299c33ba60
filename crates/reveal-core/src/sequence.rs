//! The one authoritative description of what happens after activation.
//!
//! Each effect reads its start offset and duration from here instead of
//! carrying its own delay constant.

use crate::constants::*;
use crate::error::{RevealError, RevealResult};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    PaperBurn,
    EmberExit,
    DustDispersal,
    HintFadeOut,
    LeftImage,
    RightImage,
    OverlayFadeIn,
    FrameFadeIn,
    ScrollUnlock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub effect: Effect,
    pub start_offset: f64,
    pub duration: f64,
}

impl Cue {
    pub const fn new(effect: Effect, start_offset: f64, duration: f64) -> Self {
        Self {
            effect,
            start_offset,
            duration,
        }
    }

    pub fn end(&self) -> f64 {
        self.start_offset + self.duration
    }
}

#[derive(Clone, Debug)]
pub struct ActivationSequence {
    cues: SmallVec<[Cue; 12]>,
}

impl ActivationSequence {
    /// Validate and order a cue list by start offset (ties keep input order).
    pub fn new(cues: impl IntoIterator<Item = Cue>) -> RevealResult<Self> {
        let mut out: SmallVec<[Cue; 12]> = SmallVec::new();
        for cue in cues {
            if !cue.start_offset.is_finite() || cue.start_offset < 0.0 {
                return Err(RevealError::sequence(format!(
                    "{:?} has invalid start offset {}",
                    cue.effect, cue.start_offset
                )));
            }
            if !cue.duration.is_finite() || cue.duration < 0.0 {
                return Err(RevealError::sequence(format!(
                    "{:?} has invalid duration {}",
                    cue.effect, cue.duration
                )));
            }
            if out.iter().any(|c| c.effect == cue.effect) {
                return Err(RevealError::sequence(format!(
                    "{:?} is cued twice",
                    cue.effect
                )));
            }
            out.push(cue);
        }
        out.sort_by(|a, b| a.start_offset.total_cmp(&b.start_offset));
        Ok(Self { cues: out })
    }

    /// The landing page choreography.
    pub fn landing() -> Self {
        let cues: SmallVec<[Cue; 12]> = SmallVec::from_slice(&[
            Cue::new(Effect::PaperBurn, 0.0, REVEAL_DURATION_SEC),
            Cue::new(Effect::EmberExit, 0.0, EMBER_EXIT_SEC),
            Cue::new(Effect::DustDispersal, 0.0, DUST_EXIT_SEC),
            Cue::new(Effect::HintFadeOut, 0.0, HINT_FADE_OUT_SEC),
            Cue::new(Effect::LeftImage, LEFT_IMAGE_DELAY_SEC, IMAGE_ENTRY_SEC),
            Cue::new(Effect::RightImage, RIGHT_IMAGE_DELAY_SEC, IMAGE_ENTRY_SEC),
            Cue::new(Effect::OverlayFadeIn, OVERLAY_DELAY_SEC, OVERLAY_FADE_SEC),
            Cue::new(Effect::FrameFadeIn, FRAME_DELAY_SEC, FRAME_FADE_SEC),
            Cue::new(Effect::ScrollUnlock, SCROLL_LOCK_SEC, 0.0),
        ]);
        Self { cues }
    }

    pub fn cue(&self, effect: Effect) -> Option<Cue> {
        self.cues.iter().copied().find(|c| c.effect == effect)
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// When the last cue finishes, measured from activation.
    pub fn total_duration(&self) -> f64 {
        self.cues.iter().map(Cue::end).fold(0.0, f64::max)
    }

    /// Effects whose start offset has been reached `elapsed` seconds after
    /// activation.
    pub fn started_by(&self, elapsed: f64) -> impl Iterator<Item = Effect> + '_ {
        self.cues
            .iter()
            .take_while(move |c| c.start_offset <= elapsed)
            .map(|c| c.effect)
    }
}

impl Default for ActivationSequence {
    fn default() -> Self {
        Self::landing()
    }
}
