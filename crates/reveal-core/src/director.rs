use crate::constants::SCROLL_LOCK_ANCHOR_PX;
use crate::sequence::{ActivationSequence, Effect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// Terminal. `at` is the activation time on the frame clock (seconds).
    Started { at: f64 },
}

/// Owns the "experience started" flag and turns it into per-effect cue times.
///
/// There is no path back to `Idle`; a replay needs a page reload.
#[derive(Clone, Debug)]
pub struct Director {
    phase: Phase,
    sequence: ActivationSequence,
}

impl Director {
    pub fn new(sequence: ActivationSequence) -> Self {
        Self {
            phase: Phase::Idle,
            sequence,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Started { .. })
    }

    pub fn sequence(&self) -> &ActivationSequence {
        &self.sequence
    }

    /// Idle -> Started. Returns false (and changes nothing) when already
    /// started.
    pub fn activate(&mut self, now: f64) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Started { at: now };
                log::info!("[director] experience started at {:.3}s", now);
                true
            }
            Phase::Started { .. } => false,
        }
    }

    pub fn activation_time(&self) -> Option<f64> {
        match self.phase {
            Phase::Started { at } => Some(at),
            Phase::Idle => None,
        }
    }

    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.activation_time().map(|at| now - at)
    }

    /// Absolute frame-clock time at which `effect` begins.
    pub fn cue_start(&self, effect: Effect) -> Option<f64> {
        let at = self.activation_time()?;
        self.sequence.cue(effect).map(|c| at + c.start_offset)
    }

    /// Seconds since `effect` began; negative while it is still pending.
    pub fn cue_time(&self, effect: Effect, now: f64) -> Option<f64> {
        self.cue_start(effect).map(|start| now - start)
    }

    pub fn has_cue_started(&self, effect: Effect, now: f64) -> bool {
        self.cue_time(effect, now).map(|t| t >= 0.0).unwrap_or(false)
    }

    /// Linear progress through the cue's duration (0 while idle or pending).
    pub fn cue_progress(&self, effect: Effect, now: f64) -> f32 {
        let Some(cue) = self.sequence.cue(effect) else {
            return 0.0;
        };
        let Some(t) = self.cue_time(effect, now) else {
            return 0.0;
        };
        if t < 0.0 {
            return 0.0;
        }
        if cue.duration <= 0.0 {
            return 1.0;
        }
        (t / cue.duration).clamp(0.0, 1.0) as f32
    }

    /// Scrolling is held while idle and until the unlock cue fires.
    /// Without an unlock cue the lock lifts at activation.
    pub fn scroll_locked(&self, now: f64) -> bool {
        match self.sequence.cue(Effect::ScrollUnlock) {
            Some(_) => !self.has_cue_started(Effect::ScrollUnlock, now),
            None => !self.is_started(),
        }
    }

    /// The scroll offset the page is allowed to have right now.
    pub fn enforce_scroll(&self, requested: f32, now: f64) -> f32 {
        if self.scroll_locked(now) {
            SCROLL_LOCK_ANCHOR_PX
        } else {
            requested
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new(ActivationSequence::landing())
    }
}
