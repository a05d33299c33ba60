use crate::error::{RevealError, RevealResult};

/// Smallest span a scroll range is divided by; keeps a zero-length range from
/// producing NaN progress.
pub const MIN_RANGE_SPAN: f32 = 1e-3;

/// A `[start, end]` window of scroll offsets (CSS pixels) that drives one
/// effect from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Like [`ScrollRange::new`] but rejects ranges that run backwards or are
    /// not finite.
    pub fn checked(start: f32, end: f32) -> RevealResult<Self> {
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(RevealError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// `clamp((scroll - start) / (end - start), 0, 1)`; pure in `scroll`.
    pub fn progress(&self, scroll: f32) -> f32 {
        scroll_progress(scroll, self.start, self.end)
    }
}

pub fn scroll_progress(scroll: f32, start: f32, end: f32) -> f32 {
    if scroll.is_nan() {
        return 0.0;
    }
    let span = (end - start).max(MIN_RANGE_SPAN);
    ((scroll - start) / span).clamp(0.0, 1.0)
}

/// Clamp `input` to the domain and map it linearly onto the range.
pub fn map_range(input: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let t = scroll_progress(input, domain.0, domain.1);
    range.0 + (range.1 - range.0) * t
}
