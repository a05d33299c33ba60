/// Easing curves mapping normalized time in [0, 1] to eased progress.
///
/// Every curve except [`Ease::OutBack`] stays within [0, 1] and returns exactly
/// 0 and 1 at the endpoints. `OutBack` overshoots on purpose and still lands
/// on 1 at t = 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// GSAP `power1.inOut`; same curve as `InOutQuad`.
    Power1InOut,
    /// GSAP `power2.in`; cubic.
    Power2In,
    /// GSAP `power2.out`; cubic.
    Power2Out,
    /// GSAP `power3.out`; quartic.
    Power3Out,
    OutBack,
}

const BACK_OVERSHOOT: f32 = 1.70158;

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad | Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic | Self::Power2In => t * t * t,
            Self::OutCubic | Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::OutBack => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
        }
    }

    /// Whether the curve may leave [0, 1] between the endpoints.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::OutBack)
    }

    pub const ALL: [Ease; 12] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::OutBack,
    ];
}
