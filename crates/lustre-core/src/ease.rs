/// Easing curves applied to track progress.
///
/// The power family matches the conventional `power1`..`power4` curves the
/// page animations were authored with; `ExpoOut` is the glide used for smooth
/// scrolling. `PowerIn(1)` is quadratic, `PowerIn(4)` quintic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    ExpoOut,
}

impl Ease {
    /// Map raw progress to eased progress. Input is clamped to [0,1] and the
    /// endpoints pass through exactly for every curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Ease::Linear => t,
            Ease::PowerIn(p) => t.powi(exponent(p)),
            Ease::PowerOut(p) => 1.0 - (1.0 - t).powi(exponent(p)),
            Ease::PowerInOut(p) => {
                let n = exponent(p);
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
                }
            }
            Ease::ExpoOut => 1.0 - (2.0_f32).powf(-10.0 * t),
        }
    }
}

#[inline]
fn exponent(p: u8) -> i32 {
    // power1 == quadratic
    p as i32 + 1
}
