/// Exponential glide of the displayed scroll position toward the latest
/// browser scroll target.
///
/// Raw scroll events arrive in jumps; feeding them straight into the scrub
/// timelines reads as stepped camera motion. Each tick the displayed value
/// decays toward the target, and snaps once within half a pixel.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    rate: f32,
}

impl SmoothScroll {
    /// `rate_per_sec` is the decay rate; higher settles faster.
    pub fn new(rate_per_sec: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            rate: rate_per_sec.max(0.1),
        }
    }

    /// Snap both value and target, e.g. when scroll is reset to the top.
    pub fn jump_to(&mut self, y: f32) {
        self.current = y;
        self.target = y;
    }

    pub fn set_target(&mut self, y: f32) {
        self.target = y;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Decay toward the target. Call once per frame; returns the displayed
    /// scroll position.
    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        let alpha = 1.0 - (-self.rate * dt_sec.max(0.0)).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < 0.5 {
            self.current = self.target;
        }
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
