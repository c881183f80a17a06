use glam::Vec3;

use crate::color::Srgb;
use crate::ease::Ease;
use crate::error::AnimError;

/// One interpolated output value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackValue {
    Scalar(f32),
    Vector(Vec3),
    Color(Srgb),
}

impl TrackValue {
    pub fn kind(&self) -> &'static str {
        match self {
            TrackValue::Scalar(_) => "scalar",
            TrackValue::Vector(_) => "vector",
            TrackValue::Color(_) => "color",
        }
    }
}

/// A keyframe pair sampled by a [0,1] progress value.
///
/// While an override is active the interpolated output is ignored and the
/// externally assigned value wins; a user color pick suppresses the
/// scroll-driven lerp until the override is cleared. Tracks are created once
/// at page setup and live for the whole session.
#[derive(Clone, Debug)]
pub struct Track {
    id: &'static str,
    start: TrackValue,
    end: TrackValue,
    ease: Ease,
    override_value: Option<TrackValue>,
}

impl Track {
    /// Endpoint kinds must match; a mismatch is a configuration error raised
    /// here, never at update time.
    pub fn new(
        id: &'static str,
        start: TrackValue,
        end: TrackValue,
        ease: Ease,
    ) -> Result<Self, AnimError> {
        if start.kind() != end.kind() {
            return Err(AnimError::KindMismatch {
                id,
                start: start.kind(),
                end: end.kind(),
            });
        }
        Ok(Self {
            id,
            start,
            end,
            ease,
            override_value: None,
        })
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_color(&self) -> bool {
        matches!(self.start, TrackValue::Color(_))
    }

    /// Sample the track. Progress is clamped and eased; vectors interpolate
    /// component-wise and colors in linear space.
    pub fn update(&self, progress: f32) -> TrackValue {
        if let Some(v) = self.override_value {
            return v;
        }
        let t = self.ease.apply(progress);
        // endpoints pass through untouched; no float drift at the keyframes
        if t == 0.0 {
            return self.start;
        }
        if t == 1.0 {
            return self.end;
        }
        match (self.start, self.end) {
            (TrackValue::Scalar(a), TrackValue::Scalar(b)) => TrackValue::Scalar(a + (b - a) * t),
            (TrackValue::Vector(a), TrackValue::Vector(b)) => TrackValue::Vector(a + (b - a) * t),
            (TrackValue::Color(a), TrackValue::Color(b)) => TrackValue::Color(Srgb::lerp(a, b, t)),
            // endpoints are verified same-kind at construction
            _ => self.start,
        }
    }

    /// Pin the track to an externally assigned value. Kind-checked against
    /// the keyframes so a scalar track can never start emitting colors.
    pub fn set_override(&mut self, value: TrackValue) -> Result<(), AnimError> {
        if value.kind() != self.start.kind() {
            return Err(AnimError::KindMismatch {
                id: self.id,
                start: self.start.kind(),
                end: value.kind(),
            });
        }
        self.override_value = Some(value);
        Ok(())
    }

    pub fn clear_override(&mut self) {
        self.override_value = None;
    }

    pub fn override_active(&self) -> bool {
        self.override_value.is_some()
    }
}
