use glam::Vec3;

/// Display-encoded sRGB color, components in [0,1].
///
/// Interpolation happens in linear space: both endpoints are gamma-decoded,
/// lerped component-wise, and the result re-encoded for display. Lerping the
/// encoded values directly muddies mid-transition hues.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Srgb(pub [f32; 3]);

impl Srgb {
    pub const WHITE: Srgb = Srgb([1.0, 1.0, 1.0]);

    /// Build from a 24-bit hex literal, e.g. `Srgb::hex(0xF70DB1)`.
    pub const fn hex(rgb: u32) -> Self {
        Srgb([
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        ])
    }

    /// Decode to linear-light components.
    pub fn to_linear(self) -> Vec3 {
        Vec3::new(decode(self.0[0]), decode(self.0[1]), decode(self.0[2]))
    }

    /// Re-encode linear-light components for display.
    pub fn from_linear(linear: Vec3) -> Self {
        Srgb([encode(linear.x), encode(linear.y), encode(linear.z)])
    }

    /// Linear-space interpolation. Endpoints pass through untouched, so a
    /// color already at a keyframe never drifts through the transfer-curve
    /// round trip.
    pub fn lerp(a: Srgb, b: Srgb, t: f32) -> Srgb {
        if t <= 0.0 {
            return a;
        }
        if t >= 1.0 {
            return b;
        }
        Srgb::from_linear(a.to_linear().lerp(b.to_linear(), t))
    }
}

#[inline]
fn decode(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn encode(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
