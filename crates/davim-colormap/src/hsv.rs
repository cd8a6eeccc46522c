//! HSV to RGB conversion.

use glam::Vec3;

/// A color in hue/saturation/value space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees. Any value; reduced into [0, 360) on conversion.
    pub hue: f32,
    /// Saturation, clamped into [0, 1] on conversion.
    pub saturation: f32,
    /// Value, clamped into [0, 1] on conversion.
    pub value: f32,
}

impl Hsv {
    /// Creates a new HSV color.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Fully saturated, full-value color of the given hue.
    pub fn pure(hue: f32) -> Self {
        Self::new(hue, 1.0, 1.0)
    }

    /// Converts to normalized RGB.
    pub fn to_rgb(self) -> Vec3 {
        hsv_to_rgb(self)
    }
}

impl From<Hsv> for Vec3 {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

/// Clamps into [0, 1], sending NaN to 0.
fn unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Converts an HSV color to RGB with every channel in [0, 1].
///
/// The hue is reduced modulo 360 before selecting one of six 60 degree
/// sectors, so hues outside [0, 360) (including negative ones) wrap around.
/// Saturation and value are clamped rather than rejected.
pub fn hsv_to_rgb(hsv: Hsv) -> Vec3 {
    let s = unit(hsv.saturation);
    let v = unit(hsv.value);

    if s == 0.0 {
        return Vec3::splat(v);
    }

    let hue = if hsv.hue.is_finite() { hsv.hue } else { 0.0 };
    // rem_euclid can round up to exactly 360 for tiny negative hues; the
    // sector wrap below folds that back onto sector 0.
    let h = hue.rem_euclid(360.0) / 60.0;
    let floor = h.floor();
    let f = h - floor;
    let sector = (floor as u32) % 6;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}
