use std::ops::{Add, Mul};

use super::Vec3;

/// Largest multiplier that maps a channel of exactly 1.0 to 255 rather than 256.
pub const QUANTIZE_SCALE: f64 = 255.999;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);
    pub const RED: RGBColor = RGBColor::new(1.0, 0.0, 0.0);
    pub const GREEN: RGBColor = RGBColor::new(0.0, 1.0, 0.0);
}

impl RGBColor {
    /// `(1 - t) * self + t * other`
    pub fn lerp(self, other: RGBColor, t: f64) -> RGBColor {
        (1.0 - t) * self + t * other
    }

    /// `floor(255.999 * c)` per channel, with the channel clamped to `[0, 1]` first.
    /// NaN and infinite channels map to 0.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        ]
    }

    pub fn as_f32_tuple(&self) -> (f32, f32, f32) {
        (self.r as f32, self.g as f32, self.b as f32)
    }
}

fn quantize_channel(c: f64) -> u8 {
    if !c.is_finite() {
        return 0;
    }
    // float to int casts truncate, and the clamp keeps the product below 256
    (QUANTIZE_SCALE * c.clamp(0.0, 1.0)) as u8
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f64 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl From<Vec3> for RGBColor {
    fn from(v: Vec3) -> RGBColor {
        RGBColor::new(v.x, v.y, v.z)
    }
}
