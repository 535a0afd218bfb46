use crate::geometry::Primitive;
use crate::math::{RGBColor, Ray, Vec3};

/// Lower bound used for primary ray queries, keeps hits at floating point zero out.
pub const DEFAULT_T_MIN: f64 = 0.001;

pub const SKY_BLUE: RGBColor = RGBColor::new(0.5, 0.7, 1.0);

/// Maps each component of a unit normal from `[-1, 1]` to `[0, 1]`.
pub fn normal_color(normal: Vec3) -> RGBColor {
    RGBColor::from(0.5 * (normal + Vec3::ONE))
}

/// Vertical gradient from white (looking straight down) to sky blue (straight up).
pub fn background(direction: Vec3) -> RGBColor {
    let unit_direction = direction.normalized();
    let t = 0.5 * (unit_direction.y + 1.0);
    RGBColor::WHITE.lerp(SKY_BLUE, t)
}

pub fn ray_color<P: Primitive + ?Sized>(r: Ray, scene: &P, t_min: f64) -> RGBColor {
    match scene.intersect(r, t_min, f64::INFINITY) {
        Some(isect) => normal_color(isect.normal),
        None => background(r.direction),
    }
}
