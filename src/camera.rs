use crate::math::{Point3, Ray, Vec3};

/// Axis aligned pinhole camera looking down `-z`, described by the viewport rectangle
/// its rays pass through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub lower_left_corner: Point3,
}

impl Camera {
    pub fn new(
        origin: Point3,
        aspect_ratio: f64,
        viewport_height: f64,
        focal_length: f64,
    ) -> Camera {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);
        Camera {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn from_basis(
        origin: Point3,
        horizontal: Vec3,
        vertical: Vec3,
        lower_left_corner: Point3,
    ) -> Camera {
        Camera {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        // u and v range from 0 to 1, (0, 0) is the lower left corner of the viewport.
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point3::ORIGIN, 16.0 / 9.0, 2.0, 1.0)
    }
}
