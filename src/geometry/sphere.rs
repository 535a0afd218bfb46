use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Sphere {
        Sphere { center, radius }
    }

    /// Spheres with a non-positive or non-finite radius never report a hit.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite()) || !self.center.is_finite()
    }

    /// Both parameters at which `r` crosses the sphere, smaller first.
    pub fn roots(&self, r: Ray) -> Option<(f64, f64)> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        if a == 0.0 {
            return None;
        }
        let half_b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        Some((
            (-half_b - discriminant_sqrt) / a,
            (-half_b + discriminant_sqrt) / a,
        ))
    }

    fn record_at(&self, r: Ray, time: f64) -> HitRecord {
        let point = r.point_at_parameter(time);
        let outward_normal = (point - self.center) / self.radius;
        HitRecord::new(r, time, point, outward_normal)
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        if self.is_degenerate() {
            return None;
        }
        let (near, far) = self.roots(r)?;
        if near >= t0 && near <= t1 {
            return Some(self.record_at(r, near));
        }
        if far >= t0 && far <= t1 {
            return Some(self.record_at(r, far));
        }
        None
    }
}
