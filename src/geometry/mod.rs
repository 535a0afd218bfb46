use crate::math::{Point3, Ray, Vec3};

mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::{hit_triangle, Triangle};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f64,
    pub point: Point3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    /// Whether the ray struck the side the outward normal points toward.
    pub front_face: bool,
}

impl HitRecord {
    /// Builds a record from the primitive's outward geometric normal, flipping it
    /// when the ray arrives from behind so the stored normal opposes the ray.
    pub fn new(r: Ray, time: f64, point: Point3, outward_normal: Vec3) -> Self {
        let front_face = r.direction * outward_normal < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        HitRecord {
            time,
            point,
            normal,
            front_face,
        }
    }
}

pub trait Primitive {
    /// Nearest intersection with `t0 <= t <= t1`, if any.
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.intersect(r, t0, t1),
            PrimitiveEnum::Triangle(inner) => inner.intersect(r, t0, t1),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> Self {
        PrimitiveEnum::Sphere(sphere)
    }
}

impl From<Triangle> for PrimitiveEnum {
    fn from(triangle: Triangle) -> Self {
        PrimitiveEnum::Triangle(triangle)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_face_normal_from_outside() {
        let r = Ray::new(Point3::new(0.0, 0.0, 2.0), -Vec3::Z);
        let record = HitRecord::new(r, 1.0, Point3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(record.front_face);
        assert_eq!(record.normal, Vec3::Z);
    }

    #[test]
    fn test_face_normal_from_inside_is_flipped() {
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        let record = HitRecord::new(r, 1.0, Point3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(!record.front_face);
        assert_eq!(record.normal, -Vec3::Z);
        assert!(r.direction * record.normal <= 0.0);
    }

    #[test]
    fn test_enum_dispatch() {
        let r = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let sphere: PrimitiveEnum = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5).into();
        let triangle: PrimitiveEnum = Triangle::new(
            Point3::new(-2.0, -0.5, -3.0),
            Point3::new(2.0, -0.5, -3.0),
            Point3::new(0.0, 1.0, -3.0),
        )
        .into();
        let sphere_hit = sphere.intersect(r, 0.0, f64::INFINITY).unwrap();
        let triangle_hit = triangle.intersect(r, 0.0, f64::INFINITY).unwrap();
        assert!((sphere_hit.time - 0.5).abs() < 1e-12);
        assert!((triangle_hit.time - 3.0).abs() < 1e-12);
    }
}
