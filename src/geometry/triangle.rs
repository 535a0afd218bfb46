use crate::geometry::{HitRecord, Primitive};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Triangle {
        Triangle { v0, v1, v2 }
    }

    pub fn centroid(&self) -> Point3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Unit normal of the supporting plane, wound `v0 -> v1 -> v2`.
    /// Zero area triangles have no normal.
    pub fn outward_normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).normalized()
    }

    /// Möller–Trumbore test. Returns `(t, b1, b2)` when the ray's supporting line
    /// (for `t >= 0`) passes through the triangle. `b1` and `b2` weight `v1` and `v2`,
    /// `1 - b1 - b2` weights `v0`.
    ///
    /// A ray parallel to the plane, a triangle with zero area or a zero direction is a
    /// miss. The parallel tolerance scales with `|S1| |E1|`, so the result doesn't depend
    /// on the size of the triangle or the length of the direction.
    pub fn barycentric(&self, r: Ray) -> Option<(f64, f64, f64)> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let s = r.origin - self.v0;
        let s1 = r.direction.cross(e2);
        let s2 = s.cross(e1);

        let det = s1 * e1;
        if !(det.abs() > f64::EPSILON * s1.norm() * e1.norm()) {
            return None;
        }
        let coeff = 1.0 / det;
        if !coeff.is_finite() {
            return None;
        }
        let t = coeff * (s2 * e2);
        let b1 = coeff * (s1 * s);
        let b2 = coeff * (s2 * r.direction);

        if t >= 0.0 && b1 >= 0.0 && b2 >= 0.0 && (1.0 - b1 - b2) >= 0.0 {
            Some((t, b1, b2))
        } else {
            None
        }
    }
}

/// Boolean form of [`Triangle::barycentric`] for callers that only need to know
/// whether the ray passes through the triangle.
pub fn hit_triangle(v0: Point3, v1: Point3, v2: Point3, r: Ray) -> bool {
    Triangle::new(v0, v1, v2).barycentric(r).is_some()
}

impl Primitive for Triangle {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let (time, _, _) = self.barycentric(r)?;
        if time < t0 || time > t1 {
            return None;
        }
        let point = r.point_at_parameter(time);
        Some(HitRecord::new(r, time, point, self.outward_normal()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn reference_triangle() -> Triangle {
        Triangle::new(
            Point3::new(-2.0, -0.5, -1.0),
            Point3::new(2.0, -0.5, -1.0),
            Point3::new(0.0, 1.0, -1.0),
        )
    }

    #[test]
    fn test_centroid_hits() {
        let triangle = reference_triangle();
        let centroid = triangle.centroid();
        let r = Ray::new(Point3::ORIGIN, centroid - Point3::ORIGIN);
        assert!(hit_triangle(triangle.v0, triangle.v1, triangle.v2, r));

        let (t, b1, b2) = triangle.barycentric(r).unwrap();
        assert!((t - 1.0).abs() < 1e-12);
        assert!((b1 - 1.0 / 3.0).abs() < 1e-12);
        assert!((b2 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_barycentric_weights_reconstruct_point() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::new(0.3, 0.1, 1.0), Vec3::new(-0.1, 0.05, -1.0));
        let (t, b1, b2) = triangle.barycentric(r).unwrap();
        let p = (1.0 - b1 - b2) * triangle.v0 + b1 * triangle.v1 + b2 * triangle.v2;
        assert!((p - r.point_at_parameter(t)).norm() < 1e-12);
    }

    #[test]
    fn test_outside_misses() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(5.0, 5.0, -1.0));
        assert!(!hit_triangle(triangle.v0, triangle.v1, triangle.v2, r));
        assert!(triangle.intersect(r, 0.0, INF).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::ORIGIN, Vec3::Z);
        assert!(triangle.barycentric(r).is_none());
    }

    #[test]
    fn test_parallel_ray_is_a_miss() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::X);
        assert!(triangle.barycentric(r).is_none());
        let r = Ray::new(Point3::ORIGIN, Vec3::Y);
        assert!(triangle.intersect(r, 0.0, INF).is_none());
    }

    #[test]
    fn test_degenerate_triangle_is_a_miss() {
        let collinear = Triangle::new(
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
        );
        let r = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(collinear.intersect(r, 0.0, INF).is_none());
    }

    #[test]
    fn test_tiny_triangle_hits() {
        let reference = reference_triangle();
        let scale = |p: Point3| Point3::new(p.x * 1e-9, p.y * 1e-9, p.z);
        let tiny = Triangle::new(scale(reference.v0), scale(reference.v1), scale(reference.v2));
        let r = Ray::new(Point3::ORIGIN, tiny.centroid() - Point3::ORIGIN);

        let (t, b1, b2) = tiny.barycentric(r).unwrap();
        assert!((t - 1.0).abs() < 1e-9);
        assert!((b1 - 1.0 / 3.0).abs() < 1e-6);
        assert!((b2 - 1.0 / 3.0).abs() < 1e-6);
        assert!(tiny.intersect(r, 0.001, INF).is_some());
    }

    #[test]
    fn test_short_direction_hits() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::ORIGIN, 1e-17 * (triangle.centroid() - Point3::ORIGIN));
        assert!(hit_triangle(triangle.v0, triangle.v1, triangle.v2, r));

        let isect = triangle.intersect(r, 0.001, INF).unwrap();
        assert!((isect.point - triangle.centroid()).norm() < 1e-9);
        assert!((isect.normal - Vec3::Z).norm() < 1e-12);

        // still a miss once the direction is zero
        assert!(triangle.barycentric(Ray::new(Point3::ORIGIN, Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_normal_faces_ray_from_either_side() {
        let triangle = reference_triangle();
        // winding makes the outward normal +z
        assert!((triangle.outward_normal() - Vec3::Z).norm() < 1e-12);

        let front = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let isect = triangle.intersect(front, 0.0, INF).unwrap();
        assert!(isect.front_face);
        assert!((isect.normal - Vec3::Z).norm() < 1e-12);
        assert!((isect.point - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-12);

        let back = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::Z);
        let isect = triangle.intersect(back, 0.0, INF).unwrap();
        assert!(!isect.front_face);
        assert!((isect.normal - -Vec3::Z).norm() < 1e-12);
        assert!(back.direction * isect.normal <= 0.0);
    }

    #[test]
    fn test_interval_rejects_hit() {
        let triangle = reference_triangle();
        let r = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(triangle.intersect(r, 0.0, 0.5).is_none());
        assert!(triangle.intersect(r, 1.5, INF).is_none());
        assert!(triangle.intersect(r, 1.0, 1.0).is_some());
    }
}
