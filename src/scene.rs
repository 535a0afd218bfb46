use crate::geometry::{HitRecord, Primitive, PrimitiveEnum, Sphere, Triangle};
use crate::math::{Point3, Ray};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<PrimitiveEnum>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            primitives: Vec::new(),
        }
    }

    /// The sphere floating in front of the camera with a triangle behind it.
    pub fn default_scene() -> Self {
        Scene::from(vec![
            PrimitiveEnum::Sphere(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)),
            PrimitiveEnum::Triangle(Triangle::new(
                Point3::new(-2.0, -0.5, -1.0),
                Point3::new(2.0, -0.5, -1.0),
                Point3::new(0.0, 1.0, -1.0),
            )),
        ])
    }

    pub fn push(&mut self, primitive: impl Into<PrimitiveEnum>) {
        self.primitives.push(primitive.into());
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveEnum> {
        self.primitives.iter()
    }
}

impl From<Vec<PrimitiveEnum>> for Scene {
    fn from(primitives: Vec<PrimitiveEnum>) -> Self {
        Scene { primitives }
    }
}

impl Primitive for Scene {
    fn intersect(&self, r: Ray, t0: f64, t1: f64) -> Option<HitRecord> {
        let mut nearest_intersection: Option<HitRecord> = None;
        let mut nearest_intersection_time = t1;

        for prim in self.primitives.iter() {
            // the bound only shrinks, so later primitives can only win by being closer
            if let Some(intersection) = prim.intersect(r, t0, nearest_intersection_time) {
                if nearest_intersection.is_none() || intersection.time < nearest_intersection_time
                {
                    nearest_intersection_time = intersection.time;
                    nearest_intersection = Some(intersection);
                }
            }
        }
        nearest_intersection
    }
}
