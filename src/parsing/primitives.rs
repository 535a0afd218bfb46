use serde::{Deserialize, Serialize};

use crate::{
    error::{RenderError, Result},
    geometry::{PrimitiveEnum, Sphere, Triangle},
    math::Point3,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere { center: [f64; 3], radius: f64 },
    Triangle { vertices: [[f64; 3]; 3] },
}

impl PrimitiveData {
    /// Converts to a primitive, rejecting ones that could never be hit.
    pub fn transform(self) -> Result<PrimitiveEnum> {
        match self {
            Self::Sphere { center, radius } => {
                let sphere = Sphere::new(Point3::from(center), radius);
                if sphere.is_degenerate() {
                    return Err(RenderError::InvalidPrimitive(format!(
                        "sphere at {:?} has radius {}, expected a finite positive value",
                        center, radius
                    )));
                }
                Ok(PrimitiveEnum::Sphere(sphere))
            }
            Self::Triangle { vertices } => {
                let [v0, v1, v2] = vertices.map(Point3::from);
                if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
                    return Err(RenderError::InvalidPrimitive(format!(
                        "triangle {:?} has non-finite vertices",
                        vertices
                    )));
                }
                Ok(PrimitiveEnum::Triangle(Triangle::new(v0, v1, v2)))
            }
        }
    }
}
