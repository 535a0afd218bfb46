use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    math::{Point3, Vec3},
};

fn default_origin() -> [f64; 3] {
    [0.0, 0.0, 0.0]
}

fn default_viewport_height() -> f64 {
    2.0
}

fn default_focal_length() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CameraData {
    Pinhole {
        #[serde(default = "default_origin")]
        origin: [f64; 3],
        #[serde(default = "default_viewport_height")]
        viewport_height: f64,
        #[serde(default = "default_focal_length")]
        focal_length: f64,
        // falls back to the image's aspect ratio
        #[serde(default)]
        aspect_ratio: Option<f64>,
    },
    Basis {
        origin: [f64; 3],
        horizontal: [f64; 3],
        vertical: [f64; 3],
        lower_left_corner: [f64; 3],
    },
}

impl Default for CameraData {
    fn default() -> Self {
        CameraData::Pinhole {
            origin: default_origin(),
            viewport_height: default_viewport_height(),
            focal_length: default_focal_length(),
            aspect_ratio: None,
        }
    }
}

impl CameraData {
    pub fn build(self, image_aspect_ratio: f64) -> Camera {
        match self {
            CameraData::Pinhole {
                origin,
                viewport_height,
                focal_length,
                aspect_ratio,
            } => Camera::new(
                Point3::from(origin),
                aspect_ratio.unwrap_or(image_aspect_ratio),
                viewport_height,
                focal_length,
            ),
            CameraData::Basis {
                origin,
                horizontal,
                vertical,
                lower_left_corner,
            } => Camera::from_basis(
                Point3::from(origin),
                Vec3::from(horizontal),
                Vec3::from(vertical),
                Point3::from(lower_left_corner),
            ),
        }
    }
}
