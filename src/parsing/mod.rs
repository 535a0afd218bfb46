mod camera;
mod primitives;

pub use camera::CameraData;
pub use primitives::PrimitiveData;

use std::{fs::File, io::Read, path::Path};

use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::Result, scene::Scene};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub camera: Option<CameraData>,
    pub primitives: Vec<PrimitiveData>,
}

impl SceneData {
    pub fn into_scene(self) -> Result<Scene> {
        let primitives = self
            .primitives
            .into_iter()
            .map(|e| e.transform())
            .collect::<Result<Vec<_>>>()?;
        if primitives.is_empty() {
            warn!("scene has no primitives, every pixel will be background");
        }
        Ok(Scene::from(primitives))
    }
}

pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

/// Reads a scene file, returning the scene and the camera it asks for, if any.
pub fn load_scene(path: &Path) -> Result<(Scene, Option<CameraData>)> {
    let data: SceneData = load_json(path)?;
    debug!(
        "loaded {} primitive descriptions from {}",
        data.primitives.len(),
        path.display()
    );
    let camera = data.camera.clone();
    Ok((data.into_scene()?, camera))
}
