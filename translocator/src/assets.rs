use cgmath::{Vector3, vec3};
use engine::scene::Transform;

pub const BASE_MODEL: &str = "models/baseLight.glb";
pub const TRANSLOCATOR_MODEL: &str = "models/translocator.glb";
pub const BLUE_GLOW_MODEL: &str = "models/blueGlow.glb";
pub const ORANGE_GLOW_MODEL: &str = "models/orangeGlow.glb";
pub const TELEPORT_MODEL: &str = "models/teleport.glb";

pub const TELEPORT_SOUND: &str = "sounds/teleport.mp3";
pub const SHOOT_SOUND: &str = "sounds/shoot.mp3";
pub const RECALL_SOUND: &str = "sounds/recall.mp3";

pub const TELEPORT_CLIP: &str = "Teleport";

/// A static model placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticModel {
    pub model: &'static str,
    pub transform: Transform,
}

/// Everything the host has to load before the scene runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneAssets {
    pub statics: Vec<StaticModel>,
    pub models: Vec<&'static str>,
    pub sounds: Vec<&'static str>,
}

const BASE_SCALE: Vector3<f32> = Vector3::new(3.0, 1.0, 3.0);

impl SceneAssets {
    pub fn manifest() -> SceneAssets {
        SceneAssets {
            statics: vec![StaticModel {
                model: BASE_MODEL,
                transform: Transform::from_position(vec3(0.0, 0.0, 0.0)).with_scale(BASE_SCALE),
            }],
            models: vec![
                TRANSLOCATOR_MODEL,
                BLUE_GLOW_MODEL,
                ORANGE_GLOW_MODEL,
                TELEPORT_MODEL,
            ],
            sounds: vec![TELEPORT_SOUND, SHOOT_SOUND, RECALL_SOUND],
        }
    }
}
