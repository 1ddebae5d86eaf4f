use cgmath::{InnerSpace, Quaternion, Rotation, Vector3, vec3};

/// Snapshot of the first-person camera the host hands to the scene each frame.
///
/// Forward is +Z in local space; `feet_position` is where the avatar stands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub feet_position: Vector3<f32>,
}

impl Camera {
    pub fn new(
        position: Vector3<f32>,
        rotation: Quaternion<f32>,
        feet_position: Vector3<f32>,
    ) -> Camera {
        Camera {
            position,
            rotation,
            feet_position,
        }
    }

    /// Camera at eye level `eye_height` above the feet.
    pub fn from_eye(position: Vector3<f32>, rotation: Quaternion<f32>, eye_height: f32) -> Camera {
        Camera::new(position, rotation, position - vec3(0.0, eye_height, 0.0))
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.rotation.rotate_vector(vec3(0.0, 0.0, 1.0)).normalize()
    }

    pub fn eye_height(&self) -> f32 {
        self.position.y - self.feet_position.y
    }

    /// Relocate the avatar so its feet stand at `target`, keeping eye height.
    pub fn move_to(&mut self, target: Vector3<f32>) {
        let eye_height = self.eye_height();
        self.feet_position = target;
        self.position = target + vec3(0.0, eye_height, 0.0);
    }
}
