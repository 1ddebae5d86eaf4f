use cgmath::{Rotation, Vector3};

use super::Camera;

/// What an entity's transform is relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attachment {
    /// Free in world space.
    World,
    /// Rigidly follows the first-person camera (position and rotation) every frame.
    FirstPersonCamera,
    /// Follows the player's avatar, anchored at its feet.
    Avatar,
}

impl Attachment {
    /// Resolve a local position to world space against the current camera.
    pub fn to_world(&self, local: Vector3<f32>, camera: &Camera) -> Vector3<f32> {
        match self {
            Attachment::World => local,
            Attachment::FirstPersonCamera => camera.position + camera.rotation.rotate_vector(local),
            Attachment::Avatar => camera.feet_position + local,
        }
    }
}
