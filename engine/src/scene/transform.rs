use cgmath::{Quaternion, Vector3, vec3};

/// Local transform of a scene entity, relative to whatever it is attached to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn from_position(position: Vector3<f32>) -> Transform {
        Transform {
            position,
            ..Transform::default()
        }
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Transform {
        self.scale = scale;
        self
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = vec3(scale, scale, scale);
    }

    /// Zero scale is how the platform hides an entity without removing it.
    pub fn is_hidden(&self) -> bool {
        self.scale == vec3(0.0, 0.0, 0.0)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: vec3(0.0, 0.0, 0.0),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: vec3(1.0, 1.0, 1.0),
        }
    }
}
