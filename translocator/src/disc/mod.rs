pub mod body;
pub mod glow;

pub use body::TranslocatorBody;
pub use glow::{GlowIndicator, GlowPair};

use cgmath::Vector3;
use engine::scene::{Attachment, Camera, Transform};

use crate::assets::TRANSLOCATOR_MODEL;

/// Where the disc is in its throw/recall cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscState {
    /// Riding on the camera, ready to throw.
    Idle,
    /// Thrown; the physics body drives its position.
    Flying,
    /// Homing back toward the player.
    Recalling,
}

/// The visible disc: its transform, attachment, and glow.
#[derive(Clone, Debug)]
pub struct Translocator {
    pub model: &'static str,
    transform: Transform,
    attachment: Attachment,
    attach_offset: Vector3<f32>,
    is_fired: bool,
    glow: GlowPair,
}

impl Translocator {
    pub fn new(attach_offset: Vector3<f32>) -> Translocator {
        let mut translocator = Translocator {
            model: TRANSLOCATOR_MODEL,
            transform: Transform::from_position(attach_offset),
            attachment: Attachment::FirstPersonCamera,
            attach_offset,
            is_fired: false,
            glow: GlowPair::new(),
        };
        translocator.set_glow(false);
        translocator
    }

    /// Switch glows; the fired flag always moves with them.
    pub fn set_glow(&mut self, is_fired: bool) {
        self.is_fired = is_fired;
        self.glow.show_fired(is_fired);
    }

    pub fn is_fired(&self) -> bool {
        self.is_fired
    }

    pub fn glow(&self) -> &GlowPair {
        &self.glow
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    pub fn attach_offset(&self) -> Vector3<f32> {
        self.attach_offset
    }

    /// Position in the current attachment's space.
    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.transform.position = position;
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.transform.translate(delta);
    }

    pub fn world_position(&self, camera: &Camera) -> Vector3<f32> {
        self.attachment.to_world(self.transform.position, camera)
    }

    /// Leave the camera and continue from `world_position`.
    pub fn detach(&mut self, world_position: Vector3<f32>) {
        self.attachment = Attachment::World;
        self.transform.position = world_position;
    }

    pub fn attach_to_camera(&mut self) {
        self.attachment = Attachment::FirstPersonCamera;
        self.transform.position = self.attach_offset;
    }
}
