use cgmath::{Vector3, vec3};
use rapier3d::prelude::{RigidBodyHandle, SharedShape};

use crate::{
    config::TranslocatorConfig,
    physics::{Damping, MaterialId, PhysicsWorld},
};

/// Rigid body standing in for the disc while it flies. Created once and reused for
/// every throw.
pub struct TranslocatorBody {
    handle: RigidBodyHandle,
}

impl TranslocatorBody {
    pub fn spawn(
        physics: &mut PhysicsWorld,
        config: &TranslocatorConfig,
        position: Vector3<f32>,
    ) -> TranslocatorBody {
        physics.add_contact_material(MaterialId::GROUND, MaterialId::TRANSLOCATOR, config.disc_contact);

        let handle = physics.create_dynamic_body(
            position,
            Damping {
                linear: config.linear_damping,
                angular: config.angular_damping,
            },
        );
        physics.attach_collider(
            handle,
            SharedShape::ball(config.disc_radius),
            Some(config.disc_mass),
            MaterialId::TRANSLOCATOR,
        );

        TranslocatorBody { handle }
    }

    pub fn handle(&self) -> RigidBodyHandle {
        self.handle
    }

    pub fn position(&self, physics: &PhysicsWorld) -> Vector3<f32> {
        physics
            .get_position(self.handle)
            .unwrap_or(vec3(0.0, 0.0, 0.0))
    }

    pub fn velocity(&self, physics: &PhysicsWorld) -> Vector3<f32> {
        physics
            .get_velocity(self.handle)
            .unwrap_or(vec3(0.0, 0.0, 0.0))
    }

    pub fn angular_velocity(&self, physics: &PhysicsWorld) -> Vector3<f32> {
        physics
            .get_angular_velocity(self.handle)
            .unwrap_or(vec3(0.0, 0.0, 0.0))
    }

    /// Place the body at a fresh launch point with no leftover motion.
    pub fn resync(&self, physics: &mut PhysicsWorld, position: Vector3<f32>) {
        physics.set_translation(self.handle, position);
        self.stop(physics);
    }

    pub fn stop(&self, physics: &mut PhysicsWorld) {
        physics.set_velocity(self.handle, vec3(0.0, 0.0, 0.0));
        physics.set_angular_velocity(self.handle, vec3(0.0, 0.0, 0.0));
    }

    pub fn launch(&self, physics: &mut PhysicsWorld, impulse: Vector3<f32>) {
        let point = self.position(physics);
        physics.apply_impulse_at_point(self.handle, impulse, point);
    }
}
