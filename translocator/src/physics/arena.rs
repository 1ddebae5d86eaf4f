use std::f32::consts::FRAC_PI_2;

use cgmath::{Quaternion, Rad, Rotation3, Vector3, vec3};
use rapier3d::prelude::{Real, RigidBodyHandle, SharedShape, Vector};

use super::{MaterialId, PhysicsWorld};
use crate::config::TranslocatorConfig;

/// Ground plane plus four invisible walls enclosing the square play area
/// `[0, arena_size]` on X and Z.
pub struct Arena {
    pub ground: RigidBodyHandle,
    pub walls: [RigidBodyHandle; 4],
}

impl Arena {
    pub fn build(physics: &mut PhysicsWorld, config: &TranslocatorConfig) -> Arena {
        physics.add_contact_material(MaterialId::GROUND, MaterialId::GROUND, config.ground_contact);

        let ground = physics.create_fixed_body(vec3(0.0, 0.0, 0.0), identity());
        physics.attach_collider(
            ground,
            SharedShape::halfspace(Vector::<Real>::y_axis()),
            None,
            MaterialId::GROUND,
        );

        let walls = Self::wall_placements(config).map(|(position, rotation)| {
            let half = config.wall_half_extents;
            let wall = physics.create_fixed_body(position, rotation);
            physics.attach_collider(
                wall,
                SharedShape::cuboid(half.x, half.y, half.z),
                None,
                MaterialId::GROUND,
            );
            wall
        });

        Arena { ground, walls }
    }

    /// North, south, east, west. East and west are the north/south box turned -90° about Y.
    pub fn wall_placements(config: &TranslocatorConfig) -> [(Vector3<f32>, Quaternion<f32>); 4] {
        let size = config.arena_size;
        let half = size / 2.0;
        let height = config.wall_height;
        let turned = Quaternion::from_angle_y(Rad(-FRAC_PI_2));

        [
            (vec3(half, height, size), identity()),
            (vec3(half, height, 0.0), identity()),
            (vec3(size, height, half), turned),
            (vec3(0.0, height, half), turned),
        ]
    }
}

fn identity() -> Quaternion<f32> {
    Quaternion::new(1.0, 0.0, 0.0, 0.0)
}
