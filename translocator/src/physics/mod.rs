pub mod arena;
pub mod materials;
pub mod timestep;
pub mod util;

pub use arena::Arena;
pub use materials::{ContactMaterialTable, MaterialId};
pub use timestep::FixedTimestep;

use cgmath::{Quaternion, Vector3};
use engine::physics_log;
use rapier3d::{na::Translation3, prelude::*};

use self::util::{nvec_to_cgmath, quat_to_nquat, vec_to_npoint, vec_to_nvec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub linear: f32,
    pub angular: f32,
}

/// Stepped rigid-body simulation. The solver itself is rapier; this wrapper only
/// exposes what the scene needs and runs it on a fixed step.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    materials: ContactMaterialTable,
    timestep: FixedTimestep,
}

impl PhysicsWorld {
    pub fn new(gravity: Vector3<f32>, timestep: FixedTimestep) -> PhysicsWorld {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = timestep.step();

        PhysicsWorld {
            gravity: vec_to_nvec(gravity),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            materials: ContactMaterialTable::new(),
            timestep,
        }
    }

    pub fn gravity(&self) -> Vector3<f32> {
        nvec_to_cgmath(&self.gravity)
    }

    pub fn add_contact_material(
        &mut self,
        a: MaterialId,
        b: MaterialId,
        coefficients: crate::config::ContactCoefficients,
    ) {
        self.materials.register(a, b, coefficients);
    }

    pub fn contact_materials(&self) -> &ContactMaterialTable {
        &self.materials
    }

    /// Immovable body (the equivalent of a zero-mass body).
    pub fn create_fixed_body(
        &mut self,
        position: Vector3<f32>,
        rotation: Quaternion<f32>,
    ) -> RigidBodyHandle {
        let isometry = Isometry::from_parts(
            Translation3::new(position.x, position.y, position.z),
            quat_to_nquat(rotation),
        );
        let body = RigidBodyBuilder::fixed().position(isometry).build();
        self.rigid_body_set.insert(body)
    }

    pub fn create_dynamic_body(&mut self, position: Vector3<f32>, damping: Damping) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vec_to_nvec(position))
            .linear_damping(damping.linear)
            .angular_damping(damping.angular)
            .ccd_enabled(true)
            .build();
        self.rigid_body_set.insert(body)
    }

    /// Attach a collider tagged with `material`. `mass` overrides the density-derived
    /// mass; it is ignored for fixed bodies.
    pub fn attach_collider(
        &mut self,
        handle: RigidBodyHandle,
        shape: SharedShape,
        mass: Option<f32>,
        material: MaterialId,
    ) -> ColliderHandle {
        let mut builder = ColliderBuilder::new(shape)
            .user_data(material.user_data())
            .active_hooks(ActiveHooks::MODIFY_SOLVER_CONTACTS);
        if let Some(mass) = mass {
            builder = builder.mass(mass);
        }

        let collider_handle =
            self.collider_set
                .insert_with_parent(builder.build(), handle, &mut self.rigid_body_set);

        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.recompute_mass_properties_from_colliders(&self.collider_set);
        }

        collider_handle
    }

    /// Advance by a frame's `dt` in fixed steps; returns the number of steps taken.
    pub fn step(&mut self, dt: f32) -> usize {
        let steps = self.timestep.advance(dt);
        for _ in 0..steps {
            self.step_once();
        }
        physics_log!(TRACE, "Physics advanced {} fixed step(s) for dt={:.4}", steps, dt);
        steps
    }

    /// Drop any partial step carried over from earlier frames.
    pub fn reset_timestep(&mut self) {
        self.timestep.reset();
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    fn step_once(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &self.materials,
            &(),
        );
    }

    pub fn apply_impulse_at_point(
        &mut self,
        handle: RigidBodyHandle,
        impulse: Vector3<f32>,
        point: Vector3<f32>,
    ) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.apply_impulse_at_point(vec_to_nvec(impulse), vec_to_npoint(point), true);
        }
    }

    pub fn get_position(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.rigid_body_set
            .get(handle)
            .map(|body| nvec_to_cgmath(body.translation()))
    }

    pub fn get_velocity(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.rigid_body_set
            .get(handle)
            .map(|body| nvec_to_cgmath(body.linvel()))
    }

    pub fn get_angular_velocity(&self, handle: RigidBodyHandle) -> Option<Vector3<f32>> {
        self.rigid_body_set
            .get(handle)
            .map(|body| nvec_to_cgmath(body.angvel()))
    }

    pub fn get_mass(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(handle).map(|body| body.mass())
    }

    pub fn set_translation(&mut self, handle: RigidBodyHandle, position: Vector3<f32>) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(vec_to_nvec(position), true);
        }
    }

    pub fn set_velocity(&mut self, handle: RigidBodyHandle, velocity: Vector3<f32>) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(vec_to_nvec(velocity), true);
        }
    }

    pub fn set_angular_velocity(&mut self, handle: RigidBodyHandle, velocity: Vector3<f32>) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_angvel(vec_to_nvec(velocity), true);
        }
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    #[cfg(test)]
    pub(crate) fn body_materials(&self, handle: RigidBodyHandle) -> Vec<MaterialId> {
        self.rigid_body_set
            .get(handle)
            .map(|body| {
                body.colliders()
                    .iter()
                    .filter_map(|collider| self.collider_set.get(*collider))
                    .map(MaterialId::of)
                    .collect()
            })
            .unwrap_or_default()
    }
}
