use cgmath::{Quaternion, Vector3, vec3};
use rapier3d::{na::UnitQuaternion, prelude::*};

pub fn nvec_to_cgmath(vec: &Vector<Real>) -> Vector3<f32> {
    vec3(vec.x, vec.y, vec.z)
}

pub fn vec_to_npoint(vec: Vector3<f32>) -> Point<Real> {
    point![vec.x, vec.y, vec.z]
}

pub fn vec_to_nvec(vec: Vector3<f32>) -> Vector<Real> {
    vector![vec.x, vec.y, vec.z]
}

pub fn quat_to_nquat(facing: Quaternion<f32>) -> UnitQuaternion<f32> {
    let nquat = rapier3d::na::Quaternion::new(facing.s, facing.v.x, facing.v.y, facing.v.z);
    UnitQuaternion::from_quaternion(nquat)
}
