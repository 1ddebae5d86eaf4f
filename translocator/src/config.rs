use std::path::Path;

use anyhow::{Context, Result};
use cgmath::{Vector3, vec3};
use serde::{Deserialize, Serialize};

use crate::input::InputBindings;

/// Friction/restitution used when two materials touch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactCoefficients {
    pub friction: f32,
    pub restitution: f32,
}

/// Every tunable of the translocator scene. Missing TOML fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslocatorConfig {
    /// Disc offset from the first-person camera while idle.
    pub attach_offset: Vector3<f32>,
    pub shoot_impulse: f32,
    pub fixed_time_step: f32,
    pub max_sub_steps: usize,
    pub recall_speed: f32,
    /// Squared distance at which a recalled disc snaps back to the camera.
    pub recall_reach_sq: f32,

    pub gravity: Vector3<f32>,
    pub disc_mass: f32,
    pub disc_radius: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,

    pub arena_size: f32,
    pub wall_half_extents: Vector3<f32>,
    pub wall_height: f32,
    pub ground_contact: ContactCoefficients,
    pub disc_contact: ContactCoefficients,

    /// Teleport effect offset from the avatar's feet.
    pub teleport_effect_offset: Vector3<f32>,

    pub bindings: InputBindings,
}

impl Default for TranslocatorConfig {
    fn default() -> Self {
        TranslocatorConfig {
            attach_offset: vec3(0.0, 0.5, 1.0),
            shoot_impulse: 100.0,
            fixed_time_step: 1.0 / 60.0,
            max_sub_steps: 3,
            recall_speed: 10.0,
            recall_reach_sq: 2.0,

            gravity: vec3(0.0, -9.82, 0.0),
            disc_mass: 3.0,
            disc_radius: 0.2,
            linear_damping: 0.4,
            angular_damping: 0.4,

            arena_size: 48.0,
            wall_half_extents: vec3(24.0, 50.0, 0.5),
            wall_height: 49.5,
            ground_contact: ContactCoefficients {
                friction: 0.0,
                restitution: 0.33,
            },
            disc_contact: ContactCoefficients {
                friction: 0.0,
                restitution: 0.8,
            },

            teleport_effect_offset: vec3(0.0, -0.5, 0.0),

            bindings: InputBindings::default(),
        }
    }
}

impl TranslocatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse translocator config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize translocator config")
    }
}
