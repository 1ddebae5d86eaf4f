use cgmath::{MetricSpace, vec3};
use engine::{game_log, scene::Camera};

use super::ControllerStatus;
use crate::disc::Translocator;

/// Pulls the disc toward the player. Each frame closes `dt * speed` of the remaining
/// gap, so the approach decays exponentially and the reach threshold ends it.
#[derive(Clone, Debug)]
pub struct RecallController {
    speed: f32,
    reach_sq: f32,
}

impl RecallController {
    pub fn new(speed: f32, reach_sq: f32) -> RecallController {
        RecallController { speed, reach_sq }
    }

    pub fn update(
        &mut self,
        dt: f32,
        camera: &Camera,
        translocator: &mut Translocator,
    ) -> ControllerStatus {
        if translocator.is_fired() {
            return ControllerStatus::Continue;
        }

        // Home to eye level minus the idle attach height, not to the feet.
        let target = camera.position - vec3(0.0, translocator.attach_offset().y, 0.0);
        let from_target = translocator.position() - target;
        let pull = (dt * self.speed).clamp(0.0, 1.0);
        translocator.translate(from_target * -pull);

        let distance_sq = translocator.position().distance2(camera.position);
        if distance_sq <= self.reach_sq {
            game_log!(DEBUG, "Recalled disc in reach (distance² {:.3})", distance_sq);
            ControllerStatus::Detach
        } else {
            ControllerStatus::Continue
        }
    }
}
