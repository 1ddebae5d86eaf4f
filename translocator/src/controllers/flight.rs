use engine::game_log;

use super::ControllerStatus;
use crate::{
    disc::{Translocator, TranslocatorBody},
    physics::PhysicsWorld,
};

/// Steps physics and slaves the disc's transform to its body while it is fired.
#[derive(Clone, Debug, Default)]
pub struct FlightController;

impl FlightController {
    pub fn new() -> FlightController {
        FlightController::default()
    }

    pub fn update(
        &mut self,
        dt: f32,
        physics: &mut PhysicsWorld,
        body: &TranslocatorBody,
        translocator: &mut Translocator,
    ) -> ControllerStatus {
        if !translocator.is_fired() {
            game_log!(DEBUG, "Disc no longer fired, detaching flight controller");
            return ControllerStatus::Detach;
        }

        physics.step(dt);
        translocator.set_position(body.position(physics));

        ControllerStatus::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::TranslocatorConfig, physics::FixedTimestep};
    use cgmath::vec3;

    fn setup() -> (PhysicsWorld, TranslocatorBody, Translocator) {
        let config = TranslocatorConfig::default();
        let mut physics = PhysicsWorld::new(config.gravity, FixedTimestep::new(config.fixed_time_step, 3));
        let body = TranslocatorBody::spawn(&mut physics, &config, vec3(5.0, 5.0, 5.0));
        let translocator = Translocator::new(config.attach_offset);
        (physics, body, translocator)
    }

    #[test]
    fn test_copies_body_position_after_step() {
        let (mut physics, body, mut translocator) = setup();
        translocator.set_glow(true);
        translocator.detach(vec3(5.0, 5.0, 5.0));

        let mut flight = FlightController::new();
        assert_eq!(
            flight.update(1.0 / 60.0, &mut physics, &body, &mut translocator),
            ControllerStatus::Continue
        );

        let position = body.position(&physics);
        assert!(position.y < 5.0);
        assert_eq!(translocator.position(), position);
    }

    #[test]
    fn test_detaches_without_stepping_when_not_fired() {
        let (mut physics, body, mut translocator) = setup();

        let mut flight = FlightController::new();
        assert_eq!(
            flight.update(1.0 / 60.0, &mut physics, &body, &mut translocator),
            ControllerStatus::Detach
        );
        assert_eq!(body.position(&physics), vec3(5.0, 5.0, 5.0));
    }
}
