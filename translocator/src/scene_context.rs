use cgmath::Vector3;
use engine::{audio_log, game_log, profile, scene::Camera};

use crate::{
    assets::{RECALL_SOUND, SHOOT_SOUND, SceneAssets, TELEPORT_SOUND},
    config::TranslocatorConfig,
    controllers::{ControllerStatus, DiscController, FlightController, RecallController},
    disc::{DiscState, Translocator, TranslocatorBody},
    effect::Effect,
    input::{Action, InputEvent},
    physics::{Arena, FixedTimestep, PhysicsWorld},
    teleport::TeleportEffect,
    time::Time,
};

/// Owns the whole translocator scene: physics world, disc, its body, the teleport
/// effect, and whichever controller is active. Input handlers and `update` return the
/// platform effects (sounds, avatar moves, animations) for the host to apply.
pub struct SceneContext {
    config: TranslocatorConfig,
    assets: SceneAssets,
    physics: PhysicsWorld,
    arena: Arena,
    translocator: Translocator,
    body: TranslocatorBody,
    teleport_effect: TeleportEffect,
    controller: DiscController,
}

impl SceneContext {
    pub fn new(config: TranslocatorConfig) -> SceneContext {
        let mut physics = PhysicsWorld::new(
            config.gravity,
            FixedTimestep::new(config.fixed_time_step, config.max_sub_steps),
        );
        let arena = Arena::build(&mut physics, &config);
        let body = TranslocatorBody::spawn(&mut physics, &config, config.attach_offset);
        let translocator = Translocator::new(config.attach_offset);
        let teleport_effect = TeleportEffect::new(config.teleport_effect_offset);

        tracing::info!(
            "Translocator scene ready: {} bodies, arena {}x{}",
            physics.body_count(),
            config.arena_size,
            config.arena_size
        );

        SceneContext {
            config,
            assets: SceneAssets::manifest(),
            physics,
            arena,
            translocator,
            body,
            teleport_effect,
            controller: DiscController::Idle,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent, camera: &Camera) -> Vec<Effect> {
        match self.config.bindings.resolve(event) {
            Some(action) => self.handle_action(action, camera),
            None => Vec::new(),
        }
    }

    pub fn handle_action(&mut self, action: Action, camera: &Camera) -> Vec<Effect> {
        match action {
            Action::FireOrRecall => {
                if self.translocator.is_fired() {
                    self.recall()
                } else {
                    self.fire(camera)
                }
            }
            Action::ConfirmTeleport => self.confirm_teleport(),
        }
    }

    /// Throw the disc along the camera's forward direction.
    fn fire(&mut self, camera: &Camera) -> Vec<Effect> {
        self.controller = DiscController::Flight(FlightController::new());
        self.translocator.set_glow(true);

        let direction = camera.forward();
        let launch_point = Self::launch_point(camera, direction);
        self.translocator.detach(launch_point);

        self.body.resync(&mut self.physics, launch_point);
        self.physics.reset_timestep();
        self.body
            .launch(&mut self.physics, direction * self.config.shoot_impulse);

        game_log!(INFO, "Fired disc from {:?} along {:?}", launch_point, direction);
        vec![Self::sound(SHOOT_SOUND)]
    }

    /// One unit along `direction`, horizontally from the feet and vertically from the eye.
    pub fn launch_point(camera: &Camera, direction: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            camera.feet_position.x + direction.x,
            camera.position.y + direction.y,
            camera.feet_position.z + direction.z,
        )
    }

    fn recall(&mut self) -> Vec<Effect> {
        self.controller = DiscController::Recall(RecallController::new(
            self.config.recall_speed,
            self.config.recall_reach_sq,
        ));
        self.translocator.set_glow(false);

        game_log!(INFO, "Recalling disc from {:?}", self.translocator.position());
        vec![Self::sound(RECALL_SOUND)]
    }

    fn confirm_teleport(&mut self) -> Vec<Effect> {
        if !self.translocator.is_fired() {
            game_log!(DEBUG, "Teleport ignored, disc is not out");
            return Vec::new();
        }

        self.translocator.set_glow(false);
        let destination = self.body.position(&self.physics);
        self.controller = DiscController::Idle;
        self.reset_disc();

        game_log!(INFO, "Teleporting player to {:?}", destination);
        vec![
            Self::sound(TELEPORT_SOUND),
            Effect::SetPlayerPosition {
                position: destination,
                is_teleport: true,
            },
            self.teleport_effect.play_animation(),
        ]
    }

    /// Stop the body and put the disc back on the camera at its idle offset.
    pub fn reset_disc(&mut self) {
        self.body.stop(&mut self.physics);
        self.translocator.attach_to_camera();
        game_log!(DEBUG, "Disc reset to camera");
    }

    /// Run the active controller for one frame. Controllers emit no effects of their
    /// own, so the returned list is empty today.
    pub fn update(&mut self, time: &Time, camera: &Camera) -> Vec<Effect> {
        let dt = time.delta_seconds();

        let status = match &mut self.controller {
            DiscController::Idle => ControllerStatus::Continue,
            DiscController::Flight(flight) => profile!(
                "translocator.update.flight",
                flight.update(dt, &mut self.physics, &self.body, &mut self.translocator)
            ),
            DiscController::Recall(recall) => recall.update(dt, camera, &mut self.translocator),
        };

        if status == ControllerStatus::Detach {
            let previous = self.controller.state();
            self.controller = DiscController::Idle;
            self.reset_disc();
            game_log!(DEBUG, "{:?} controller detached", previous);
        }

        Vec::new()
    }

    /// Apply this frame's input events in order, then run `update`.
    pub fn update_with_events(
        &mut self,
        time: &Time,
        camera: &Camera,
        events: &[InputEvent],
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            effects.extend(self.handle_input(*event, camera));
        }
        effects.extend(self.update(time, camera));
        effects
    }

    fn sound(name: &str) -> Effect {
        audio_log!(DEBUG, "Queue sound {}", name);
        Effect::play_sound(name)
    }

    pub fn state(&self) -> DiscState {
        self.controller.state()
    }

    pub fn controller(&self) -> &DiscController {
        &self.controller
    }

    pub fn translocator(&self) -> &Translocator {
        &self.translocator
    }

    pub fn body(&self) -> &TranslocatorBody {
        &self.body
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn teleport_effect(&self) -> &TeleportEffect {
        &self.teleport_effect
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    pub fn config(&self) -> &TranslocatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ActionButton;
    use cgmath::{Deg, Quaternion, Rotation3, vec3};
    use engine::scene::Attachment;

    const DT: f32 = 1.0 / 60.0;

    fn frame() -> Time {
        Time::from_secs_f32(DT, 0.0)
    }

    fn center_camera() -> Camera {
        Camera::from_eye(vec3(24.0, 1.6, 24.0), Quaternion::new(1.0, 0.0, 0.0, 0.0), 1.6)
    }

    fn assert_consistent(ctx: &SceneContext) {
        let translocator = ctx.translocator();
        assert_ne!(translocator.glow().is_blue(), translocator.glow().is_orange());
        assert_eq!(translocator.glow().is_blue(), !translocator.is_fired());
        assert_eq!(translocator.is_fired(), ctx.state() == DiscState::Flying);
        assert!(!(ctx.controller().is_flight_attached() && ctx.controller().is_recall_attached()));
    }

    fn run_frames(ctx: &mut SceneContext, camera: &Camera, frames: usize) {
        for _ in 0..frames {
            ctx.update(&frame(), camera);
            assert_consistent(ctx);
        }
    }

    fn count_sounds(effects: &[Effect], name: &str) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::PlaySound { name: n, .. } if n == name))
            .count()
    }

    #[test]
    fn test_starts_idle() {
        let ctx = SceneContext::new(TranslocatorConfig::default());
        assert_eq!(ctx.state(), DiscState::Idle);
        assert_eq!(ctx.translocator().attachment(), Attachment::FirstPersonCamera);
        assert_consistent(&ctx);
    }

    #[test]
    fn test_fire_launches_along_camera_forward() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        let effects = ctx.handle_action(Action::FireOrRecall, &camera);
        assert_eq!(count_sounds(&effects, SHOOT_SOUND), 1);
        assert_eq!(ctx.state(), DiscState::Flying);
        assert_eq!(ctx.translocator().attachment(), Attachment::World);
        assert!(ctx.translocator().glow().is_orange());

        let launch = SceneContext::launch_point(&camera, vec3(0.0, 0.0, 1.0));
        assert_eq!(ctx.body().position(ctx.physics()), launch);
        assert_eq!(launch, vec3(24.0, 1.6, 25.0));

        run_frames(&mut ctx, &camera, 1);
        let velocity = ctx.body().velocity(ctx.physics());
        assert!(velocity.y < 0.0);
        assert!(velocity.z > 30.0);
        assert!(velocity.x.abs() < 1e-3);
        assert_eq!(ctx.translocator().position(), ctx.body().position(ctx.physics()));
    }

    #[test]
    fn test_recall_replaces_flight_controller() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 10);
        assert!(ctx.controller().is_flight_attached());

        let effects = ctx.handle_action(Action::FireOrRecall, &camera);
        assert_eq!(count_sounds(&effects, RECALL_SOUND), 1);
        assert!(ctx.controller().is_recall_attached());
        assert!(!ctx.controller().is_flight_attached());
        assert!(ctx.translocator().glow().is_blue());
        assert!(!ctx.translocator().is_fired());
        assert_consistent(&ctx);
    }

    #[test]
    fn test_recall_does_not_step_physics() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 5);
        ctx.handle_action(Action::FireOrRecall, &camera);

        let body_before = ctx.body().position(ctx.physics());
        run_frames(&mut ctx, &camera, 1);
        assert_eq!(ctx.body().position(ctx.physics()), body_before);
    }

    #[test]
    fn test_recall_returns_disc_to_camera() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 20);
        ctx.handle_action(Action::FireOrRecall, &camera);

        let mut frames = 0;
        while ctx.state() == DiscState::Recalling && frames < 300 {
            run_frames(&mut ctx, &camera, 1);
            frames += 1;
        }

        assert_eq!(ctx.state(), DiscState::Idle);
        assert_eq!(ctx.translocator().attachment(), Attachment::FirstPersonCamera);
        assert_eq!(ctx.translocator().position(), vec3(0.0, 0.5, 1.0));
        assert_eq!(ctx.body().velocity(ctx.physics()), vec3(0.0, 0.0, 0.0));
        assert_eq!(ctx.body().angular_velocity(ctx.physics()), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_teleport_moves_player_and_resets_disc() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 30);
        let disc_position = ctx.body().position(ctx.physics());

        let effects = ctx.handle_action(Action::ConfirmTeleport, &camera);
        assert_consistent(&ctx);

        assert_eq!(count_sounds(&effects, TELEPORT_SOUND), 1);
        assert!(effects.contains(&Effect::SetPlayerPosition {
            position: disc_position,
            is_teleport: true,
        }));
        assert!(effects.contains(&Effect::PlayAnimation {
            clip: "Teleport".to_owned()
        }));
        assert_eq!(ctx.teleport_effect().clip().map(|clip| clip.play_count()), Some(1));

        assert_eq!(ctx.state(), DiscState::Idle);
        assert_eq!(ctx.translocator().position(), ctx.config().attach_offset);
        assert_eq!(ctx.translocator().attachment(), Attachment::FirstPersonCamera);
        assert_eq!(ctx.body().velocity(ctx.physics()), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_teleport_ignored_unless_fired() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        assert!(ctx.handle_action(Action::ConfirmTeleport, &camera).is_empty());
        assert_eq!(ctx.state(), DiscState::Idle);
        assert_eq!(ctx.translocator().position(), vec3(0.0, 0.5, 1.0));

        // Also ignored mid-recall.
        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 5);
        ctx.handle_action(Action::FireOrRecall, &camera);
        assert!(ctx.handle_action(Action::ConfirmTeleport, &camera).is_empty());
        assert_eq!(ctx.state(), DiscState::Recalling);
        assert_eq!(ctx.teleport_effect().clip().map(|clip| clip.play_count()), Some(0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 10);

        ctx.reset_disc();
        let position = ctx.translocator().position();
        let body_position = ctx.body().position(ctx.physics());

        ctx.reset_disc();
        assert_eq!(ctx.translocator().position(), position);
        assert_eq!(ctx.translocator().position(), vec3(0.0, 0.5, 1.0));
        assert_eq!(ctx.body().position(ctx.physics()), body_position);
        assert_eq!(ctx.body().velocity(ctx.physics()), vec3(0.0, 0.0, 0.0));
        assert_eq!(ctx.translocator().attachment(), Attachment::FirstPersonCamera);
    }

    #[test]
    fn test_fire_while_recalling_starts_fresh_throw() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 10);
        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 1);
        assert_eq!(ctx.state(), DiscState::Recalling);

        ctx.handle_action(Action::FireOrRecall, &camera);
        assert_eq!(ctx.state(), DiscState::Flying);
        assert_eq!(
            ctx.body().position(ctx.physics()),
            SceneContext::launch_point(&camera, camera.forward())
        );

        let velocity = ctx.body().velocity(ctx.physics());
        assert!((velocity.z - 100.0 / 3.0).abs() < 1e-2);
        assert!(velocity.y.abs() < 1e-4);
    }

    #[test]
    fn test_input_events_use_bindings() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        assert!(ctx.handle_input(InputEvent::up(ActionButton::Pointer), &camera).is_empty());
        assert!(ctx.handle_input(InputEvent::down(ActionButton::Secondary), &camera).is_empty());
        assert_eq!(ctx.state(), DiscState::Idle);

        let effects = ctx.update_with_events(
            &frame(),
            &camera,
            &[InputEvent::down(ActionButton::Pointer)],
        );
        assert_eq!(count_sounds(&effects, SHOOT_SOUND), 1);
        assert_eq!(ctx.state(), DiscState::Flying);

        let effects = ctx.handle_input(InputEvent::down(ActionButton::Primary), &camera);
        assert_eq!(count_sounds(&effects, TELEPORT_SOUND), 1);
        assert_eq!(ctx.state(), DiscState::Idle);
    }

    #[test]
    fn test_new_throw_starts_with_empty_timestep() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());
        let half_frame = Time::from_secs_f32(DT / 2.0, 0.0);

        ctx.handle_action(Action::FireOrRecall, &camera);
        for _ in 0..3 {
            ctx.update(&half_frame, &camera);
        }
        assert!(ctx.physics().timestep().accumulator() > 0.0);
        ctx.handle_action(Action::ConfirmTeleport, &camera);

        ctx.handle_action(Action::FireOrRecall, &camera);
        assert_eq!(ctx.physics().timestep().accumulator(), 0.0);

        let launch = ctx.body().position(ctx.physics());
        ctx.update(&half_frame, &camera);
        assert_eq!(ctx.body().position(ctx.physics()), launch);

        ctx.update(&half_frame, &camera);
        assert_ne!(ctx.body().position(ctx.physics()), launch);
    }

    #[test]
    fn test_disc_stays_inside_walls() {
        let camera = Camera::from_eye(
            vec3(24.0, 1.6, 24.0),
            Quaternion::from_angle_y(Deg(90.0)),
            1.6,
        );
        let mut ctx = SceneContext::new(TranslocatorConfig::default());
        let size = ctx.config().arena_size;

        ctx.handle_action(Action::FireOrRecall, &camera);
        assert!(camera.forward().x > 0.99);

        let mut max_x = 0.0_f32;
        for _ in 0..600 {
            ctx.update(&frame(), &camera);
            let position = ctx.body().position(ctx.physics());
            assert!((0.0..=size).contains(&position.x), "escaped at {:?}", position);
            assert!((0.0..=size).contains(&position.z), "escaped at {:?}", position);
            max_x = max_x.max(position.x);
        }

        // It reached the east wall and came back off it.
        assert!(max_x > size - 2.0);
        assert!(ctx.body().position(ctx.physics()).x < max_x);
    }

    #[test]
    fn test_any_detach_returns_disc_to_camera() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        ctx.handle_action(Action::FireOrRecall, &camera);
        run_frames(&mut ctx, &camera, 5);

        // Clearing the fired flag under a live flight controller makes it detach.
        ctx.translocator.set_glow(false);
        ctx.update(&frame(), &camera);

        assert_eq!(ctx.state(), DiscState::Idle);
        assert_eq!(ctx.translocator().attachment(), Attachment::FirstPersonCamera);
        assert_eq!(ctx.translocator().position(), ctx.config().attach_offset);
        assert_eq!(ctx.body().velocity(ctx.physics()), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_update_produces_no_effects() {
        let camera = center_camera();
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        assert!(ctx.update(&frame(), &camera).is_empty());
        ctx.handle_action(Action::FireOrRecall, &camera);
        assert!(ctx.update(&frame(), &camera).is_empty());
        ctx.handle_action(Action::FireOrRecall, &camera);
        assert!(ctx.update(&frame(), &camera).is_empty());
    }

    #[test]
    fn test_round_trip_ignores_flight_path() {
        let mut ctx = SceneContext::new(TranslocatorConfig::default());

        for yaw in [0.0_f32, 45.0, 135.0, 270.0] {
            let camera = Camera::from_eye(
                vec3(24.0, 1.6, 24.0),
                Quaternion::from_angle_y(Deg(yaw)),
                1.6,
            );

            ctx.handle_action(Action::FireOrRecall, &camera);
            run_frames(&mut ctx, &camera, 45);
            ctx.handle_action(Action::ConfirmTeleport, &camera);

            assert_eq!(ctx.state(), DiscState::Idle);
            assert_eq!(ctx.translocator().position(), vec3(0.0, 0.5, 1.0));
        }
    }
}
