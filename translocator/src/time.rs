use std::time::Duration;

/// Frame timing handed to `SceneContext::update`.
#[derive(Clone, Debug, Default)]
pub struct Time {
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Time since the scene started.
    pub total: Duration,
}

impl Time {
    pub fn from_secs_f32(elapsed: f32, total: f32) -> Time {
        Time {
            elapsed: Duration::from_secs_f32(elapsed.max(0.0)),
            total: Duration::from_secs_f32(total.max(0.0)),
        }
    }

    pub fn delta_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
