use engine::physics_log;

/// Fixed-step accumulator with a cap on catch-up steps per frame.
///
/// Once `max_sub_steps` have run in a frame, the remaining backlog is dropped, so the
/// simulation falls behind real time under heavy lag instead of spiralling.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: f32,
    max_sub_steps: usize,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_sub_steps: usize) -> FixedTimestep {
        FixedTimestep {
            step,
            max_sub_steps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add `dt` and return how many fixed steps to run this frame.
    pub fn advance(&mut self, dt: f32) -> usize {
        if !(dt > 0.0) || !(self.step > 0.0) {
            return 0;
        }

        // Absorb f32 rounding so e.g. 1/30 s yields two 1/60 s steps.
        let tolerance = self.step * 1e-4;

        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator + tolerance >= self.step && steps < self.max_sub_steps {
            self.accumulator = (self.accumulator - self.step).max(0.0);
            steps += 1;
        }

        if self.accumulator + tolerance >= self.step {
            physics_log!(
                DEBUG,
                "Sub-step cap reached, dropping {:.4}s of simulation time",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
