//! Fixed-rate update clock
//!
//! Game speeds are expressed per update, so updates must run at a steady
//! rate no matter how fast frames are drawn. Frame time is accumulated and
//! paid out in whole steps.

/// Updates per second
pub const UPDATE_RATE: f64 = 60.0;

/// Most updates run for one frame; a long stall drops the remainder
pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(rate: f64) -> Self {
        Self {
            step: 1.0 / rate,
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed seconds and return how many updates to run
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME {
            // Too far behind to catch up; drop the backlog
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(UPDATE_RATE)
    }
}
