use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the render/advance loop to a fixed generation rate.
pub struct FrameLimiter {
    frame_budget: Duration,
    frame_start: Instant,
    smoothed_secs: f64,
}

impl FrameLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / max_fps),
            frame_start: Instant::now(),
            smoothed_secs: 1.0 / max_fps,
        }
    }

    /// Smoothed rate the loop is actually achieving.
    pub fn fps(&self) -> f64 {
        1.0 / self.smoothed_secs
    }

    /// Sleep out the rest of the current frame budget.
    pub fn delay(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if self.frame_budget > elapsed {
            sleep(self.frame_budget - elapsed);
        }

        let frame_secs = self.frame_start.elapsed().as_secs_f64();
        self.smoothed_secs += (frame_secs - self.smoothed_secs) * 0.1;
        self.frame_start = Instant::now();
    }
}
