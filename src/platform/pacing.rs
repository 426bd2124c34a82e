//! Fixed-rate frame pacing
//!
//! Deadlines are measured from the start of the current frame, so a slow
//! frame just delays the next one. There is no catch-up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_frame: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Deadline for the next frame
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Mark a frame as started at `now`
    pub fn begin_frame(&mut self, now: Instant) {
        self.next_frame = now + self.frame;
    }
}
