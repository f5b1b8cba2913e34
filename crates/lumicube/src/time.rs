//! Frame timing.
//!
//! Only used for statistics. Scene increments are fixed per tick and never
//! scaled by the frame delta.

use std::time::{Duration, Instant};

/// Frame counter and delta, updated once per tick.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    startup: Instant,
    frame_start: Instant,
    delta: Duration,
    frame_count: u64,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each tick.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.frame_start;
        self.frame_start = now;
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Total elapsed time since startup.
    pub fn elapsed(&self) -> Duration {
        self.frame_start - self.startup
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Estimated FPS based on the last frame's delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
