//! Frame timing diagnostics.
//!
//! Tracks frame count, delta time and a periodically refreshed FPS figure.
//! Diagnostics only: the simulation advances a fixed step per frame and
//! never scales motion by delta time.

use std::time::{Duration, Instant};

/// How often the FPS figure is recalculated.
const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Per-frame timing tracker.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
        }
    }

    /// Update timing values. Call once per frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= FPS_UPDATE_INTERVAL {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// Total elapsed time in seconds since creation.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Time between the two most recent updates, in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Most recently calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
