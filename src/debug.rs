/*
 * Debug Information Module
 *
 * Frame statistics shown in the control panel and the debug overlay.
 */

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames: u64,
    pub boid_count: usize,
    pub wall_count: usize,
}

impl DebugInfo {
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
