/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and store sizes, shown in the overlay when debug output is enabled.
 */

use std::time::Duration;

use crate::world::RenderView;

// Debug information to display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick: u64,
    pub fish: usize,
    pub jellyfish: usize,
    pub bubbles: usize,
}

impl DebugInfo {
    // Record store sizes from the frame that was just produced
    pub fn record(&mut self, view: &RenderView<'_>) {
        self.tick = view.tick;
        self.fish = view.fish.len();
        self.jellyfish = view.jellyfish.len();
        self.bubbles = view.bubbles.len();
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick: {}", self.tick),
            format!("Fish: {}", self.fish),
            format!("Jellyfish: {}", self.jellyfish),
            format!("Bubbles: {}", self.bubbles),
        ]
    }
}
