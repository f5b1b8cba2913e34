//! Context — the application state driven by the frame loop.
//!
//! [`AppContext`] bundles the scene, the held-key snapshot, frame timing and
//! configuration into one struct instead of globals. The window loop owns it
//! and calls [`AppContext::tick`] once per display refresh.

use std::collections::HashMap;

use crate::config::DemoConfig;
use crate::controller::{bound_key, update_scene};
use crate::input::{Input, Key, KeyCode};
use crate::render::{FramePlan, RenderStats, prepare_frame};
use crate::scene::SceneState;
use crate::time::Time;

/// Everything the per-frame pass reads or writes.
pub struct AppContext {
    pub config: DemoConfig,
    pub scene: SceneState,
    /// Keys currently held, written by window events between ticks.
    pub keys: Input<KeyCode>,
    /// Code each physically held key was recorded under, so its release
    /// matches its press even if the produced character changed in between.
    held_as: HashMap<KeyCode, KeyCode>,
    pub time: Time,
    /// Counters from the last frame that reached the GPU.
    pub last_frame: RenderStats,
}

impl AppContext {
    pub fn new(config: DemoConfig) -> Self {
        let scene = SceneState::new(config.light);
        Self {
            config,
            scene,
            keys: Input::new(),
            held_as: HashMap::new(),
            time: Time::new(),
            last_frame: RenderStats::default(),
        }
    }

    /// One ordered pass: apply held input to the scene, then build the frame
    /// that shows the result. `aspect` is the surface width over height.
    pub fn tick(&mut self, aspect: f32) -> FramePlan {
        self.time.update();
        update_scene(&mut self.scene, &self.keys, &self.config.controls);
        prepare_frame(
            &self.scene,
            &self.config.camera,
            self.config.clear_color,
            aspect,
        )
    }

    /// Record what the renderer submitted and emit periodic statistics.
    pub fn frame_rendered(&mut self, stats: RenderStats) {
        self.last_frame = stats;

        #[cfg(feature = "diagnostics")]
        if self.stats_due() {
            let light = self.scene.light.position;
            log::debug!(
                "frame {} at {:.1}s | {:.1} fps ({:.2} ms) | pitch {:.3} yaw {:.3} | light ({:.2}, {:.2}, {:.2}) | {} draw(s), {} indices",
                self.time.frame_count(),
                self.time.elapsed().as_secs_f32(),
                self.time.fps(),
                self.time.delta().as_secs_f64() * 1000.0,
                self.scene.rotation_x,
                self.scene.rotation_y,
                light.x,
                light.y,
                light.z,
                stats.draw_calls,
                stats.indices,
            );
        }
    }

    /// True on frames where a statistics line should be logged.
    pub fn stats_due(&self) -> bool {
        let interval = self.config.stats_interval;
        interval != 0 && self.time.frame_count() % interval == 0
    }

    /// Record a key press. `logical` is what the keyboard layout produced.
    pub fn key_pressed(&mut self, physical: KeyCode, logical: &Key) {
        let Some(code) = bound_key(physical, logical) else {
            return;
        };
        self.held_as.insert(physical, code);
        self.keys.press(code);
    }

    /// Record a key release.
    pub fn key_released(&mut self, physical: KeyCode) {
        let Some(code) = self.held_as.remove(&physical) else {
            return;
        };
        if !self.held_as.values().any(|&held| held == code) {
            self.keys.release(code);
        }
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_keys(&mut self) {
        if self.keys.held_count() > 0 {
            log::debug!("Releasing {} held key(s)", self.keys.held_count());
        }
        self.held_as.clear();
        self.keys.release_all();
    }
}
